use std::sync::Arc;

use portal_core::model::{ModuleId, RoleId, UnitId};
use portal_core::{Curriculum, NavEffect, NavEvent, NavState};

use super::event::{Notice, PortalEvent};
use super::screen::{Screen, SidebarEntry, UnitScreen};
use crate::dashboard_service::DashboardService;
use crate::error::PortalError;
use crate::progress_service::{MarkOutcome, ProgressService, ToggleOutcome};

/// One learner's walk through the portal.
///
/// Holds the navigation state and routes every event through
/// [`PortalSession::handle`], which applies the progress side effects a
/// transition asks for before adopting the new state.
#[derive(Clone)]
pub struct PortalSession {
    curriculum: Arc<Curriculum>,
    progress: Arc<ProgressService>,
    state: NavState,
}

impl PortalSession {
    /// Start a session from launch parameters.
    ///
    /// Unknown roles or modules produce a session stuck in `NotFound`.
    #[must_use]
    pub fn open(
        curriculum: Arc<Curriculum>,
        progress: Arc<ProgressService>,
        role: &RoleId,
        module: Option<&ModuleId>,
    ) -> Self {
        let state = NavState::enter(&curriculum, role, module);
        if let NavState::NotFound(reason) = &state {
            tracing::info!(?reason, "portal opened on a missing target");
        }
        Self {
            curriculum,
            progress,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Apply an event and return the notices it produced.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Progress` if a completion cannot be stored. The
    /// navigation state is left unchanged in that case.
    pub async fn handle(&mut self, event: PortalEvent) -> Result<Vec<Notice>, PortalError> {
        match event {
            PortalEvent::Nav(nav) => self.navigate(&nav).await,
            PortalEvent::ToggleComplete => self.toggle_current().await,
            PortalEvent::SubmitQuiz(selected) => Ok(self.submit_quiz(selected)),
        }
    }

    async fn navigate(&mut self, event: &NavEvent) -> Result<Vec<Notice>, PortalError> {
        let transition = self.state.transition(&self.curriculum, event);
        if transition.is_noop(&self.state) {
            return Ok(Vec::new());
        }

        let mut notices = Vec::new();
        for effect in &transition.effects {
            match effect {
                NavEffect::MarkComplete { role, unit } => {
                    if self.progress.mark_complete(role, unit).await? == MarkOutcome::Marked {
                        notices.push(Notice::UnitCompleted {
                            title: self.unit_title(unit),
                        });
                    }
                }
            }
        }

        tracing::trace!(?event, from = ?self.state, to = ?transition.state, "navigation");
        self.state = transition.state;
        Ok(notices)
    }

    async fn toggle_current(&mut self) -> Result<Vec<Notice>, PortalError> {
        let Some(cursor) = self.state.cursor() else {
            return Ok(Vec::new());
        };
        let Some(unit) = self
            .curriculum
            .unit(&cursor.role, &cursor.module, cursor.index)
        else {
            return Ok(Vec::new());
        };

        let title = unit.title().to_owned();
        let notice = match self.progress.toggle(&cursor.role, unit.id()).await? {
            ToggleOutcome::Marked => Notice::UnitCompleted { title },
            ToggleOutcome::Unmarked => Notice::UnitUnmarked { title },
        };
        Ok(vec![notice])
    }

    fn submit_quiz(&self, selected: Option<usize>) -> Vec<Notice> {
        let Some(cursor) = self.state.cursor() else {
            return Vec::new();
        };
        let Some(quiz) = self
            .curriculum
            .unit(&cursor.role, &cursor.module, cursor.index)
            .and_then(|unit| unit.quiz())
        else {
            return Vec::new();
        };

        let outcome = quiz.evaluate(selected);
        if !outcome.is_answered() {
            return vec![Notice::QuizNoSelection];
        }
        vec![Notice::QuizAnswered {
            outcome,
            explanation: quiz.explanation().map(str::to_owned),
        }]
    }

    fn unit_title(&self, unit_id: &UnitId) -> String {
        self.state
            .cursor()
            .and_then(|cursor| self.curriculum.module(&cursor.role, &cursor.module))
            .and_then(|module| module.units().iter().find(|unit| unit.id() == unit_id))
            .map_or_else(|| unit_id.to_string(), |unit| unit.title().to_owned())
    }

    /// Resolve the current state into something displayable.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Progress` if stored progress cannot be read.
    pub async fn screen(&self) -> Result<Screen, PortalError> {
        match &self.state {
            NavState::NotFound(reason) => Ok(Screen::NotFound(reason.clone())),
            NavState::Dashboard { role } => {
                let dashboard =
                    DashboardService::new(Arc::clone(&self.curriculum), Arc::clone(&self.progress));
                Ok(Screen::Dashboard(dashboard.summary(role).await?))
            }
            NavState::UnitView(cursor) => {
                let module = self
                    .curriculum
                    .module(&cursor.role, &cursor.module)
                    .ok_or_else(|| PortalError::UnknownModule {
                        role: cursor.role.clone(),
                        module: cursor.module.clone(),
                    })?;
                let unit = module
                    .unit(cursor.index)
                    .ok_or_else(|| PortalError::UnknownModule {
                        role: cursor.role.clone(),
                        module: cursor.module.clone(),
                    })?;
                let completed = self.progress.completed(&cursor.role).await?;

                let sidebar = module
                    .units()
                    .iter()
                    .enumerate()
                    .map(|(index, u)| SidebarEntry {
                        index,
                        title: u.title().to_owned(),
                        completed: completed.contains(u.id()),
                        active: index == cursor.index,
                    })
                    .collect();

                Ok(Screen::Unit(Box::new(UnitScreen {
                    role: cursor.role.clone(),
                    module_id: module.id().clone(),
                    module_title: module.title().to_owned(),
                    index: cursor.index,
                    unit_count: module.unit_count(),
                    tab: cursor.tab,
                    is_complete: completed.contains(unit.id()),
                    unit: unit.clone(),
                    sidebar,
                })))
            }
        }
    }
}
