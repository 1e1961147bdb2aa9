use std::sync::Arc;

use portal_core::Curriculum;
use portal_core::model::{ModuleId, Role, RoleId};
use portal_core::progress::completion_percentage;

use crate::error::PortalError;
use crate::progress_service::ProgressService;

/// Presentation-agnostic card for the role picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSummary {
    pub id: RoleId,
    pub title: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

impl RoleSummary {
    #[must_use]
    pub fn from_role(role: &Role) -> Self {
        Self {
            id: role.id().clone(),
            title: role.title().to_owned(),
            description: role.description().to_owned(),
            color: role.color().to_owned(),
            icon: role.icon().to_owned(),
        }
    }
}

/// One module row on a role dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgress {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    pub unit_count: usize,
    pub completed_count: usize,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub role: RoleSummary,
    pub modules: Vec<ModuleProgress>,
    /// Completion across every unit of the role.
    pub overall_percentage: u8,
}

/// Builds dashboard summaries from the curriculum and stored progress.
#[derive(Clone)]
pub struct DashboardService {
    curriculum: Arc<Curriculum>,
    progress: Arc<ProgressService>,
}

impl DashboardService {
    #[must_use]
    pub fn new(curriculum: Arc<Curriculum>, progress: Arc<ProgressService>) -> Self {
        Self {
            curriculum,
            progress,
        }
    }

    /// All roles in curriculum order.
    #[must_use]
    pub fn roles(&self) -> Vec<RoleSummary> {
        self.curriculum
            .roles()
            .iter()
            .map(RoleSummary::from_role)
            .collect()
    }

    /// Module list with per-module completion for `role`.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::UnknownRole` if the role is not in the curriculum.
    /// Returns `PortalError::Progress` if stored progress cannot be read.
    pub async fn summary(&self, role: &RoleId) -> Result<DashboardSummary, PortalError> {
        let found = self
            .curriculum
            .role(role)
            .ok_or_else(|| PortalError::UnknownRole(role.clone()))?;
        let completed = self.progress.completed(role).await?;

        let modules: Vec<ModuleProgress> = found
            .modules()
            .iter()
            .map(|module| {
                let completed_count = completed.count_in(module);
                ModuleProgress {
                    id: module.id().clone(),
                    title: module.title().to_owned(),
                    description: module.description().to_owned(),
                    unit_count: module.unit_count(),
                    completed_count,
                    percentage: completion_percentage(completed_count, module.unit_count()),
                }
            })
            .collect();
        let done: usize = modules.iter().map(|m| m.completed_count).sum();

        Ok(DashboardSummary {
            role: RoleSummary::from_role(found),
            overall_percentage: completion_percentage(done, found.total_units()),
            modules,
        })
    }
}
