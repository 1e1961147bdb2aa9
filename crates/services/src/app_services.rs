use std::sync::Arc;

use portal_core::Curriculum;
use portal_core::model::{ModuleId, RoleId};
use storage::repository::Storage;

use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::playground::PlaygroundService;
use crate::portal::PortalSession;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one curriculum and one store.
#[derive(Clone)]
pub struct AppServices {
    curriculum: Arc<Curriculum>,
    progress: Arc<ProgressService>,
    dashboard: Arc<DashboardService>,
    playground: Arc<PlaygroundService>,
}

impl AppServices {
    /// Build services over the built-in curriculum backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the curriculum is invalid or storage
    /// initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let curriculum = Curriculum::builtin()?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(curriculum, &storage))
    }

    #[must_use]
    pub fn from_storage(curriculum: Curriculum, storage: &Storage) -> Self {
        let curriculum = Arc::new(curriculum);
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.progress)));
        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&curriculum),
            Arc::clone(&progress),
        ));
        Self {
            curriculum,
            progress,
            dashboard,
            playground: Arc::new(PlaygroundService::default()),
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn playground(&self) -> Arc<PlaygroundService> {
        Arc::clone(&self.playground)
    }

    /// Start a portal session at the role dashboard, or at the module's
    /// first unit when `module` is given.
    #[must_use]
    pub fn open_session(&self, role: &RoleId, module: Option<&ModuleId>) -> PortalSession {
        PortalSession::open(
            Arc::clone(&self.curriculum),
            Arc::clone(&self.progress),
            role,
            module,
        )
    }
}
