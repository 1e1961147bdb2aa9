//! Shared error types for the services crate.

use thiserror::Error;

use portal_core::CurriculumError;
use portal_core::model::{ModuleId, RoleId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the dashboard and the portal session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PortalError {
    #[error("role not found: {0}")]
    UnknownRole(RoleId),
    #[error("module {module} not found in role {role}")]
    UnknownModule { role: RoleId, module: ModuleId },
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
}
