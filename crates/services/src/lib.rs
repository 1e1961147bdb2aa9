#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod playground;
pub mod portal;
pub mod progress_service;

pub use app_services::AppServices;
pub use dashboard_service::{DashboardService, DashboardSummary, ModuleProgress, RoleSummary};
pub use error::{AppServicesError, PortalError, ProgressError};
pub use playground::{PlaygroundService, RUNNING_LABEL, RunOutput};
pub use portal::{Notice, PortalEvent, PortalSession, Screen, SidebarEntry, UnitScreen};
pub use progress_service::{MarkOutcome, ProgressService, ToggleOutcome, UnmarkOutcome};
