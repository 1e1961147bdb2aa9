use portal_core::model::{ModuleId, RoleId, Unit};
use portal_core::{NotFound, Tab};

use crate::dashboard_service::DashboardSummary;

/// What the session currently shows, resolved against the curriculum and
/// stored progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard(DashboardSummary),
    Unit(Box<UnitScreen>),
    NotFound(NotFound),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub index: usize,
    pub title: String,
    pub completed: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitScreen {
    pub role: RoleId,
    pub module_id: ModuleId,
    pub module_title: String,
    pub index: usize,
    pub unit_count: usize,
    pub tab: Tab,
    pub unit: Unit,
    pub sidebar: Vec<SidebarEntry>,
    pub is_complete: bool,
}

impl UnitScreen {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.unit_count
    }

    /// One-based position, e.g. `Unit 1 / 2`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("Unit {} / {}", self.index + 1, self.unit_count)
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.is_last() { "Finish" } else { "Next" }
    }
}
