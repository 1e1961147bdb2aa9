use services::{DashboardSummary, ModuleProgress, RoleSummary};

/// Glyph shown for a role icon name. Unknown names fall back to the star.
#[must_use]
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "shield" => "\u{1F6E1}",
        "code" => "</>",
        "check-circle" => "\u{2714}",
        "briefcase" => "\u{1F4BC}",
        "layers" => "\u{2630}",
        _ => "\u{2605}",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub glyph: &'static str,
}

impl RoleCardVm {
    #[must_use]
    pub fn from_summary(role: &RoleSummary) -> Self {
        Self {
            id: role.id.to_string(),
            title: role.title.clone(),
            description: role.description.clone(),
            color: role.color.clone(),
            glyph: icon_glyph(&role.icon),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub units_label: String,
    pub percentage: u8,
    pub percent_label: String,
}

impl ModuleRowVm {
    #[must_use]
    pub fn from_progress(module: &ModuleProgress) -> Self {
        let noun = if module.unit_count == 1 { "unit" } else { "units" };
        Self {
            id: module.id.to_string(),
            title: module.title.clone(),
            description: module.description.clone(),
            units_label: format!("{} / {} {noun}", module.completed_count, module.unit_count),
            percentage: module.percentage,
            percent_label: format!("{}%", module.percentage),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub role: RoleCardVm,
    pub overall_label: String,
    pub modules: Vec<ModuleRowVm>,
}

#[must_use]
pub fn map_dashboard(summary: &DashboardSummary) -> DashboardVm {
    DashboardVm {
        role: RoleCardVm::from_summary(&summary.role),
        overall_label: format!("{}% complete", summary.overall_percentage),
        modules: summary
            .modules
            .iter()
            .map(ModuleRowVm::from_progress)
            .collect(),
    }
}

#[must_use]
pub fn map_role_cards(roles: &[RoleSummary]) -> Vec<RoleCardVm> {
    roles.iter().map(RoleCardVm::from_summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::ModuleId;

    #[test]
    fn unknown_icons_use_the_star() {
        assert_eq!(icon_glyph("code"), "</>");
        assert_eq!(icon_glyph("rocket"), icon_glyph("star"));
    }

    #[test]
    fn module_row_labels() {
        let row = ModuleRowVm::from_progress(&ModuleProgress {
            id: ModuleId::new("top-lwc"),
            title: "LWC".into(),
            description: String::new(),
            unit_count: 1,
            completed_count: 1,
            percentage: 100,
        });
        assert_eq!(row.units_label, "1 / 1 unit");
        assert_eq!(row.percent_label, "100%");
    }
}
