mod dashboard_vm;
mod highlight_vm;
mod markdown_vm;
mod mindmap_vm;
mod playground_vm;
mod toast_vm;
mod unit_vm;

pub use dashboard_vm::{
    DashboardVm, ModuleRowVm, RoleCardVm, icon_glyph, map_dashboard, map_role_cards,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use mindmap_vm::{MindmapNode, parse_mindmap};
pub use playground_vm::{DEFAULT_STARTER, starter_code};
pub use toast_vm::{QuizFeedbackVm, ToastKind, ToastVm, quiz_feedback, toast_for};
pub use unit_vm::{
    NotFoundVm, PageVm, QaVm, QuizVm, SidebarItemVm, UnitVm, map_not_found, map_screen, map_unit,
};
