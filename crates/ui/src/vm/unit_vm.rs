use portal_core::model::UnitKind;
use portal_core::{NotFound, Tab};
use services::{Screen, UnitScreen};

use super::dashboard_vm::{DashboardVm, map_dashboard};
use super::markdown_vm::markdown_to_html;
use super::mindmap_vm::{MindmapNode, parse_mindmap};
use super::playground_vm::starter_code;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QaVm {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItemVm {
    pub index: usize,
    pub title: String,
    pub completed: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitVm {
    pub role: String,
    pub module_id: String,
    pub module_title: String,
    pub unit_id: String,
    pub title: String,
    pub counter_label: String,
    pub advance_label: &'static str,
    pub tab: Tab,
    pub is_complete: bool,
    pub content_html: String,
    pub mindmap: Vec<MindmapNode>,
    pub qa: Vec<QaVm>,
    pub quiz: Option<QuizVm>,
    /// Starter code when the unit carries a playground.
    pub playground: Option<String>,
    pub sidebar: Vec<SidebarItemVm>,
}

#[must_use]
pub fn map_unit(screen: &UnitScreen) -> UnitVm {
    let unit = &screen.unit;
    UnitVm {
        role: screen.role.to_string(),
        module_id: screen.module_id.to_string(),
        module_title: screen.module_title.clone(),
        unit_id: unit.id().to_string(),
        title: unit.title().to_owned(),
        counter_label: screen.counter_label(),
        advance_label: screen.advance_label(),
        tab: screen.tab,
        is_complete: screen.is_complete,
        content_html: markdown_to_html(unit.content()),
        mindmap: unit.mindmap().map(parse_mindmap).unwrap_or_default(),
        qa: unit
            .qa()
            .iter()
            .map(|pair| QaVm {
                question: pair.question().to_owned(),
                answer: pair.answer().to_owned(),
            })
            .collect(),
        quiz: unit.quiz().map(|quiz| QuizVm {
            question: quiz.question().to_owned(),
            options: quiz.options().to_vec(),
        }),
        playground: (unit.kind() == UnitKind::Code).then(|| starter_code(unit.content())),
        sidebar: screen
            .sidebar
            .iter()
            .map(|entry| SidebarItemVm {
                index: entry.index,
                title: entry.title.clone(),
                completed: entry.completed,
                active: entry.active,
            })
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotFoundVm {
    pub heading: &'static str,
    pub detail: String,
}

#[must_use]
pub fn map_not_found(reason: &NotFound) -> NotFoundVm {
    match reason {
        NotFound::Role(role) => NotFoundVm {
            heading: "Role Not Found",
            detail: format!("No learning track is called \"{role}\"."),
        },
        NotFound::Module { role, module } => NotFoundVm {
            heading: "Module Not Found",
            detail: format!("\"{module}\" is not part of the {role} track."),
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageVm {
    Dashboard(DashboardVm),
    Unit(Box<UnitVm>),
    NotFound(NotFoundVm),
}

#[must_use]
pub fn map_screen(screen: &Screen) -> PageVm {
    match screen {
        Screen::Dashboard(summary) => PageVm::Dashboard(map_dashboard(summary)),
        Screen::Unit(unit) => PageVm::Unit(Box::new(map_unit(unit))),
        Screen::NotFound(reason) => PageVm::NotFound(map_not_found(reason)),
    }
}
