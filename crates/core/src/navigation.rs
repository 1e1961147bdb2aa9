//! Unit navigation as a pure state machine.
//!
//! `NavState::transition` never touches storage. Side effects such as the
//! automatic completion on Next/Finish are returned as [`NavEffect`]s for
//! the caller to apply before adopting the new state.

use crate::curriculum::Curriculum;
use crate::model::{ModuleId, RoleId, UnitId};

/// Display tab inside the unit viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Learn,
    Visualize,
    Practice,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Learn, Tab::Visualize, Tab::Practice];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Learn => "Learn",
            Tab::Visualize => "Visualize",
            Tab::Practice => "Practice",
        }
    }
}

/// Position of the learner inside a module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub role: RoleId,
    pub module: ModuleId,
    pub index: usize,
    pub tab: Tab,
}

/// What could not be resolved when entering the portal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotFound {
    Role(RoleId),
    Module { role: RoleId, module: ModuleId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    Dashboard { role: RoleId },
    UnitView(Cursor),
    /// Terminal for the session; only a fresh launch leaves it.
    NotFound(NotFound),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    OpenModule(ModuleId),
    /// "Next" on any unit but the last, "Finish" on the last.
    Next,
    SelectUnit(usize),
    SwitchTab(Tab),
    BackToDashboard,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEffect {
    MarkComplete { role: RoleId, unit: UnitId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: NavState,
    pub effects: Vec<NavEffect>,
}

impl Transition {
    fn stay(state: &NavState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    fn to(state: NavState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_noop(&self, from: &NavState) -> bool {
        self.effects.is_empty() && &self.state == from
    }
}

impl NavState {
    /// Resolve launch parameters into the initial state.
    ///
    /// A role alone opens its dashboard; a role plus module opens the
    /// module's first unit on the Learn tab.
    #[must_use]
    pub fn enter(curriculum: &Curriculum, role: &RoleId, module: Option<&ModuleId>) -> Self {
        let Some(found_role) = curriculum.role(role) else {
            return NavState::NotFound(NotFound::Role(role.clone()));
        };
        match module {
            None => NavState::Dashboard { role: role.clone() },
            Some(module) if found_role.module(module).is_some() => NavState::UnitView(Cursor {
                role: role.clone(),
                module: module.clone(),
                index: 0,
                tab: Tab::Learn,
            }),
            Some(module) => NavState::NotFound(NotFound::Module {
                role: role.clone(),
                module: module.clone(),
            }),
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<&RoleId> {
        match self {
            NavState::Dashboard { role } => Some(role),
            NavState::UnitView(cursor) => Some(&cursor.role),
            NavState::NotFound(_) => None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&Cursor> {
        match self {
            NavState::UnitView(cursor) => Some(cursor),
            _ => None,
        }
    }

    #[must_use]
    pub fn transition(&self, curriculum: &Curriculum, event: &NavEvent) -> Transition {
        match (self, event) {
            (NavState::NotFound(_), _) => Transition::stay(self),

            (NavState::Dashboard { role }, NavEvent::OpenModule(module)) => {
                Transition::to(NavState::enter(curriculum, role, Some(module)))
            }
            (NavState::Dashboard { .. }, _) => Transition::stay(self),

            (NavState::UnitView(cursor), event) => cursor_transition(self, cursor, curriculum, event),
        }
    }
}

fn cursor_transition(
    current: &NavState,
    cursor: &Cursor,
    curriculum: &Curriculum,
    event: &NavEvent,
) -> Transition {
    let Some(module) = curriculum.module(&cursor.role, &cursor.module) else {
        return Transition::to(NavState::NotFound(NotFound::Module {
            role: cursor.role.clone(),
            module: cursor.module.clone(),
        }));
    };

    match event {
        NavEvent::Next => {
            let Some(unit) = module.unit(cursor.index) else {
                return Transition::stay(current);
            };
            let effects = vec![NavEffect::MarkComplete {
                role: cursor.role.clone(),
                unit: unit.id().clone(),
            }];
            let state = if cursor.index < module.last_index() {
                NavState::UnitView(Cursor {
                    index: cursor.index + 1,
                    tab: Tab::Learn,
                    ..cursor.clone()
                })
            } else {
                NavState::Dashboard {
                    role: cursor.role.clone(),
                }
            };
            Transition { state, effects }
        }
        NavEvent::SelectUnit(index) if *index < module.unit_count() => {
            Transition::to(NavState::UnitView(Cursor {
                index: *index,
                tab: Tab::Learn,
                ..cursor.clone()
            }))
        }
        NavEvent::SwitchTab(tab) if *tab != cursor.tab => Transition::to(NavState::UnitView(Cursor {
            tab: *tab,
            ..cursor.clone()
        })),
        NavEvent::BackToDashboard => Transition::to(NavState::Dashboard {
            role: cursor.role.clone(),
        }),
        NavEvent::SelectUnit(_) | NavEvent::SwitchTab(_) | NavEvent::OpenModule(_) => {
            Transition::stay(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curriculum() -> Curriculum {
        Curriculum::builtin().unwrap()
    }

    fn developer() -> RoleId {
        RoleId::new("developer")
    }

    fn at(index: usize, tab: Tab) -> NavState {
        NavState::UnitView(Cursor {
            role: developer(),
            module: ModuleId::new("dev-interview-1"),
            index,
            tab,
        })
    }

    #[test]
    fn entering_with_module_starts_at_first_unit_on_learn() {
        let state = NavState::enter(
            &curriculum(),
            &developer(),
            Some(&ModuleId::new("dev-interview-1")),
        );
        assert_eq!(state, at(0, Tab::Learn));
    }

    #[test]
    fn unknown_role_or_module_is_not_found() {
        let c = curriculum();
        assert_eq!(
            NavState::enter(&c, &RoleId::new("nonexistent"), None),
            NavState::NotFound(NotFound::Role(RoleId::new("nonexistent")))
        );
        assert!(matches!(
            NavState::enter(&c, &developer(), Some(&ModuleId::new("missing"))),
            NavState::NotFound(NotFound::Module { .. })
        ));
    }

    #[test]
    fn dashboard_opens_module() {
        let c = curriculum();
        let dash = NavState::Dashboard { role: developer() };
        let t = dash.transition(&c, &NavEvent::OpenModule(ModuleId::new("dev-interview-1")));
        assert_eq!(t.state, at(0, Tab::Learn));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn next_marks_current_unit_then_advances() {
        let c = curriculum();
        let t = at(0, Tab::Practice).transition(&c, &NavEvent::Next);
        assert_eq!(t.state, at(1, Tab::Learn));
        assert_eq!(
            t.effects,
            vec![NavEffect::MarkComplete {
                role: developer(),
                unit: UnitId::new("dev-int-1"),
            }]
        );
    }

    #[test]
    fn finish_on_last_unit_marks_it_and_returns_to_dashboard() {
        let c = curriculum();
        let t = at(1, Tab::Learn).transition(&c, &NavEvent::Next);
        assert_eq!(t.state, NavState::Dashboard { role: developer() });
        assert_eq!(
            t.effects,
            vec![NavEffect::MarkComplete {
                role: developer(),
                unit: UnitId::new("dev-int-2"),
            }]
        );
    }

    #[test]
    fn sidebar_selection_has_no_side_effect() {
        let c = curriculum();
        let t = at(0, Tab::Visualize).transition(&c, &NavEvent::SelectUnit(1));
        assert_eq!(t.state, at(1, Tab::Learn));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let c = curriculum();
        let from = at(1, Tab::Learn);
        let t = from.transition(&c, &NavEvent::SelectUnit(7));
        assert!(t.is_noop(&from));
    }

    #[test]
    fn tab_switch_keeps_index_and_same_tab_is_noop() {
        let c = curriculum();
        let from = at(1, Tab::Learn);
        let t = from.transition(&c, &NavEvent::SwitchTab(Tab::Visualize));
        assert_eq!(t.state, at(1, Tab::Visualize));
        assert!(from.transition(&c, &NavEvent::SwitchTab(Tab::Learn)).is_noop(&from));
    }

    #[test]
    fn not_found_ignores_every_event() {
        let c = curriculum();
        let from = NavState::NotFound(NotFound::Role(RoleId::new("nonexistent")));
        for event in [
            NavEvent::Next,
            NavEvent::SelectUnit(0),
            NavEvent::SwitchTab(Tab::Practice),
            NavEvent::BackToDashboard,
            NavEvent::OpenModule(ModuleId::new("dev-interview-1")),
        ] {
            assert!(from.transition(&c, &event).is_noop(&from));
        }
    }

    #[test]
    fn back_link_returns_to_dashboard_without_marking() {
        let c = curriculum();
        let t = at(1, Tab::Practice).transition(&c, &NavEvent::BackToDashboard);
        assert_eq!(t.state, NavState::Dashboard { role: developer() });
        assert!(t.effects.is_empty());
    }
}
