use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use portal_core::NavState;

use crate::context::LaunchTarget;
use crate::views::{DashboardView, HomeView, ModuleView, Toasts, provide_toaster};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/dashboard?:role", DashboardView)] Dashboard { role: String },
        #[route("/module?:role&:module", ModuleView)] Module { role: String, module: String },
}

impl Route {
    #[must_use]
    pub fn for_target(target: &LaunchTarget) -> Self {
        let role = target.role.to_string();
        match &target.module {
            Some(module) => Route::Module {
                role,
                module: module.to_string(),
            },
            None => Route::Dashboard { role },
        }
    }

    /// Page that shows a navigation state. `NotFound` has no page of its own.
    #[must_use]
    pub fn for_state(state: &NavState) -> Option<Self> {
        match state {
            NavState::Dashboard { role } => Some(Route::Dashboard {
                role: role.to_string(),
            }),
            NavState::UnitView(cursor) => Some(Route::Module {
                role: cursor.role.to_string(),
                module: cursor.module.to_string(),
            }),
            NavState::NotFound(_) => None,
        }
    }
}

#[component]
fn Layout() -> Element {
    provide_toaster();

    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::Home {}, "Learning Portal" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            Toasts {}
        }
    }
}
