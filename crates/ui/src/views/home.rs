use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_role_cards;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let roles = map_role_cards(&ctx.services().dashboard().roles());

    use_effect(move || {
        if let Some(target) = ctx.take_launch_target() {
            navigator.replace(Route::for_target(&target));
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Choose your path" }
            div { class: "role-grid",
                for role in roles {
                    div { key: "{role.id}", class: "role-card", style: "--accent: {role.color}",
                        Link { to: Route::Dashboard { role: role.id.clone() },
                            span { class: "role-icon", "{role.glyph}" }
                            h3 { "{role.title}" }
                            p { "{role.description}" }
                        }
                    }
                }
            }
        }
    }
}
