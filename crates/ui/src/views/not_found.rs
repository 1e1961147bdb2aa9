use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::NotFoundVm;

#[component]
pub fn NotFoundPanel(vm: NotFoundVm) -> Element {
    rsx! {
        div { class: "page not-found",
            h1 { "{vm.heading}" }
            p { "{vm.detail}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "Home" }
        }
    }
}
