use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portal_core::model::{ModuleId, RoleId};
use portal_core::NavEvent;
use services::PortalEvent;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{NotFoundPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, PageVm, map_screen};

#[component]
pub fn DashboardView(role: String) -> Element {
    rsx! {
        RoleDashboard { key: "{role}", role: role.clone() }
    }
}

#[component]
fn RoleDashboard(role: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut session = use_signal(|| ctx.services().open_session(&RoleId::new(role.clone()), None));
    let mut error = use_signal(|| None::<ViewError>);

    let resource = use_resource(move || {
        let current = session();
        async move {
            let screen = current.screen().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_screen(&screen))
        }
    });

    let open_module = use_callback(move |module: String| {
        spawn(async move {
            let mut next = session.peek().clone();
            let event = PortalEvent::Nav(NavEvent::OpenModule(ModuleId::new(module)));
            match next.handle(event).await {
                Ok(_) => {
                    let target = Route::for_state(next.state());
                    session.set(next);
                    if let Some(route @ Route::Module { .. }) = target {
                        navigator.push(route);
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "opening module failed");
                    error.set(Some(ViewError::from(err)));
                }
            }
        });
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        if let Some(err) = error() {
            div { class: "banner banner-error", {err.message()} }
        }
        match state {
            ViewState::Idle => rsx! {
                div { class: "page", p { "Idle" } }
            },
            ViewState::Loading => rsx! {
                div { class: "page", p { "Loading..." } }
            },
            ViewState::Ready(PageVm::Dashboard(vm)) => rsx! {
                DashboardPanel { vm, open_module }
            },
            ViewState::Ready(PageVm::NotFound(vm)) => rsx! {
                NotFoundPanel { vm }
            },
            ViewState::Ready(PageVm::Unit(_)) => rsx! {
                div { class: "page", p { "Loading..." } }
            },
            ViewState::Error(err) => rsx! {
                div { class: "page", p { {err.message()} } }
            },
        }
    }
}

#[component]
fn DashboardPanel(vm: DashboardVm, open_module: EventHandler<String>) -> Element {
    rsx! {
        div { class: "page dashboard", style: "--accent: {vm.role.color}",
            div { class: "dashboard-header",
                span { class: "role-icon", "{vm.role.glyph}" }
                div {
                    h2 { "{vm.role.title}" }
                    p { "{vm.role.description}" }
                }
                span { class: "overall", "{vm.overall_label}" }
            }
            if vm.modules.is_empty() {
                p { class: "empty", "No modules yet. Check back soon." }
            } else {
                div { class: "module-list",
                    for module in vm.modules {
                        div {
                            key: "{module.id}",
                            class: "module-card",
                            onclick: {
                                let id = module.id.clone();
                                move |_| open_module.call(id.clone())
                            },
                            div { class: "module-text",
                                h3 { "{module.title}" }
                                p { "{module.description}" }
                                span { class: "module-units", "{module.units_label}" }
                            }
                            div { class: "module-progress",
                                div { class: "progress-bar",
                                    div { class: "progress-fill", style: "width: {module.percentage}%" }
                                }
                                span { class: "progress-label", "{module.percent_label}" }
                            }
                            span { class: "btn btn-secondary", "Start" }
                        }
                    }
                }
            }
        }
    }
}
