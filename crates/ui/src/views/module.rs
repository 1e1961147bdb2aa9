use dioxus::prelude::*;
use dioxus_router::use_navigator;
use futures::StreamExt;
use portal_core::model::{ModuleId, RoleId};
use portal_core::{NavEvent, NavState, Tab};
use services::PortalEvent;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::unit::{MindmapTree, Playground, QaAccordion, QuizPanel};
use crate::views::{NotFoundPanel, Toaster, ViewError, ViewState, view_state_from_resource};
use crate::vm::{PageVm, QuizFeedbackVm, UnitVm, map_screen, quiz_feedback};

#[component]
pub fn ModuleView(role: String, module: String) -> Element {
    rsx! {
        UnitViewer { key: "{role}/{module}", role: role.clone(), module: module.clone() }
    }
}

#[component]
fn UnitViewer(role: String, module: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut toaster = use_context::<Toaster>();

    let mut session = use_signal(|| {
        ctx.services()
            .open_session(&RoleId::new(role.clone()), Some(&ModuleId::new(module.clone())))
    });
    let mut quiz_choice = use_signal(|| None::<usize>);
    let mut quiz_result = use_signal(|| None::<QuizFeedbackVm>);
    let mut error = use_signal(|| None::<ViewError>);

    let resource = use_resource(move || {
        let current = session();
        async move {
            let screen = current.screen().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_screen(&screen))
        }
    });

    // Events are handled strictly in arrival order, each starting from the
    // state the previous one left behind.
    let events = use_coroutine(move |mut rx: UnboundedReceiver<PortalEvent>| async move {
        while let Some(event) = rx.next().await {
            let changes_unit = matches!(
                event,
                PortalEvent::Nav(NavEvent::Next | NavEvent::SelectUnit(_))
            );
            let mut next = session.peek().clone();
            match next.handle(event).await {
                Ok(notices) => {
                    error.set(None);
                    if changes_unit {
                        quiz_choice.set(None);
                        quiz_result.set(None);
                    }
                    if let Some(feedback) = notices.iter().find_map(quiz_feedback) {
                        quiz_result.set(Some(feedback));
                    }
                    toaster.push_notices(&notices);

                    let leave_to = match next.state() {
                        NavState::Dashboard { role } => Some(Route::Dashboard {
                            role: role.to_string(),
                        }),
                        _ => None,
                    };
                    session.set(next);
                    if let Some(route) = leave_to {
                        navigator.push(route);
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "portal event failed");
                    error.set(Some(ViewError::from(err)));
                }
            }
        }
    });
    let dispatch = use_callback(move |event: PortalEvent| events.send(event));

    let state = view_state_from_resource(&resource);

    rsx! {
        if let Some(err) = error() {
            div { class: "banner banner-error", {err.message()} }
        }
        match state {
            ViewState::Idle => rsx! {
                div { class: "page", p { "Idle" } }
            },
            ViewState::Loading | ViewState::Ready(PageVm::Dashboard(_)) => rsx! {
                div { class: "page", p { "Loading..." } }
            },
            ViewState::Ready(PageVm::NotFound(vm)) => rsx! {
                NotFoundPanel { vm }
            },
            ViewState::Ready(PageVm::Unit(vm)) => rsx! {
                UnitPanel {
                    vm: *vm,
                    dispatch,
                    quiz_choice,
                    quiz_feedback: quiz_result(),
                }
            },
            ViewState::Error(err) => rsx! {
                div { class: "page", p { {err.message()} } }
            },
        }
    }
}

fn tab_class(tab: Tab, active: Tab) -> &'static str {
    if tab == active { "tab-btn active" } else { "tab-btn" }
}

#[component]
fn UnitPanel(
    vm: UnitVm,
    dispatch: EventHandler<PortalEvent>,
    quiz_choice: Signal<Option<usize>>,
    quiz_feedback: Option<QuizFeedbackVm>,
) -> Element {
    let active_tab = vm.tab;

    rsx! {
        div { class: "module-layout",
            aside { class: "unit-sidebar",
                button {
                    class: "back-link",
                    onclick: move |_| dispatch.call(PortalEvent::Nav(NavEvent::BackToDashboard)),
                    "\u{2190} Dashboard"
                }
                h3 { class: "module-title-sidebar", "{vm.module_title}" }
                ul { class: "units-list",
                    for item in vm.sidebar {
                        li {
                            key: "{item.index}",
                            class: if item.active { "unit-item active" } else { "unit-item" },
                            onclick: move |_| dispatch.call(PortalEvent::Nav(NavEvent::SelectUnit(item.index))),
                            if item.completed {
                                span { class: "unit-check", "\u{2714} " }
                            }
                            "{item.title}"
                        }
                    }
                }
            }
            section { class: "unit-main",
                div { class: "unit-header",
                    div {
                        span { class: "unit-counter", "{vm.counter_label}" }
                        h2 { class: "unit-title", "{vm.title}" }
                    }
                    button {
                        class: if vm.is_complete { "btn btn-done" } else { "btn btn-secondary" },
                        onclick: move |_| dispatch.call(PortalEvent::ToggleComplete),
                        if vm.is_complete { "\u{2714} Completed" } else { "Mark as done" }
                    }
                }
                div { class: "tabs",
                    for tab in Tab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: tab_class(tab, active_tab),
                            onclick: move |_| dispatch.call(PortalEvent::Nav(NavEvent::SwitchTab(tab))),
                            "{tab.label()}"
                        }
                    }
                }
                div { class: "tab-view",
                    match active_tab {
                        Tab::Learn => rsx! {
                            div { class: "markdown", dangerous_inner_html: "{vm.content_html}" }
                            if let Some(starter) = vm.playground {
                                Playground { key: "{vm.unit_id}", starter }
                            }
                        },
                        Tab::Visualize => rsx! {
                            MindmapTree { nodes: vm.mindmap }
                        },
                        Tab::Practice => rsx! {
                            QaAccordion { items: vm.qa }
                            if let Some(quiz) = vm.quiz {
                                QuizPanel {
                                    quiz,
                                    selected: quiz_choice,
                                    feedback: quiz_feedback,
                                    on_submit: move |selected| dispatch.call(PortalEvent::SubmitQuiz(selected)),
                                }
                            }
                        },
                    }
                }
                div { class: "unit-footer",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dispatch.call(PortalEvent::Nav(NavEvent::Next)),
                        "{vm.advance_label}"
                    }
                }
            }
        }
    }
}
