use dioxus::prelude::*;
use services::RUNNING_LABEL;

use crate::context::AppContext;

#[component]
pub fn Playground(starter: String) -> Element {
    let ctx = use_context::<AppContext>();
    let playground = ctx.services().playground();
    let mut code = use_signal(|| starter.clone());
    let mut output = use_signal(|| None::<String>);

    let run = move |_| {
        let playground = playground.clone();
        let source = code();
        output.set(Some(RUNNING_LABEL.to_owned()));
        spawn(async move {
            let result = playground.run(&source).await;
            output.set(Some(result.render()));
        });
    };

    rsx! {
        div { class: "code-playground glass-panel",
            div { class: "playground-toolbar",
                span { "APEX EDITOR" }
                button { class: "btn btn-primary", onclick: run, "Run" }
            }
            textarea {
                class: "code-editor",
                spellcheck: "false",
                value: "{code}",
                oninput: move |evt| code.set(evt.value()),
            }
            if let Some(text) = output() {
                pre { class: "playground-output", "{text}" }
            }
        }
    }
}
