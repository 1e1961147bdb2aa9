use dioxus::prelude::*;

use crate::vm::QaVm;

#[component]
pub fn QaAccordion(items: Vec<QaVm>) -> Element {
    rsx! {
        div { class: "qa",
            for (i, item) in items.into_iter().enumerate() {
                details { key: "{i}", class: "accordion-item",
                    summary { class: "accordion-header", "{item.question}" }
                    div { class: "accordion-content",
                        p { "{item.answer}" }
                    }
                }
            }
        }
    }
}
