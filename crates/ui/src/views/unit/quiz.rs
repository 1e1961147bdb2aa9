use dioxus::prelude::*;

use crate::vm::{QuizFeedbackVm, QuizVm};

#[component]
pub fn QuizPanel(
    quiz: QuizVm,
    selected: Signal<Option<usize>>,
    feedback: Option<QuizFeedbackVm>,
    on_submit: EventHandler<Option<usize>>,
) -> Element {
    let mut selected = selected;

    rsx! {
        div { class: "quiz glass-panel",
            h3 { "{quiz.question}" }
            div { class: "quiz-options",
                for (i, option) in quiz.options.into_iter().enumerate() {
                    label { key: "{i}", class: "quiz-option",
                        input {
                            r#type: "radio",
                            name: "quiz",
                            checked: selected() == Some(i),
                            onchange: move |_| selected.set(Some(i)),
                        }
                        " {option}"
                    }
                }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_submit.call(selected()),
                "Submit"
            }
            if let Some(feedback) = feedback {
                div { class: if feedback.correct { "quiz-result correct" } else { "quiz-result incorrect" },
                    span { "{feedback.message}" }
                    if let Some(explanation) = feedback.explanation {
                        p { class: "quiz-explanation", "{explanation}" }
                    }
                }
            }
        }
    }
}
