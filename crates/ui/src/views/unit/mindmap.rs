use dioxus::prelude::*;

use crate::vm::MindmapNode;

/// Outline rendered as nested, collapsible lists.
#[component]
pub fn MindmapTree(nodes: Vec<MindmapNode>) -> Element {
    if nodes.is_empty() {
        return rsx! {
            p { class: "empty", "No mind map for this unit." }
        };
    }
    rsx! {
        ul { class: "mindmap",
            for node in nodes {
                MindmapBranch { node }
            }
        }
    }
}

#[component]
fn MindmapBranch(node: MindmapNode) -> Element {
    if node.children.is_empty() {
        return rsx! {
            li { class: "mindmap-leaf", "{node.label}" }
        };
    }
    rsx! {
        li {
            details { open: true,
                summary { "{node.label}" }
                ul {
                    for child in node.children {
                        MindmapBranch { node: child }
                    }
                }
            }
        }
    }
}
