use std::time::Duration;

use dioxus::prelude::*;
use services::Notice;

use crate::vm::{ToastKind, ToastVm, toast_for};

const TOAST_LIFETIME: Duration = Duration::from_millis(3000);

/// Shared handle for pushing transient messages from any view.
#[derive(Clone, Copy)]
pub struct Toaster {
    items: Signal<Vec<ToastVm>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn push(&mut self, message: String, kind: ToastKind) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.items.write().push(ToastVm { id, message, kind });

        let mut items = self.items;
        spawn(async move {
            tokio::time::sleep(TOAST_LIFETIME).await;
            items.write().retain(|toast| toast.id != id);
        });
    }

    pub fn push_notices(&mut self, notices: &[Notice]) {
        for notice in notices {
            if let Some((message, kind)) = toast_for(notice) {
                self.push(message, kind);
            }
        }
    }

    #[must_use]
    pub fn items(&self) -> Vec<ToastVm> {
        self.items.read().clone()
    }
}

/// Provide a `Toaster` to the current subtree.
pub fn provide_toaster() -> Toaster {
    use_context_provider(|| Toaster {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

#[component]
pub fn Toasts() -> Element {
    let toaster = use_context::<Toaster>();

    rsx! {
        div { class: "toasts",
            for toast in toaster.items() {
                div { key: "{toast.id}", class: toast.kind.class(), "{toast.message}" }
            }
        }
    }
}
