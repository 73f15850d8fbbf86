use dioxus::prelude::*;

use crate::context::ToastSignal;

#[component]
pub fn Toast() -> Element {
    let mut toast = use_context::<ToastSignal>();
    let Some(current) = toast.read().current().cloned() else {
        return rsx! {};
    };
    let seq = current.seq;
    let class = if current.is_error {
        "toast toast--error"
    } else {
        "toast"
    };

    rsx! {
        div { class: class, role: "status",
            div { class: "toast-body",
                strong { class: "toast-title", "{current.title}" }
                p { class: "toast-description", "{current.description}" }
            }
            button {
                class: "toast-close",
                r#type: "button",
                onclick: move |_| toast.write().dismiss(seq),
                "×"
            }
        }
    }
}
