use dioxus::prelude::*;
use quest_core::model::Section;

use crate::context::{AppContext, QuestSignal};
use crate::vm::map_nav_items;

#[component]
pub fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let quest = use_context::<QuestSignal>();
    let title = ctx.quest_title();
    let items = map_nav_items(quest.read().current_section());

    let buttons = items.into_iter().map(|item| {
        let mut quest = quest;
        let class = if item.active {
            "btn btn-primary nav-item nav-item--active"
        } else {
            "btn btn-ghost nav-item"
        };
        rsx! {
            button {
                key: "{item.section}",
                class: class,
                r#type: "button",
                onclick: move |_| quest.write().navigate(item.section),
                "{item.label}"
            }
        }
    });

    rsx! {
        nav { class: "topbar",
            div { class: "brand",
                span { class: "brand-mark", "📖" }
                h1 { class: "brand-title", "{title}" }
            }
            div { class: "nav-items", {buttons} }
        }
    }
}

const QUICK_LINKS: [(&str, Section); 3] = [
    ("About This Quest", Section::Home),
    ("Additional Resources", Section::Resources),
    ("Your Results", Section::Results),
];

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let quest = use_context::<QuestSignal>();
    let title = ctx.quest_title();

    let links = QUICK_LINKS.into_iter().map(|(label, section)| {
        let mut quest = quest;
        rsx! {
            li { key: "{label}",
                button {
                    class: "quick-link",
                    r#type: "button",
                    onclick: move |_| quest.write().navigate(section),
                    "{label}"
                }
            }
        }
    });

    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div {
                    h3 { "{title}" }
                    p {
                        "An interactive educational platform for Grade 9 students to explore English through art and literature."
                    }
                }
                div {
                    h3 { "Quick Links" }
                    ul { class: "quick-links", {links} }
                }
                div {
                    h3 { "Need Help?" }
                    p {
                        "Contact your teacher if you have questions about the tasks or need technical support."
                    }
                }
            }
            p { class: "footer-note", "© 2024 {title}. Educational Resource for Grade 9 English." }
        }
    }
}
