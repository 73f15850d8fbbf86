use dioxus::prelude::*;
use quest_core::model::ResourceTab;

use crate::context::AppContext;
use crate::vm::{ResourceGroupVm, map_resource_groups};

#[component]
pub fn ResourcesView() -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.resources();
    let active = use_signal(ResourceTab::default);
    let groups = map_resource_groups(&library, active());

    let tabs = ResourceTab::ALL.into_iter().map(|tab| {
        let mut active = active;
        let class = if tab == active() { "tab tab--active" } else { "tab" };
        rsx! {
            button {
                key: "{tab.label()}",
                class: class,
                r#type: "button",
                onclick: move |_| active.set(tab),
                "{tab.label()}"
            }
        }
    });

    rsx! {
        div { class: "page resources-page",
            div { class: "card card-resources",
                h2 { "Learning Resources" }
                p { class: "card-subtitle", "Explore these materials to enhance your understanding" }
                div { class: "tab-list", {tabs} }
                div { class: "resource-grid",
                    for group in groups {
                        ResourceCard { key: "{group.title}", group: group.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ResourceCard(group: ResourceGroupVm) -> Element {
    rsx! {
        div { class: "card resource-card",
            h3 { "{group.title}" }
            if let Some(blurb) = group.blurb.as_ref() {
                p { class: "muted", "{blurb}" }
            }
            for link in group.links.iter() {
                a {
                    key: "{link.href}",
                    class: "resource-link",
                    href: "{link.href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "↗ {link.title}"
                }
            }
        }
    }
}
