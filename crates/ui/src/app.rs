use dioxus::prelude::*;
use quest_core::model::Section;

use crate::context::{AppContext, QuestSignal, use_shell_state};
use crate::layout::{Footer, Header};
use crate::views::{HomeView, ResourcesView, ResultsView, TasksView, Toast};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.quest_title();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuestShell {}
            }
        }
    }
}

/// Owns the shell signals and renders the frame around the active section.
#[component]
pub fn QuestShell() -> Element {
    let ctx = use_context::<AppContext>();
    use_shell_state(&ctx);
    rsx! { ShellFrame {} }
}

/// Header, active section, footer and toast.
#[component]
pub(crate) fn ShellFrame() -> Element {
    let quest = use_context::<QuestSignal>();
    let section = quest.read().current_section();

    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                match section {
                    Section::Home => rsx! { HomeView {} },
                    Section::Tasks => rsx! { TasksView {} },
                    Section::Resources => rsx! { ResourcesView {} },
                    Section::Results => rsx! { ResultsView {} },
                }
            }
            Footer {}
            Toast {}
        }
    }
}
