use dioxus::prelude::*;
use quest_core::model::Section;

use crate::context::QuestSignal;

#[component]
pub fn HomeView() -> Element {
    let mut quest = use_context::<QuestSignal>();
    let (task_count, total_points) = {
        let quest = quest.read();
        (quest.catalog().len(), quest.catalog().total_points())
    };

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                span { class: "badge badge-light", "Grade 9 English" }
                h2 { class: "hero-title", "Discover the World of Art & Literature" }
                p { class: "hero-lead",
                    "Embark on an educational journey through masterpieces of art and timeless literary works. "
                    "Enhance your English skills while exploring culture and creativity!"
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-light btn-lg",
                        r#type: "button",
                        onclick: move |_| quest.write().navigate(Section::Tasks),
                        "Start Quest →"
                    }
                    button {
                        class: "btn btn-outline-light btn-lg",
                        r#type: "button",
                        onclick: move |_| quest.write().navigate(Section::Resources),
                        "View Resources"
                    }
                }
            }
            section { class: "info-grid",
                div { class: "card card-purple",
                    h3 { "Learning Goals" }
                    p { class: "card-subtitle", "Master key vocabulary and cultural knowledge" }
                    ul { class: "checklist",
                        li { "Expand art & literature vocabulary" }
                        li { "Analyze famous works in English" }
                        li { "Practice reading comprehension" }
                    }
                }
                div { class: "card card-blue",
                    h3 { "Duration" }
                    p { class: "card-subtitle", "Complete at your own pace" }
                    div { class: "stat stat-blue", "2-3 hours" }
                    p { class: "muted",
                        "{task_count} interactive tasks designed to enhance your English language skills through art and literature"
                    }
                }
                div { class: "card card-orange",
                    h3 { "Rewards" }
                    p { class: "card-subtitle", "Track your achievement" }
                    div { class: "stat stat-orange", "{total_points} Points" }
                    p { class: "muted",
                        "Earn points for each completed task and get a certificate upon finishing the quest"
                    }
                }
            }
        }
    }
}
