use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use quest_core::model::TaskId;

use crate::context::ShellState;
use crate::views::ViewError;
use crate::vm::{ProgressVm, TaskCardVm, map_progress, map_task_cards};

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Complete `id` in the session and raise a toast for newly earned points,
/// or for a rejected id.
///
/// The dismissal timer runs at the root scope so leaving the Tasks section
/// does not cancel it.
pub fn complete_task(shell: ShellState, id: TaskId) {
    let ShellState {
        mut quest,
        mut toast,
        ..
    } = shell;

    let outcome = quest.write().complete_task(id);
    let seq = match outcome {
        Ok(notice) => toast.write().push(&notice),
        Err(err) => {
            tracing::warn!(task_id = %id, %err, "completion rejected");
            Some(toast.write().push_error(ViewError::from(&err)))
        }
    };

    if let Some(seq) = seq {
        spawn_forever(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            toast.write().dismiss(seq);
        });
    }
}

#[component]
pub fn TasksView() -> Element {
    let shell = use_context::<ShellState>();
    let quest = shell.quest;
    let (progress, cards) = {
        let quest = quest.read();
        (
            map_progress(&quest.summary()),
            map_task_cards(&quest.task_statuses()),
        )
    };

    let task_cards = cards.into_iter().map(|card| {
        rsx! {
            TaskCard {
                key: "{card.id}",
                card: card.clone(),
                on_complete: move |id: TaskId| complete_task(shell, id),
            }
        }
    });

    rsx! {
        div { class: "page tasks-page",
            ProgressCard { progress }
            div { class: "task-list", {task_cards} }
        }
    }
}

#[component]
fn ProgressCard(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "card card-progress",
            h2 { "Your Progress" }
            p { class: "card-subtitle", "Complete all tasks to finish the quest" }
            div { class: "progress-row",
                span { class: "progress-count", "{progress.completed_label}" }
                span { class: "muted", "{progress.percent_label}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {progress.percent}%" }
            }
            p { class: "muted", "{progress.points_label}" }
        }
    }
}

#[component]
fn TaskCard(card: TaskCardVm, on_complete: EventHandler<TaskId>) -> Element {
    let id = card.id;
    let card_class = if card.completed {
        "card task-card task-card--done"
    } else {
        "card task-card"
    };
    let button_class = if card.completed {
        "btn btn-outline task-action"
    } else {
        "btn btn-primary task-action"
    };

    rsx! {
        div { class: card_class,
            div { class: "task-header",
                span { class: "task-badge", "{card.badge}" }
                div { class: "task-text",
                    div { class: "task-title-row",
                        h3 { class: "task-title", "{card.title}" }
                        span { class: "pill", "{card.category}" }
                    }
                    p { class: "task-description", "{card.description}" }
                }
                div { class: "task-points",
                    span { class: "task-points-value", "{card.points}" }
                    span { class: "task-points-label", "points" }
                }
            }
            button {
                class: button_class,
                r#type: "button",
                disabled: card.completed,
                onclick: move |_| on_complete.call(id),
                "{card.action_label}"
            }
        }
    }
}
