use dioxus::prelude::*;
use quest_core::model::Section;

use crate::context::{AppContext, ShellState};
use crate::views::ViewError;
use crate::vm::{CertificateVm, ResultRowVm, map_certificate, map_progress, map_result_rows};

/// Issue the certificate for the session and keep the outcome in the shell
/// so it stays visible after navigating away and back.
pub fn issue_certificate(shell: ShellState, quest_title: &str) {
    let ShellState {
        quest,
        mut certificate,
        ..
    } = shell;
    let issued = quest
        .read()
        .certificate()
        .map(|cert| map_certificate(quest_title, &cert))
        .map_err(|err| ViewError::from(&err));
    certificate.set(Some(issued));
}

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let shell = use_context::<ShellState>();
    let mut quest = shell.quest;
    let certificate = shell.certificate;
    let (progress, rows) = {
        let quest = quest.read();
        (
            map_progress(&quest.summary()),
            map_result_rows(&quest.task_statuses()),
        )
    };
    let quest_title = ctx.quest_title();
    let congratulation = format!("You've successfully completed the {quest_title}!");

    rsx! {
        div { class: "page results-page",
            div { class: "card card-results",
                header { class: "results-header",
                    span { class: "trophy", "🏆" }
                    h2 { "Quest Results" }
                    p { class: "card-subtitle", "Review your achievement and performance" }
                }
                div { class: "tile-grid",
                    div { class: "tile",
                        div { class: "stat stat-purple", "{progress.fraction_label}" }
                        div { class: "muted", "Tasks Completed" }
                    }
                    div { class: "tile",
                        div { class: "stat stat-blue", "{progress.earned_points}" }
                        div { class: "muted", "Total Points" }
                    }
                    div { class: "tile",
                        div { class: "stat stat-orange", "{progress.percent_label}" }
                        div { class: "muted", "Completion Rate" }
                    }
                }
                if progress.is_complete {
                    div { class: "banner banner-success",
                        h3 { "Congratulations! 🎉" }
                        p { "{congratulation}" }
                        button {
                            class: "btn btn-light btn-lg",
                            r#type: "button",
                            onclick: move |_| issue_certificate(shell, &quest_title),
                            "Download Certificate"
                        }
                        match certificate() {
                            Some(Ok(cert)) => rsx! { CertificatePanel { cert } },
                            Some(Err(err)) => rsx! { p { class: "error", "{err.message()}" } },
                            None => rsx! {},
                        }
                    }
                } else {
                    div { class: "banner banner-info",
                        h3 { "Keep Going!" }
                        p {
                            "You're making great progress! Complete the remaining {progress.remaining} task(s) to finish the quest and earn your certificate."
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| quest.write().navigate(Section::Tasks),
                            "Continue Tasks"
                        }
                    }
                }
                div { class: "performance",
                    h3 { "Performance Summary" }
                    for row in rows {
                        PerformanceRow { key: "{row.title}", row: row.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn PerformanceRow(row: ResultRowVm) -> Element {
    let marker = if row.completed { "✔" } else { "○" };
    let badge_class = if row.completed { "pill pill-done" } else { "pill" };
    rsx! {
        div { class: "performance-row",
            span { class: "performance-title", "{marker} {row.title}" }
            span { class: badge_class, "{row.badge}" }
        }
    }
}

#[component]
fn CertificatePanel(cert: CertificateVm) -> Element {
    rsx! {
        div { class: "certificate",
            h4 { "{cert.headline}" }
            p { "{cert.points_label}" }
            p { class: "muted", "{cert.issued_label}" }
        }
    }
}
