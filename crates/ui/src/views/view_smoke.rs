use std::time::Duration;

use quest_core::model::Section;

use super::test_harness::{TEST_QUEST_TITLE, setup_shell};

#[test]
fn home_view_renders_hero_and_rewards() {
    let html = setup_shell(Section::Home, &[]).render();
    assert!(html.contains(TEST_QUEST_TITLE), "missing title in {html}");
    assert!(html.contains("Start Quest"), "missing cta in {html}");
    assert!(html.contains("70 Points"), "missing rewards in {html}");
    assert!(html.contains("5 interactive tasks"), "missing duration in {html}");
    assert!(!html.contains("Your Progress"), "tasks leaked into home: {html}");
}

#[test]
fn header_lists_every_section_and_marks_the_active_one() {
    let html = setup_shell(Section::Results, &[]).render();
    for label in ["Home", "Tasks", "Resources", "Results"] {
        assert!(html.contains(label), "missing nav {label} in {html}");
    }
    assert_eq!(html.matches("nav-item--active").count(), 1, "{html}");
    assert!(html.contains("Quest Results"), "missing results in {html}");
}

#[test]
fn tasks_view_renders_progress_and_cards() {
    let html = setup_shell(Section::Tasks, &[1, 4]).render();
    assert!(html.contains("2 of 5 tasks completed"), "missing count in {html}");
    assert!(html.contains("40%"), "missing percent in {html}");
    assert!(html.contains("width: 40%"), "missing bar width in {html}");
    assert!(html.contains("Total Points: 30 / 70"), "missing points in {html}");
    assert_eq!(html.matches("task-card--done").count(), 2, "{html}");
    assert_eq!(html.matches("Start Task").count(), 3, "{html}");
    assert!(html.contains("Shakespeare Analysis"), "missing task in {html}");
    assert!(html.contains("interactive"), "missing category in {html}");
}

#[test]
fn resources_view_defaults_to_art_tab() {
    let html = setup_shell(Section::Resources, &[]).render();
    assert!(html.contains("Learning Resources"), "missing heading in {html}");
    assert!(html.contains("The British Museum"), "missing art link in {html}");
    assert!(
        html.contains("https://www.britishmuseum.org/"),
        "missing href in {html}"
    );
    assert!(!html.contains("Project Gutenberg"), "literature leaked: {html}");
}

#[test]
fn results_view_encourages_when_incomplete() {
    let html = setup_shell(Section::Results, &[1, 4]).render();
    assert!(html.contains("Keep Going!"), "missing banner in {html}");
    assert!(html.contains("remaining 3 task(s)"), "missing remaining in {html}");
    assert!(html.contains("Continue Tasks"), "missing cta in {html}");
    assert!(html.contains("2/5"), "missing fraction in {html}");
    assert!(html.contains("20 pts"), "missing earned row in {html}");
    assert_eq!(html.matches("Pending").count(), 3, "{html}");
    assert!(!html.contains("Download Certificate"), "{html}");
}

#[test]
fn results_view_congratulates_when_complete() {
    let html = setup_shell(Section::Results, &[1, 2, 3, 4, 5]).render();
    assert!(html.contains("Congratulations!"), "missing banner in {html}");
    assert!(html.contains("Download Certificate"), "missing cta in {html}");
    assert!(html.contains("100%"), "missing rate in {html}");
    assert!(!html.contains("Pending"), "{html}");
}

#[test]
fn no_toast_before_any_completion() {
    let html = setup_shell(Section::Tasks, &[2]).render();
    assert!(!html.contains("Task Completed!"), "unexpected toast in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn completing_a_task_raises_a_toast_and_moves_progress() {
    let mut harness = setup_shell(Section::Tasks, &[]);
    harness.complete(1);
    let html = harness.render();
    assert!(html.contains("Task Completed! 🎉"), "missing toast in {html}");
    assert!(html.contains("earned 10 points!"), "missing points in {html}");
    assert!(html.contains("1 of 5 tasks completed"), "missing count in {html}");
    assert!(html.contains("Total Points: 10 / 70"), "missing points in {html}");
}

#[test]
fn completing_twice_raises_no_second_toast() {
    let mut harness = setup_shell(Section::Tasks, &[3]);
    harness.complete(3);
    let html = harness.render();
    assert!(!html.contains("Task Completed!"), "unexpected toast in {html}");
    assert!(html.contains("1 of 5 tasks completed"), "count changed in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn unknown_task_shows_an_error_toast() {
    let mut harness = setup_shell(Section::Tasks, &[]);
    harness.complete(999);
    let html = harness.render();
    assert!(html.contains("toast--error"), "missing error toast in {html}");
    assert!(
        html.contains("That task is not part of this quest."),
        "missing message in {html}"
    );
    assert!(html.contains("0 of 5 tasks completed"), "count changed in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn toast_dismisses_after_leaving_tasks() {
    let mut harness = setup_shell(Section::Tasks, &[]);
    harness.complete(2);
    harness.navigate(Section::Results);

    let html = harness.render();
    assert!(html.contains("Quest Results"), "not on results: {html}");
    assert!(html.contains("Task Completed!"), "toast lost on navigation: {html}");

    harness.run_for(Duration::from_secs(3)).await;
    assert!(harness.render().contains("Task Completed!"), "dismissed too early");

    harness.run_for(Duration::from_secs(2)).await;
    let html = harness.render();
    assert!(!html.contains("Task Completed!"), "toast never dismissed: {html}");
}

#[test]
fn certificate_panel_renders_after_download() {
    let mut harness = setup_shell(Section::Results, &[1, 2, 3, 4, 5]);
    let html = harness.render();
    assert!(
        html.contains(&format!("completed the {TEST_QUEST_TITLE}!")),
        "missing quest name in {html}"
    );
    assert!(!html.contains("Certificate of Completion"), "{html}");

    harness.issue_certificate();
    let html = harness.render();
    assert!(
        html.contains(&format!("Certificate of Completion: {TEST_QUEST_TITLE}")),
        "missing certificate in {html}"
    );
    assert!(html.contains("70 of 70 points across 5 tasks"), "{html}");
    assert!(html.contains("Issued May 20, 2024"), "{html}");
}

#[test]
fn footer_lists_quick_links() {
    let html = setup_shell(Section::Home, &[]).render();
    assert!(html.contains("Quick Links"), "missing column in {html}");
    assert!(html.contains("Additional Resources"), "missing link in {html}");
}
