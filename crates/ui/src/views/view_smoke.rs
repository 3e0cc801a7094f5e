use planner_core::ActivityDraft;
use planner_core::model::{Activity, Priority};
use services::PlannerService;

use super::test_harness::{ViewKind, setup_named_view_harness, setup_view_harness};

fn planner_with(plan: &[(&str, &str, &str)]) -> PlannerService {
    let planner = PlannerService::new();
    for (name, start, end) in plan {
        planner
            .submit(ActivityDraft::new(*name, *start, *end, Priority::Medium))
            .expect("accept activity");
    }
    planner
}

fn position_of(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

#[test]
fn add_activity_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::AddActivity, PlannerService::new());
    harness.rebuild();
    let html = harness.render();

    for label in [
        "Add a New Activity",
        "Activity Name",
        "Start Time (HH:MM)",
        "End Time (HH:MM)",
        "Priority Level",
        "Add Activity",
    ] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Medium"), "missing priority option in {html}");
}

#[test]
fn activities_view_smoke_renders_placeholder_when_empty() {
    let mut harness = setup_view_harness(ViewKind::Activities, PlannerService::new());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("No activities added yet."),
        "missing placeholder in {html}"
    );
}

#[test]
fn activities_view_smoke_renders_cards_in_insertion_order() {
    let planner = planner_with(&[("Inbox", "08:00", "08:30"), ("Gym", "18:00", "19:15")]);
    let mut harness = setup_view_harness(ViewKind::Activities, planner);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("1. Inbox"), "missing first card in {html}");
    assert!(html.contains("2. Gym"), "missing second card in {html}");
    assert!(
        html.contains("Time: 18:00 to 19:15 (75 mins)"),
        "missing time line in {html}"
    );
    assert!(html.contains("Priority: Medium"), "missing priority in {html}");
}

#[test]
fn prioritize_view_smoke_sorts_session_and_renders_summary() {
    let planner = planner_with(&[
        ("Thirty", "08:00", "08:30"),
        ("NinetyA", "09:00", "10:30"),
        ("NinetyB", "11:00", "12:30"),
        ("Ten", "13:00", "13:10"),
    ]);
    let mut harness = setup_view_harness(ViewKind::Prioritize, planner);
    harness.rebuild();
    let html = harness.render();

    let a = position_of(&html, "1. NinetyA");
    let b = position_of(&html, "2. NinetyB");
    let thirty = position_of(&html, "3. Thirty");
    let ten = position_of(&html, "4. Ten");
    assert!(a < b && b < thirty && thirty < ten, "wrong order in {html}");

    assert!(
        html.contains("Total Activities Planned: 4"),
        "missing total in {html}"
    );
    assert!(
        html.contains("productive day ahead"),
        "missing motivation in {html}"
    );
    assert!(
        html.contains("Take a 10-15 minute break after every 90 minutes of work."),
        "missing break line in {html}"
    );

    // Viewing the page reorders the session itself.
    let durations: Vec<u32> = harness
        .planner
        .activities()
        .expect("list activities")
        .iter()
        .map(Activity::duration_minutes)
        .collect();
    assert_eq!(durations, [90, 90, 30, 10]);
}

#[test]
fn prioritize_view_smoke_renders_placeholder_when_empty() {
    let mut harness = setup_view_harness(ViewKind::Prioritize, PlannerService::new());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("No activities to prioritize yet. Start by adding some!"),
        "missing placeholder in {html}"
    );
    assert!(
        !html.contains("Daily Summary"),
        "summary should be hidden in {html}"
    );
}

#[test]
fn header_keeps_product_name_when_window_title_changes() {
    let mut harness =
        setup_named_view_harness(ViewKind::Header, PlannerService::new(), "Focus Day");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("DayMaster"), "missing header in {html}");
    assert!(
        html.contains("Plan, prioritize, and conquer your day!"),
        "missing tagline in {html}"
    );
    assert!(!html.contains("Focus Day"), "window title leaked into {html}");
}
