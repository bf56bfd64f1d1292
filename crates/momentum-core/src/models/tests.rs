use jiff::{civil::date, Timestamp};
use serde_json::json;

use super::*;

fn goal(id: &str) -> Goal {
    Goal {
        id: id.to_string(),
        name: format!("Goal {id}"),
        description: None,
        intensity: Intensity::Moderate,
        target_date: None,
        created_at: "2026-03-01T08:00:00Z".parse::<Timestamp>().unwrap(),
    }
}

fn step(goal_id: &str, order: u32, completed: bool) -> Step {
    Step {
        id: format!("{goal_id}-s{order}"),
        goal_id: goal_id.to_string(),
        title: format!("Step {order}"),
        notes: None,
        completed,
        order,
    }
}

#[test]
fn test_intensity_from_str() {
    assert_eq!("light".parse::<Intensity>().unwrap(), Intensity::Light);
    assert_eq!("Moderate".parse::<Intensity>().unwrap(), Intensity::Moderate);
    assert_eq!(" INTENSE ".parse::<Intensity>().unwrap(), Intensity::Intense);
    assert!("extreme".parse::<Intensity>().is_err());
}

#[test]
fn test_intensity_labels_and_default() {
    assert_eq!(Intensity::default(), Intensity::Moderate);
    let labels: Vec<_> = Intensity::ALL.iter().map(Intensity::label).collect();
    assert_eq!(labels, vec!["Light", "Moderate", "Intense"]);
    assert_eq!(Intensity::Light.to_string(), "light");
}

#[test]
fn test_intensity_rejects_unknown_value_on_deserialize() {
    let result = serde_json::from_value::<Intensity>(json!("extreme"));
    assert!(result.is_err());
}

#[test]
fn test_goal_serializes_camel_case_and_omits_absent_fields() {
    let value = serde_json::to_value(goal("g1")).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "g1",
            "name": "Goal g1",
            "intensity": "moderate",
            "createdAt": "2026-03-01T08:00:00Z",
        })
    );
}

#[test]
fn test_goal_target_date_is_iso_date() {
    let mut g = goal("g1");
    g.target_date = Some(date(2026, 6, 1));
    g.description = Some("Build up slowly".to_string());
    let value = serde_json::to_value(&g).unwrap();
    assert_eq!(value["targetDate"], json!("2026-06-01"));
    assert_eq!(value["description"], json!("Build up slowly"));

    let back: Goal = serde_json::from_value(value).unwrap();
    assert_eq!(back, g);
}

#[test]
fn test_step_serializes_goal_id_key() {
    let value = serde_json::to_value(step("g1", 2, true)).unwrap();
    assert_eq!(value["goalId"], json!("g1"));
    assert_eq!(value["order"], json!(2));
    assert_eq!(value["completed"], json!(true));
    assert!(value.get("notes").is_none());
}

#[test]
fn test_step_missing_required_key_fails() {
    let result = serde_json::from_value::<Step>(json!({
        "id": "s1",
        "title": "Walk",
        "completed": false,
        "order": 0,
    }));
    assert!(result.is_err());
}

#[test]
fn test_goal_with_steps_sorts_by_order() {
    let view = GoalWithSteps::new(
        goal("g1"),
        vec![step("g1", 2, false), step("g1", 0, false), step("g1", 1, false)],
    );
    let orders: Vec<u32> = view.steps.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_progress_percent_rounding() {
    let empty = GoalWithSteps::new(goal("g1"), vec![]);
    assert_eq!(empty.progress_percent(), 0);

    let half = GoalWithSteps::new(goal("g1"), vec![step("g1", 0, true), step("g1", 1, false)]);
    assert_eq!(half.progress_percent(), 50);

    let two_thirds = GoalWithSteps::new(
        goal("g1"),
        vec![step("g1", 0, true), step("g1", 1, true), step("g1", 2, false)],
    );
    assert_eq!(two_thirds.progress_percent(), 67);

    let done = GoalWithSteps::new(goal("g1"), vec![step("g1", 0, true)]);
    assert_eq!(done.progress_percent(), 100);
}

#[test]
fn test_goal_with_steps_flattens_goal_fields() {
    let view = GoalWithSteps::new(goal("g1"), vec![]);
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["id"], json!("g1"));
    assert_eq!(value["steps"], json!([]));
}

#[test]
fn test_dashboard_aggregates() {
    let mut early = goal("g1");
    early.target_date = Some(date(2026, 5, 1));
    let mut late = goal("g2");
    late.target_date = Some(date(2026, 9, 1));

    let goals = vec![
        GoalWithSteps::new(late, vec![step("g2", 0, true), step("g2", 1, false)]),
        GoalWithSteps::new(early, vec![step("g1", 0, false)]),
        GoalWithSteps::new(goal("g3"), vec![]),
    ];

    let dashboard = Dashboard::from_goals(&goals);
    assert_eq!(dashboard.total_goals, 3);
    assert_eq!(dashboard.total_steps, 3);
    assert_eq!(dashboard.completed_steps, 1);
    assert_eq!(dashboard.remaining_steps, 2);
    assert_eq!(dashboard.next_target_date, Some(date(2026, 5, 1)));
}

#[test]
fn test_dashboard_empty() {
    assert_eq!(Dashboard::from_goals(&[]), Dashboard::default());
}
