// ABOUTME: End-to-end tests of the interval engine request/response contract
// ABOUTME: Covers the single-time, empty, and full-curve scenarios plus goal semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use swimlab_intelligence::time_utils::parse_time_input;
use swimlab_intelligence::{
    calculate_goal_times, AppError, IntervalEngine, IntervalRequest, RaceTimes, SwimmerStyle,
};

fn single_100_request() -> IntervalRequest {
    IntervalRequest {
        t100: "58.00".into(),
        ..IntervalRequest::default()
    }
}

fn full_curve_request() -> IntervalRequest {
    IntervalRequest {
        t50: "25.0".into(),
        t100: "54.0".into(),
        t200: "1:58.0".into(),
        t500: "5:20.0".into(),
        ..IntervalRequest::default()
    }
}

#[test]
fn test_single_100_scenario() {
    let engine = IntervalEngine::new();
    let response = engine.generate(&single_100_request()).unwrap();

    assert_eq!(
        response.model_predictions.get("100 yards").unwrap().as_deref(),
        Some("0:58.0")
    );
    assert_eq!(
        response.goal_predictions.get("100 yards").unwrap().as_deref(),
        Some("0:56.8"),
        "default 2% improvement on 58.0"
    );

    let entry = response.intervals.get(&100).unwrap();
    assert_eq!(entry.rep_count, 3);
    assert_eq!(entry.distance, 100);

    let progression = response.fatigue_progressions.get(&100).unwrap();
    assert_eq!(progression.len(), 3);
    assert!(
        progression[0] < progression[1] && progression[1] < progression[2],
        "three rising fatigue values expected, got {progression:?}"
    );

    assert_eq!(response.swimmer_profile.style, SwimmerStyle::MiddleDistance);
    assert_eq!(
        response.swimmer_profile.base_interval_100.as_deref(),
        Some("1:10.0"),
        "58 rounds up to 60 on the clock plus 10 seconds rest"
    );

    assert_eq!(
        response.actual_times.get("100 yards").unwrap().as_deref(),
        Some("0:58.0")
    );
    assert!(response.actual_times.get("50 yards").unwrap().is_none());
}

#[test]
fn test_goal_times_two_percent() {
    let times = RaceTimes::from_seconds(0.0, 58.0, 0.0, 0.0);
    let goals = calculate_goal_times(&times, 2.0);

    assert!(
        (goals.g100.unwrap() - 56.84).abs() < 1e-9,
        "2% off 58.0 is 56.84, got {:?}",
        goals.g100
    );
    assert!(goals.g50.is_none());
    assert!(goals.g200.is_none());
    assert!(goals.g500.is_none());
}

#[test]
fn test_goal_direction() {
    let times = RaceTimes::from_seconds(25.0, 54.0, 118.0, 320.0);
    let goals = calculate_goal_times(&times, 2.0);

    for (goal, actual) in [
        (goals.g50, 25.0),
        (goals.g100, 54.0),
        (goals.g200, 118.0),
        (goals.g500, 320.0),
    ] {
        let goal = goal.unwrap();
        assert!(
            goal < actual,
            "positive improvement must shorten the time: {goal} vs {actual}"
        );
    }
}

#[test]
fn test_no_times_scenario() {
    let engine = IntervalEngine::new();
    let response = engine.generate(&IntervalRequest::default()).unwrap();

    assert_eq!(response.model_predictions.len(), 20, "every ladder entry present");
    for (map_name, map) in [
        ("model", &response.model_predictions),
        ("practice", &response.practice_predictions),
        ("goal", &response.goal_predictions),
    ] {
        assert!(
            map.values().all(Option::is_none),
            "{map_name} predictions should all be null with no known times"
        );
    }

    assert!(response.intervals.is_empty());
    assert!(response.fatigue_progressions.is_empty());
    assert_eq!(
        response.swimmer_profile.style,
        SwimmerStyle::MiddleDistance,
        "neutral fallback applies with nothing known"
    );
    assert!(response.swimmer_profile.base_interval_100.is_none());
    assert!(response.actual_times.values().all(Option::is_none));
}

#[test]
fn test_no_times_serializes_nulls() {
    let engine = IntervalEngine::new();
    let response = engine.generate(&IntervalRequest::default()).unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert!(value["model_predictions"]["100 yards"].is_null());
    assert!(value["swimmer_profile"]["base_interval_100"].is_null());
    assert_eq!(value["swimmer_profile"]["style"], "middle_distance");
    assert_eq!(value["goal_model"]["percentage"], 2.0);

    let body = response.to_json().unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(reparsed, value);
}

#[test]
fn test_full_curve_scenario() {
    let engine = IntervalEngine::new();
    let response = engine.generate(&full_curve_request()).unwrap();

    assert_eq!(response.swimmer_profile.style, SwimmerStyle::Distance);
    assert_eq!(
        response.model_predictions.get("200 yards").unwrap().as_deref(),
        Some("1:58.0"),
        "known anchors pass through the model exactly"
    );

    // Every ladder distance gets an interval when the full curve is known.
    assert_eq!(response.intervals.len(), 20);
    for (distance, entry) in &response.intervals {
        let progression = response.fatigue_progressions.get(distance).unwrap();
        let slowest = progression.last().copied().unwrap();
        assert!(
            entry.send_off_seconds >= slowest,
            "send-off {} at {distance} must cover the slowest repeat {slowest}",
            entry.send_off_seconds
        );
        let steps = entry.send_off_seconds / 5.0;
        assert!(
            (steps - steps.round()).abs() < 1e-9,
            "send-off {} at {distance} should sit on the 5-second clock",
            entry.send_off_seconds
        );
    }
}

#[test]
fn test_practice_predictions_slower_than_model() {
    let engine = IntervalEngine::new();
    let response = engine.generate(&full_curve_request()).unwrap();

    for (label, model) in &response.model_predictions {
        let model = parse_time_input(model.as_deref().unwrap());
        let practice =
            parse_time_input(response.practice_predictions.get(label).unwrap().as_deref().unwrap());
        assert!(
            practice > model,
            "practice {practice} should trail the race model {model} at {label}"
        );
    }
}

#[test]
fn test_caller_goal_is_authoritative() {
    let engine = IntervalEngine::new();
    let mut request = single_100_request();
    request.g100 = "55.0".into();

    let response = engine.generate(&request).unwrap();
    assert_eq!(
        response.goal_predictions.get("100 yards").unwrap().as_deref(),
        Some("0:55.0"),
        "a supplied goal must not be overwritten by the computed one"
    );
}

#[test]
fn test_zero_goal_lets_engine_compute() {
    let engine = IntervalEngine::new();
    let mut request = single_100_request();
    request.g100 = "0".into();

    let response = engine.generate(&request).unwrap();
    assert_eq!(
        response.goal_predictions.get("100 yards").unwrap().as_deref(),
        Some("0:56.8")
    );
}

#[test]
fn test_invalid_parameters_rejected() {
    let engine = IntervalEngine::new();

    let mut request = single_100_request();
    request.num_reps = 0;
    assert!(matches!(
        engine.generate(&request),
        Err(AppError::InvalidInput { .. })
    ));

    let mut request = single_100_request();
    request.goal_percentage = 150.0;
    assert!(engine.generate(&request).is_err());

    let mut request = single_100_request();
    request.goal_percentage = f64::NAN;
    assert!(engine.generate(&request).is_err());
}

#[test]
fn test_request_defaults_from_json() {
    let request: IntervalRequest = serde_json::from_str(r#"{"t100": "58.00"}"#).unwrap();

    assert!((request.goal_percentage - 2.0).abs() < f64::EPSILON);
    assert_eq!(request.num_reps, 3);
    assert!(request.t50.is_empty());

    let engine = IntervalEngine::new();
    let response = engine.generate(&request).unwrap();
    assert_eq!(
        response.model_predictions.get("100 yards").unwrap().as_deref(),
        Some("0:58.0")
    );
}
