// ABOUTME: Unit tests for race-time parsing and formatting
// ABOUTME: Covers sentinel degradation, boundary formats, and round-trip fidelity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use swimlab_intelligence::time_utils::{format_time, format_time_precise, parse_time_input};

#[test]
fn test_parse_accepted_formats() {
    assert!((parse_time_input("58") - 58.0).abs() < 1e-9);
    assert!((parse_time_input("59.9") - 59.9).abs() < 1e-9);
    assert!((parse_time_input("1:00.0") - 60.0).abs() < 1e-9);
    assert!((parse_time_input("0:58.00") - 58.0).abs() < 1e-9);
    assert!((parse_time_input("12:34.56") - 754.56).abs() < 1e-9);
    assert!(
        (parse_time_input("  1:02.5  ") - 62.5).abs() < 1e-9,
        "surrounding whitespace should be ignored"
    );
}

#[test]
fn test_parse_degrades_to_sentinel() {
    assert!((parse_time_input("")).abs() < f64::EPSILON);
    assert!((parse_time_input("   ")).abs() < f64::EPSILON);
    assert!((parse_time_input("garbage")).abs() < f64::EPSILON);
    assert!((parse_time_input("-5")).abs() < f64::EPSILON, "negative seconds rejected");
    assert!((parse_time_input("1:-5")).abs() < f64::EPSILON, "negative component rejected");
    assert!((parse_time_input("-1:05.0")).abs() < f64::EPSILON);
    assert!((parse_time_input("0")).abs() < f64::EPSILON, "zero stays the unknown sentinel");
    assert!((parse_time_input("1:2:3")).abs() < f64::EPSILON, "hour-style input is not a race time");
    assert!((parse_time_input("NaN")).abs() < f64::EPSILON);
    assert!((parse_time_input("inf")).abs() < f64::EPSILON);
}

#[test]
fn test_format_display() {
    assert_eq!(format_time(58.0).as_deref(), Some("0:58.0"));
    assert_eq!(format_time(60.0).as_deref(), Some("1:00.0"));
    assert_eq!(format_time(7.25).as_deref(), Some("0:07.3"), "half-up at the tenth");
    assert_eq!(format_time(125.55).as_deref(), Some("2:05.6"));
    assert_eq!(
        format_time(59.96).as_deref(),
        Some("1:00.0"),
        "rounding should carry into the minutes"
    );
}

#[test]
fn test_format_precise() {
    assert_eq!(format_time_precise(58.0).as_deref(), Some("0:58.00"));
    assert_eq!(format_time_precise(65.125).as_deref(), Some("1:05.13"));
    assert_eq!(format_time_precise(56.84).as_deref(), Some("0:56.84"));
}

#[test]
fn test_format_unknown_is_none() {
    assert_eq!(format_time(0.0), None);
    assert_eq!(format_time(-3.0), None);
    assert_eq!(format_time(f64::NAN), None);
    assert_eq!(format_time_precise(0.0), None);
}

#[test]
fn test_round_trip_within_tolerance() {
    // Values already on a tenth survive the display round-trip exactly.
    for &seconds in &[7.3, 25.0, 58.0, 59.9, 61.7, 125.5, 312.4] {
        let formatted = format_time(seconds).unwrap();
        let back = parse_time_input(&formatted);
        assert!(
            (back - seconds).abs() < 1e-9,
            "round trip of {seconds} drifted: {formatted} -> {back}"
        );
    }

    // Arbitrary values drift by at most half the last retained digit.
    for &seconds in &[13.321, 56.84, 74.706, 296.333] {
        let formatted = format_time(seconds).unwrap();
        let back = parse_time_input(&formatted);
        assert!(
            (back - seconds).abs() <= 0.05 + 1e-9,
            "round trip of {seconds} drifted: {formatted} -> {back}"
        );
    }
}
