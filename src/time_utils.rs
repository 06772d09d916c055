// ABOUTME: Parsing and formatting of human race-time strings
// ABOUTME: Malformed input degrades to the zero "unknown" sentinel, never an error

/// Parse a race-time string into seconds
///
/// Accepts `"MM:SS.ss"`, `"SS.ss"`, and bare integers; surrounding whitespace
/// is ignored. Malformed, empty, or negative input yields `0.0`, the wire
/// sentinel for "not provided". Callers must treat `0` as unknown, never as a
/// real zero-duration swim.
#[must_use]
pub fn parse_time_input(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let seconds = if let Some((minutes_part, seconds_part)) = trimmed.split_once(':') {
        match (
            minutes_part.trim().parse::<f64>(),
            seconds_part.trim().parse::<f64>(),
        ) {
            (Ok(minutes), Ok(seconds)) if minutes >= 0.0 && seconds >= 0.0 => {
                minutes.mul_add(60.0, seconds)
            }
            _ => return 0.0,
        }
    } else {
        match trimmed.parse::<f64>() {
            Ok(seconds) => seconds,
            Err(_) => return 0.0,
        }
    };

    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Format seconds as `M:SS.s` for display
///
/// Rounds half-up at the tenth. Returns `None` for the `<= 0` sentinel,
/// signalling "no time to display".
#[must_use]
pub fn format_time(seconds: f64) -> Option<String> {
    format_clock(seconds, 1)
}

/// Format seconds as `M:SS.ss` where the extra digit matters (goal splits,
/// base intervals shown to coaches)
#[must_use]
pub fn format_time_precise(seconds: f64) -> Option<String> {
    format_clock(seconds, 2)
}

fn format_clock(seconds: f64, fractional_digits: usize) -> Option<String> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }

    // Round half-up at the last retained digit before splitting out minutes,
    // so 59.96 carries into 1:00.0 instead of rendering 0:60.0.
    let scale = 10f64.powi(fractional_digits as i32);
    let rounded = (seconds.mul_add(scale, 0.5)).floor() / scale;

    let minutes = (rounded / 60.0).floor();
    let secs = rounded - minutes * 60.0;

    // Seconds field is zero-padded to two integer digits: "0:07.3", "1:05.20".
    let width = fractional_digits + 3;
    Some(format!("{minutes:.0}:{secs:0width$.fractional_digits$}"))
}
