//! Formatting utilities used for CLI and report outputs.

use chrono::Duration;

/// `09h 05m` (long) or `09:05` (short). Negative values are shown as zero.
pub fn format_duration(d: Duration, short: bool) -> String {
    let mins = d.num_minutes().max(0);
    let hours = mins / 60;
    let minutes = mins % 60;

    if short {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}

pub fn format_optional_duration(d: Option<Duration>, short: bool) -> String {
    match d {
        Some(d) => format_duration(d, short),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_forms() {
        assert_eq!(format_duration(Duration::minutes(545), false), "09h 05m");
        assert_eq!(format_duration(Duration::minutes(545), true), "09:05");
        assert_eq!(format_duration(Duration::seconds(59), true), "00:00");
        assert_eq!(format_optional_duration(None, true), "--");
    }
}
