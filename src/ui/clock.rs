use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

/// How the elapsed-time subtitle is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// Normalized duration, `h:mm:ss`.
    #[default]
    Duration,
    /// Hour, minute and second fields subtracted independently, `h:m:s`.
    /// Components may go negative when a field wraps.
    FieldWise,
}

pub fn format_elapsed(start: NaiveDateTime, now: NaiveDateTime, style: ClockStyle) -> String {
    match style {
        ClockStyle::Duration => {
            let total = (now - start).num_seconds().max(0);
            format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
        }
        ClockStyle::FieldWise => {
            let hours = i64::from(now.hour()) - i64::from(start.hour());
            let minutes = i64::from(now.minute()) - i64::from(start.minute());
            let seconds = i64::from(now.second()) - i64::from(start.second());
            format!("{hours}:{minutes}:{seconds}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid time")
    }

    #[test]
    fn duration_style_starts_at_zero() {
        assert_eq!(
            format_elapsed(at(9, 0, 0), at(9, 0, 0), ClockStyle::Duration),
            "0:00:00"
        );
    }

    #[test]
    fn duration_style_carries_across_minute_boundary() {
        assert_eq!(
            format_elapsed(at(10, 59, 58), at(11, 0, 3), ClockStyle::Duration),
            "0:00:05"
        );
    }

    #[test]
    fn duration_style_counts_hours() {
        assert_eq!(
            format_elapsed(at(8, 15, 0), at(9, 47, 9), ClockStyle::Duration),
            "1:32:09"
        );
    }

    #[test]
    fn duration_style_never_goes_negative() {
        assert_eq!(
            format_elapsed(at(9, 0, 10), at(9, 0, 0), ClockStyle::Duration),
            "0:00:00"
        );
    }

    #[test]
    fn field_wise_style_subtracts_each_field() {
        assert_eq!(
            format_elapsed(at(9, 10, 5), at(9, 12, 30), ClockStyle::FieldWise),
            "0:2:25"
        );
    }

    #[test]
    fn field_wise_style_shows_negative_components_across_a_wrap() {
        assert_eq!(
            format_elapsed(at(10, 59, 58), at(11, 0, 3), ClockStyle::FieldWise),
            "1:-59:-55"
        );
    }
}
