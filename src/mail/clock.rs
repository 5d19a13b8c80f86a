//! Relative time labels for the message list, computed against an injected
//! logical "now" so output stays reproducible.

use chrono::{DateTime, Utc};

/// Which compact label a timestamp gets relative to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    /// Under a day old: clock time, e.g. "10:30 AM".
    Clock,
    /// Under a week old: weekday name, e.g. "Thu".
    Weekday,
    /// Anything older: month and day, e.g. "Mar 11".
    MonthDay,
}

impl TimeBucket {
    /// Floor semantics on the elapsed hours/days, so an instant at or
    /// after `now` still lands in `Clock`.
    pub fn classify(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = now.signed_duration_since(timestamp);
        if elapsed.num_hours() < 24 {
            Self::Clock
        } else if elapsed.num_days() < 7 {
            Self::Weekday
        } else {
            Self::MonthDay
        }
    }
}

pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match TimeBucket::classify(timestamp, now) {
        TimeBucket::Clock => timestamp.format("%I:%M %p").to_string(),
        TimeBucket::Weekday => timestamp.format("%a").to_string(),
        TimeBucket::MonthDay => timestamp.format("%b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 14, 15, 14, 0).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn under_a_day_shows_clock_time() {
        let ts = at(2030, 3, 14, 10, 30);
        assert_eq!(TimeBucket::classify(ts, now()), TimeBucket::Clock);
        assert_eq!(relative_label(ts, now()), "10:30 AM");
    }

    #[test]
    fn under_a_week_shows_weekday() {
        // 2030-03-11 was a Monday.
        let ts = at(2030, 3, 11, 9, 0);
        assert_eq!(TimeBucket::classify(ts, now()), TimeBucket::Weekday);
        assert_eq!(relative_label(ts, now()), "Mon");
    }

    #[test]
    fn older_shows_month_and_day() {
        let ts = at(2030, 3, 1, 12, 0);
        assert_eq!(TimeBucket::classify(ts, now()), TimeBucket::MonthDay);
        assert_eq!(relative_label(ts, now()), "Mar 1");
    }

    #[test]
    fn boundaries_use_floor_arithmetic() {
        // 23h59m old is still "today"; exactly 24h is not.
        assert_eq!(
            TimeBucket::classify(at(2030, 3, 13, 15, 15), now()),
            TimeBucket::Clock
        );
        assert_eq!(
            TimeBucket::classify(at(2030, 3, 13, 15, 14), now()),
            TimeBucket::Weekday
        );
        // 6d23h old is a weekday; exactly 7 days is month/day.
        assert_eq!(
            TimeBucket::classify(at(2030, 3, 7, 15, 15), now()),
            TimeBucket::Weekday
        );
        assert_eq!(
            TimeBucket::classify(at(2030, 3, 7, 15, 14), now()),
            TimeBucket::MonthDay
        );
    }

    #[test]
    fn future_instants_fall_back_to_clock_time() {
        let ts = at(2030, 3, 15, 9, 0);
        assert_eq!(TimeBucket::classify(ts, now()), TimeBucket::Clock);
    }

    #[test]
    fn afternoon_times_use_twelve_hour_clock() {
        let ts = at(2030, 3, 14, 15, 14);
        assert_eq!(relative_label(ts, now()), "03:14 PM");
    }
}
