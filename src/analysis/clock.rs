// Wall-clock source for analysis timestamps

use chrono::{Local, NaiveDateTime};

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// ISO-8601 local time with microseconds and no offset,
/// e.g. `2024-03-01T14:05:09.120000`
///
/// The six fraction digits are always written, so a whole second renders as
/// `.000000` rather than being dropped.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_timestamp() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_micro_opt(14, 5, 9, 120_000)
            .unwrap();

        assert_eq!(format_timestamp(time), "2024-03-01T14:05:09.120000");
    }

    #[test]
    fn test_format_timestamp_keeps_zero_fraction() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();

        assert_eq!(format_timestamp(time), "2024-03-01T14:05:09.000000");
    }

    #[test]
    fn test_fixed_clock() {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(FixedClock(time).now(), time);
    }
}
