// SPDX-License-Identifier: MPL-2.0
//! Time-of-day greeting shown above the profile header.

use chrono::{DateTime, Local, Timelike};

/// Greeting bucket derived from the local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Buckets an hour-of-day (0-23): before 12 is morning, before 16 is
    /// afternoon, the rest is evening.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 16 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn from_time(time: &DateTime<Local>) -> Self {
        Self::from_hour(time.hour())
    }

    /// Returns the i18n message key for this greeting.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Greeting::Morning => "greeting-morning",
            Greeting::Afternoon => "greeting-afternoon",
            Greeting::Evening => "greeting-evening",
        }
    }
}

/// Formats the displayed time-of-day string (hours and minutes).
pub fn clock_label(time: &DateTime<Local>) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hour_nine_is_morning() {
        assert_eq!(Greeting::from_hour(9), Greeting::Morning);
    }

    #[test]
    fn hour_fourteen_is_afternoon() {
        assert_eq!(Greeting::from_hour(14), Greeting::Afternoon);
    }

    #[test]
    fn hour_twenty_is_evening() {
        assert_eq!(Greeting::from_hour(20), Greeting::Evening);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Greeting::from_hour(0), Greeting::Morning);
        assert_eq!(Greeting::from_hour(11), Greeting::Morning);
        assert_eq!(Greeting::from_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::from_hour(15), Greeting::Afternoon);
        assert_eq!(Greeting::from_hour(16), Greeting::Evening);
        assert_eq!(Greeting::from_hour(23), Greeting::Evening);
    }

    #[test]
    fn i18n_keys_are_distinct() {
        assert_ne!(Greeting::Morning.i18n_key(), Greeting::Afternoon.i18n_key());
        assert_ne!(Greeting::Afternoon.i18n_key(), Greeting::Evening.i18n_key());
    }

    #[test]
    fn clock_label_is_hours_and_minutes() {
        let time = Local.with_ymd_and_hms(2024, 5, 1, 7, 5, 30).unwrap();
        assert_eq!(clock_label(&time), "07:05");
    }
}
