//! Long English weekday names.

use std::fmt;

use chrono::Weekday;

/// A weekday that always prints as its full English name (`Monday`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayName(Weekday);

impl DayName {
    /// Every day name, Monday first.
    pub const ALL: [Self; 7] = [
        Self(Weekday::Mon),
        Self(Weekday::Tue),
        Self(Weekday::Wed),
        Self(Weekday::Thu),
        Self(Weekday::Fri),
        Self(Weekday::Sat),
        Self(Weekday::Sun),
    ];

    #[must_use]
    pub const fn new(weekday: Weekday) -> Self {
        Self(weekday)
    }

    #[must_use]
    pub const fn weekday(self) -> Weekday {
        self.0
    }

    /// The long English name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl From<Weekday> for DayName {
    fn from(weekday: Weekday) -> Self {
        Self::new(weekday)
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_every_weekday_in_full() {
        let names: Vec<&str> = DayName::ALL.iter().map(|day| day.as_str()).collect();
        assert_eq!(
            names,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn should_never_abbreviate() {
        for day in DayName::ALL {
            assert!(day.as_str().len() > 3, "{day} looks abbreviated");
            assert!(day.as_str().ends_with("day"));
        }
    }

    #[test]
    fn should_display_long_name() {
        assert_eq!(DayName::from(Weekday::Wed).to_string(), "Wednesday");
    }

    #[test]
    fn should_keep_underlying_weekday() {
        assert_eq!(DayName::new(Weekday::Sat).weekday(), Weekday::Sat);
    }
}
