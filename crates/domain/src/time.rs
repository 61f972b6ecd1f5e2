//! Time and time-zone helpers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::TimeZoneError;

/// UTC timestamp produced by clocks.
pub type Timestamp = DateTime<Utc>;

/// Which time zone decides the calendar day of an instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZoneSetting {
    /// The zone configured on the host running the server.
    #[default]
    Local,
    /// A named IANA zone such as `Europe/Paris`.
    Named(Tz),
}

impl TimeZoneSetting {
    /// Return the weekday of `instant` as seen in this zone.
    #[must_use]
    pub fn weekday_at(self, instant: Timestamp) -> Weekday {
        match self {
            Self::Local => instant.with_timezone(&Local).weekday(),
            Self::Named(tz) => instant.with_timezone(&tz).weekday(),
        }
    }
}

impl FromStr for TimeZoneSetting {
    type Err = TimeZoneError;

    /// Accepts `local` (any case) or an IANA zone name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        value
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| TimeZoneError::new(value))
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}
