//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// The clock could not produce a usable instant.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The system clock reads earlier than the Unix epoch.
    #[error("system clock reads before the Unix epoch")]
    BeforeEpoch(#[from] std::time::SystemTimeError),
    /// The reading cannot be represented as a calendar date.
    #[error("system clock reading is out of the supported date range")]
    OutOfRange,
}

/// A time-zone name that is neither `local` nor a known IANA zone.
#[derive(Debug, thiserror::Error)]
#[error("unknown time zone `{name}`")]
pub struct TimeZoneError {
    name: String,
}

impl TimeZoneError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected zone name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Failure while preparing the page content.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No current instant is available.
    #[error("current date is unavailable")]
    Clock(#[from] ClockError),
}
