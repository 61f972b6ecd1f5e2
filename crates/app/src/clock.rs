//! In-process clock implementations.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::DateTime;

use weekday_form_domain::error::ClockError;
use weekday_form_domain::time::Timestamp;

use crate::ports::Clock;

/// Reads the host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    fn read(time: SystemTime) -> Result<Timestamp, ClockError> {
        let since_epoch = time.duration_since(UNIX_EPOCH)?;
        let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| ClockError::OutOfRange)?;
        DateTime::from_timestamp(secs, since_epoch.subsec_nanos()).ok_or(ClockError::OutOfRange)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        Self::read(SystemTime::now())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    #[must_use]
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        Ok(self.instant)
    }
}
