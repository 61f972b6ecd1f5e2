//! Clock port — where "now" comes from.

use weekday_form_domain::error::ClockError;
use weekday_form_domain::time::Timestamp;

/// Supplies the current instant.
///
/// Reading is synchronous: a render needs exactly one reading and never waits.
pub trait Clock {
    /// Return the current instant.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError`] when no usable instant is available.
    fn now(&self) -> Result<Timestamp, ClockError>;
}
