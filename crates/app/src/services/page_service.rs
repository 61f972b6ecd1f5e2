//! Page service — builds the sample form for the current instant.

use weekday_form_domain::error::PageError;
use weekday_form_domain::form::SampleForm;
use weekday_form_domain::time::TimeZoneSetting;
use weekday_form_domain::weekday::DayName;

use crate::ports::Clock;

/// Application service resolving the weekday shown in the form.
///
/// Nothing is cached: every call reads the clock again.
pub struct PageService<C> {
    clock: C,
    zone: TimeZoneSetting,
    action: String,
}

impl<C: Clock> PageService<C> {
    /// Create a new service reading `clock`, interpreting instants in `zone`,
    /// and posting the form to `action`.
    pub fn new(clock: C, zone: TimeZoneSetting, action: impl Into<String>) -> Self {
        Self {
            clock,
            zone,
            action: action.into(),
        }
    }

    /// Zone used to decide the calendar day.
    #[must_use]
    pub fn zone(&self) -> TimeZoneSetting {
        self.zone
    }

    /// Today's weekday name.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Clock`] when the clock cannot be read.
    pub fn current_day(&self) -> Result<DayName, PageError> {
        let now = self.clock.now()?;
        Ok(DayName::new(self.zone.weekday_at(now)))
    }

    /// Build the form with today's weekday pre-filled.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Clock`] when the clock cannot be read.
    pub fn form(&self) -> Result<SampleForm, PageError> {
        let day = self.current_day()?;
        tracing::debug!(%day, zone = %self.zone, "resolved current day");
        Ok(SampleForm::new(self.action.as_str(), day))
    }
}
