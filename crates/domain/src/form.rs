//! The sample form: three text inputs and a submit control.

use crate::weekday::DayName;

/// Submission endpoint used when none is configured.
pub const DEFAULT_ACTION: &str = "action.php";

/// One labeled text input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Value of the input's `name` attribute.
    pub name: &'static str,
    /// Text shown next to the input.
    pub label: &'static str,
    /// Pre-filled `value` attribute, if any.
    pub value: Option<&'static str>,
}

/// Form posted to an external handler, with the `day` field pre-filled.
///
/// The handler behind [`action`](Self::action) is not part of this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleForm {
    action: String,
    day: DayName,
}

impl SampleForm {
    /// Create a form that posts to `action` and shows `day` in the day field.
    #[must_use]
    pub fn new(action: impl Into<String>, day: DayName) -> Self {
        Self {
            action: action.into(),
            day,
        }
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn day(&self) -> DayName {
        self.day
    }

    /// Fields in display order: `name`, `number`, `day`.
    #[must_use]
    pub fn fields(&self) -> [FormField; 3] {
        [
            FormField {
                name: "name",
                label: "Name",
                value: None,
            },
            FormField {
                name: "number",
                label: "Number",
                value: None,
            },
            FormField {
                name: "day",
                label: "Day",
                value: Some(self.day.as_str()),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn should_list_fields_in_order() {
        let form = SampleForm::new(DEFAULT_ACTION, DayName::new(Weekday::Mon));
        let names: Vec<&str> = form.fields().iter().map(|field| field.name).collect();
        assert_eq!(names, ["name", "number", "day"]);
        let labels: Vec<&str> = form.fields().iter().map(|field| field.label).collect();
        assert_eq!(labels, ["Name", "Number", "Day"]);
    }

    #[test]
    fn should_prefill_only_day_field() {
        let form = SampleForm::new(DEFAULT_ACTION, DayName::new(Weekday::Wed));
        let [name, number, day] = form.fields();
        assert_eq!(name.value, None);
        assert_eq!(number.value, None);
        assert_eq!(day.value, Some("Wednesday"));
    }

    #[test]
    fn should_keep_action() {
        let form = SampleForm::new("/submit", DayName::new(Weekday::Fri));
        assert_eq!(form.action(), "/submit");
        assert_eq!(form.day(), DayName::new(Weekday::Fri));
    }
}
