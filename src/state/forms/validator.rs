//! Pre-submit validation

use super::field_store::FormState;
use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// The one message shown for any validation failure
pub const AGGREGATED_NOTICE: &str = "Please fill in all required fields";

/// Why a form may not be sent yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("no preferred date selected")]
    DateMissing,

    #[error("{0} is in the past")]
    DateInPast(NaiveDate),

    #[error("{date} falls on {weekday}, which is closed")]
    ClosedDay { date: NaiveDate, weekday: Weekday },
}

/// Check that every required field has a non-blank value.
///
/// Missing fields are reported in the order given.
pub fn validate(state: &FormState, required: &[&str]) -> Result<(), ValidationError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| state.get(name).trim().is_empty())
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Which calendar days can be booked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRule {
    pub closed_weekday: Weekday,
}

impl Default for DateRule {
    fn default() -> Self {
        Self {
            closed_weekday: Weekday::Sun,
        }
    }
}

impl DateRule {
    pub fn new(closed_weekday: Weekday) -> Self {
        Self { closed_weekday }
    }

    /// Check one date against today
    pub fn check_date(&self, date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
        if date < today {
            return Err(ValidationError::DateInPast(date));
        }
        if date.weekday() == self.closed_weekday {
            return Err(ValidationError::ClosedDay {
                date,
                weekday: self.closed_weekday,
            });
        }
        Ok(())
    }

    /// Whether the calendar should offer `date` at all
    pub fn is_available(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.check_date(date, today).is_ok()
    }

    /// Require a selected date that passes [`check_date`](Self::check_date)
    pub fn check(
        &self,
        selected: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<NaiveDate, ValidationError> {
        let date = selected.ok_or(ValidationError::DateMissing)?;
        self.check_date(date, today)?;
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2026-10-19 is a Monday
    fn today() -> NaiveDate {
        date(2026, 10, 19)
    }

    #[test]
    fn test_all_present_is_ok() {
        let state: FormState = [("name", "Jane"), ("email", "jane@x.com")]
            .into_iter()
            .collect();
        assert_eq!(validate(&state, &["name", "email"]), Ok(()));
    }

    #[test]
    fn test_any_empty_required_field_fails() {
        let required = ["name", "email", "subject"];
        for blank in required {
            let state: FormState = required
                .iter()
                .map(|f| (*f, if *f == blank { "" } else { "x" }))
                .collect();
            assert_eq!(
                validate(&state, &required),
                Err(ValidationError::MissingFields(vec![blank.to_string()]))
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let state: FormState = [("name", "   \t")].into_iter().collect();
        assert!(validate(&state, &["name"]).is_err());
    }

    #[test]
    fn test_missing_listed_in_required_order() {
        let state = FormState::default();
        assert_eq!(
            validate(&state, &["subject", "name"]),
            Err(ValidationError::MissingFields(vec![
                "subject".to_string(),
                "name".to_string()
            ]))
        );
    }

    #[test]
    fn test_optional_fields_are_not_checked() {
        let state: FormState = [("name", "Jane"), ("phone", "")].into_iter().collect();
        assert!(validate(&state, &["name"]).is_ok());
    }

    #[test]
    fn test_date_required() {
        let rule = DateRule::default();
        assert_eq!(rule.check(None, today()), Err(ValidationError::DateMissing));
    }

    #[test]
    fn test_past_date_rejected() {
        let rule = DateRule::default();
        let yesterday = date(2026, 10, 18);
        assert_eq!(
            rule.check(Some(yesterday), today()),
            Err(ValidationError::DateInPast(yesterday))
        );
    }

    #[test]
    fn test_today_is_allowed() {
        let rule = DateRule::default();
        assert_eq!(rule.check(Some(today()), today()), Ok(today()));
    }

    #[test]
    fn test_sunday_rejected_by_default() {
        let rule = DateRule::default();
        let sunday = date(2026, 10, 25);
        assert_eq!(
            rule.check(Some(sunday), today()),
            Err(ValidationError::ClosedDay {
                date: sunday,
                weekday: Weekday::Sun
            })
        );
        assert!(!rule.is_available(sunday, today()));
    }

    #[test]
    fn test_closed_weekday_is_configurable() {
        let rule = DateRule::new(Weekday::Wed);
        assert!(rule.is_available(date(2026, 10, 25), today()));
        assert!(!rule.is_available(date(2026, 10, 21), today()));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MissingFields(vec!["name".into(), "email".into()]);
        assert_eq!(err.to_string(), "missing required fields: name, email");
    }
}
