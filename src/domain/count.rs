//! Requested result count validation

use super::parse::{IntPrefix, read_int_prefix};
use crate::domain::DomainError;

/// Maximum count when an endpoint does not override it
pub const DEFAULT_MAX_COUNT: u32 = 50;

/// Validates the optional `count` query parameter against a maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountValidator {
    max: u32,
}

impl Default for CountValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COUNT)
    }
}

impl CountValidator {
    pub fn new(max: u32) -> Self {
        Self { max }
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Same validator with a different maximum
    pub fn with_max(self, max: u32) -> Self {
        Self { max }
    }

    /// Parse `raw`, returning 1 when absent
    pub fn validate(&self, raw: Option<&str>) -> Result<u32, DomainError> {
        let Some(raw) = raw else {
            return Ok(1);
        };

        let prefix = read_int_prefix(raw).ok_or_else(|| {
            DomainError::invalid_parameter(format!(
                "Invalid count parameter: '{}'. Must be a number.",
                raw
            ))
        })?;

        // Overflowing digits are still a number; quote them as given
        let shown = match prefix {
            IntPrefix::Value(n) => n.to_string(),
            IntPrefix::Overflow(digits) => digits.trim_start_matches('+').to_string(),
        };
        let parsed = prefix.saturating();

        if parsed <= 0 {
            return Err(DomainError::invalid_parameter(format!(
                "Invalid count parameter: '{}'. Must be greater than 0.",
                shown
            )));
        }

        if parsed > i64::from(self.max) {
            return Err(DomainError::invalid_parameter(format!(
                "Invalid count parameter: '{}'. Maximum allowed count is {}.",
                shown, self.max
            )));
        }

        // Bounded by `max` above
        Ok(parsed as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: DomainError) -> String {
        match err {
            DomainError::InvalidParameter { message } => message,
            other => panic!("expected invalid parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_count_is_one() {
        assert_eq!(CountValidator::default().validate(None).unwrap(), 1);
    }

    #[test]
    fn test_in_bounds_count_is_returned() {
        let validator = CountValidator::default();

        assert_eq!(validator.validate(Some("3")).unwrap(), 3);
        assert_eq!(validator.validate(Some("50")).unwrap(), 50);
    }

    #[test]
    fn test_zero_is_rejected() {
        let err = CountValidator::default().validate(Some("0")).unwrap_err();
        assert_eq!(
            message(err),
            "Invalid count parameter: '0'. Must be greater than 0."
        );
    }

    #[test]
    fn test_negative_is_rejected() {
        let err = CountValidator::default().validate(Some("-4")).unwrap_err();
        assert!(message(err).contains("Must be greater than 0"));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let err = CountValidator::default().validate(Some("abc")).unwrap_err();
        assert_eq!(
            message(err),
            "Invalid count parameter: 'abc'. Must be a number."
        );
    }

    #[test]
    fn test_above_max_cites_max() {
        let err = CountValidator::default().validate(Some("99")).unwrap_err();
        assert_eq!(
            message(err),
            "Invalid count parameter: '99'. Maximum allowed count is 50."
        );
    }

    #[test]
    fn test_endpoint_override_max() {
        let validator = CountValidator::default().with_max(10);

        assert_eq!(validator.max(), 10);
        assert_eq!(validator.validate(Some("10")).unwrap(), 10);
        assert!(message(validator.validate(Some("11")).unwrap_err()).ends_with("is 10."));
    }

    #[test]
    fn test_huge_count_cites_max() {
        let err = CountValidator::default()
            .validate(Some("99999999999999999999"))
            .unwrap_err();
        assert_eq!(
            message(err),
            "Invalid count parameter: '99999999999999999999'. Maximum allowed count is 50."
        );
    }

    #[test]
    fn test_huge_negative_count_is_not_positive() {
        let err = CountValidator::default()
            .validate(Some("-99999999999999999999"))
            .unwrap_err();
        assert_eq!(
            message(err),
            "Invalid count parameter: '-99999999999999999999'. Must be greater than 0."
        );
    }

    #[test]
    fn test_numeric_prefix_is_accepted() {
        assert_eq!(CountValidator::default().validate(Some("4x")).unwrap(), 4);
    }
}
