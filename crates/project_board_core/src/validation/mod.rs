//! Declarative input validation.
//!
//! # Responsibility
//! - Check one labeled value against optional declarative constraints.
//! - Report the first violated constraint for diagnostics.
//!
//! # Invariants
//! - Validation is pure: no side effects, no panics.
//! - Unspecified constraints are vacuously satisfied.
//! - Lengths are measured in UTF-16 code units.
//! - Length constraints apply to text only; range constraints apply to numbers
//!   only. A constraint of the other kind is skipped, not rejected.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    Text(String),
    Number(f64),
}

impl ValidatableValue {
    /// String form used by the `required` check.
    fn display_form(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Value plus its constraint flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: ValidatableValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates an unconstrained spec for a textual value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(ValidatableValue::Text(value.into()))
    }

    /// Creates an unconstrained spec for a numeric value.
    pub fn number(value: f64) -> Self {
        Self::unconstrained(ValidatableValue::Number(value))
    }

    fn unconstrained(value: ValidatableValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Checks every set constraint and returns the first violation.
    ///
    /// Constraints are evaluated in declaration order: `required`,
    /// `min_length`, `max_length`, `min`, `max`.
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.required && self.value.display_form().trim().is_empty() {
            return Err(ValidationError::Required);
        }

        match &self.value {
            ValidatableValue::Text(text) => {
                // UTF-16 code units, matching the browser's `String.length`.
                let length = text.encode_utf16().count();
                if let Some(min_length) = self.min_length {
                    if length < min_length {
                        return Err(ValidationError::TooShort { min_length, length });
                    }
                }
                if let Some(max_length) = self.max_length {
                    if length > max_length {
                        return Err(ValidationError::TooLong { max_length, length });
                    }
                }
            }
            ValidatableValue::Number(number) => {
                if let Some(min) = self.min {
                    if number.is_nan() || *number < min {
                        return Err(ValidationError::BelowMin { min, value: *number });
                    }
                }
                if let Some(max) = self.max {
                    if number.is_nan() || *number > max {
                        return Err(ValidationError::AboveMax { max, value: *number });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Returns whether all constraints set on `input` hold.
pub fn validate(input: &Validatable) -> bool {
    input.check().is_ok()
}

/// First violated constraint of one `Validatable`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    TooShort { min_length: usize, length: usize },
    TooLong { max_length: usize, length: usize },
    BelowMin { min: f64, value: f64 },
    AboveMax { max: f64, value: f64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::TooShort { min_length, length } => {
                write!(f, "length {length} is shorter than minimum {min_length}")
            }
            Self::TooLong { max_length, length } => {
                write!(f, "length {length} is longer than maximum {max_length}")
            }
            Self::BelowMin { min, value } => write!(f, "value {value} is below minimum {min}"),
            Self::AboveMax { max, value } => write!(f, "value {value} is above maximum {max}"),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{validate, Validatable, ValidationError};

    #[test]
    fn required_rejects_whitespace_only_text() {
        assert!(!validate(&Validatable::text("   ").required()));
        assert!(validate(&Validatable::text(" x ").required()));
    }

    #[test]
    fn unconstrained_spec_accepts_empty_text() {
        assert!(validate(&Validatable::text("")));
    }

    #[test]
    fn required_number_is_stringified_first() {
        assert!(validate(&Validatable::number(0.0).required()));
        assert!(validate(&Validatable::number(f64::NAN).required()));
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        assert!(validate(&Validatable::text("éééé").max_length(4)));
        assert!(!validate(&Validatable::text("éééé").min_length(5)));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let err = Validatable::text("🎉🎉🎉").max_length(5).check().unwrap_err();
        assert_eq!(err, ValidationError::TooLong { max_length: 5, length: 6 });
        assert!(validate(&Validatable::text("🎉🎉🎉").min_length(5)));
    }

    #[test]
    fn check_reports_first_violation() {
        let err = Validatable::text("").required().min_length(5).check().unwrap_err();
        assert_eq!(err, ValidationError::Required);

        let err = Validatable::text("hi").required().min_length(5).check().unwrap_err();
        assert_eq!(err, ValidationError::TooShort { min_length: 5, length: 2 });
    }

    #[test]
    fn nan_never_satisfies_a_bound() {
        assert!(!validate(&Validatable::number(f64::NAN).min(1.0)));
        assert!(!validate(&Validatable::number(f64::NAN).max(5.0)));
    }
}
