//! Character form validation.
//!
//! Two strategies produce the same [`ValidationFailures`] for any form:
//! - [`manual`]: every rule written out as explicit conditionals.
//! - [`declarative`]: per-field `validator` attributes, followed by the
//!   hand-written cross-field BMI check.
//!
//! Failures are data, not errors: every applicable rule runs and all failures
//! are collected, at most one per field plus the global BMI failure.

use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use roster_core::DomainError;

use crate::form::{CharacterCreateForm, Field};

pub mod declarative;
pub mod manual;

/// Allowed name length, in characters.
pub const NAME_LENGTH: (usize, usize) = (2, 15);
/// Allowed age, in years.
pub const AGE_RANGE: (i32, i32) = (15, 100);
/// Allowed height, in centimetres.
pub const HEIGHT_RANGE: (i32, i32) = (0, 250);
/// Allowed weight, in kilograms.
pub const WEIGHT_RANGE: (i32, i32) = (0, 200);
/// Highest accepted weight / (height in metres)².
pub const BMI_CAP: f64 = 25.0;

/// Lowercase-only email shape. `[[:word:]]` is the ASCII `\w`.
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[_a-z0-9-]+(\.[_a-z0-9-]+)*@([[:word:]]+\.)+[[:word:]]+$")
        .expect("email pattern is a valid regex")
});

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// Value absent (or blank, for text).
    Required,
    /// Text length outside `[min, max]` characters.
    LengthRange { min: usize, max: usize },
    /// Number outside `[min, max]`.
    Range { min: i32, max: i32 },
    /// Text does not match the expected format.
    FormatInvalid,
    /// Submitted text could not be bound to the field's type.
    TypeMismatch,
    /// BMI above [`BMI_CAP`].
    OverWeight,
}

impl FailureKind {
    /// Stable message key, suitable for looking up localized text.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::Required => "required",
            FailureKind::LengthRange { .. } => "length",
            FailureKind::Range { .. } => "range",
            FailureKind::FormatInvalid => "format",
            FailureKind::TypeMismatch => "typeMismatch",
            FailureKind::OverWeight => "overWeight",
        }
    }

    /// Default English message with the bound arguments filled in.
    pub fn default_message(&self) -> String {
        match self {
            FailureKind::Required => "is required".to_string(),
            FailureKind::LengthRange { min, max } => {
                format!("must be between {min} and {max} characters")
            }
            FailureKind::Range { min, max } => format!("must be between {min} and {max}"),
            FailureKind::FormatInvalid => "has an invalid format".to_string(),
            FailureKind::TypeMismatch => "must be a whole number".to_string(),
            FailureKind::OverWeight => {
                format!("weight / (height in m)\u{b2} must not exceed {BMI_CAP}")
            }
        }
    }
}

/// Where a failure belongs: a single field or the form as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureScope {
    Field(Field),
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub scope: FailureScope,
    pub kind: FailureKind,
}

impl ValidationFailure {
    pub fn field(field: Field, kind: FailureKind) -> Self {
        Self {
            scope: FailureScope::Field(field),
            kind,
        }
    }

    pub fn global(kind: FailureKind) -> Self {
        Self {
            scope: FailureScope::Global,
            kind,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.default_message()
    }
}

/// Ordered collection of failures for one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationFailures(Vec<ValidationFailure>);

impl ValidationFailures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: ValidationFailure) {
        self.0.push(failure);
    }

    pub fn reject_field(&mut self, field: Field, kind: FailureKind) {
        self.push(ValidationFailure::field(field, kind));
    }

    pub fn reject(&mut self, kind: FailureKind) {
        self.push(ValidationFailure::global(kind));
    }

    pub fn extend(&mut self, other: ValidationFailures) {
        self.0.extend(other.0);
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.0.iter()
    }

    /// Failures attributed to `field`, in the order they were recorded.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationFailure> {
        self.0
            .iter()
            .filter(move |f| f.scope == FailureScope::Field(field))
    }

    pub fn has_field_error(&self, field: Field) -> bool {
        self.for_field(field).next().is_some()
    }

    pub fn global(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.0.iter().filter(|f| f.scope == FailureScope::Global)
    }

    /// Fields with at least one failure, in [`Field`] order.
    pub fn failed_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.has_field_error(*f))
            .collect()
    }

    pub fn into_vec(self) -> Vec<ValidationFailure> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a ValidationFailure;
    type IntoIter = core::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Selects which validation code path checks a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStrategy {
    #[default]
    Manual,
    Declarative,
}

impl ValidationStrategy {
    pub fn validate(self, form: &CharacterCreateForm) -> ValidationFailures {
        match self {
            ValidationStrategy::Manual => manual::validate(form),
            ValidationStrategy::Declarative => declarative::validate(form),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStrategy::Manual => "manual",
            ValidationStrategy::Declarative => "declarative",
        }
    }
}

impl core::fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(ValidationStrategy::Manual),
            "declarative" => Ok(ValidationStrategy::Declarative),
            other => Err(DomainError::validation(format!(
                "unknown validation strategy `{other}` (expected manual or declarative)"
            ))),
        }
    }
}

/// weight (kg) / (height in metres)².
pub fn body_mass_index(height_cm: i32, weight_kg: i32) -> f64 {
    let height_m = f64::from(height_cm) / 100.0;
    f64::from(weight_kg) / (height_m * height_m)
}

/// Cross-field BMI rule shared by both strategies.
///
/// Runs whenever both values are present, even if either failed its own range
/// check. Follows IEEE arithmetic: height 0 with a positive weight is over the
/// cap, 0/0 is not.
pub(crate) fn check_over_weight(form: &CharacterCreateForm, failures: &mut ValidationFailures) {
    if let (Some(height), Some(weight)) = (form.height, form.weight) {
        if body_mass_index(height, weight) > BMI_CAP {
            failures.reject(FailureKind::OverWeight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_accepts_lowercase_dotted_addresses() {
        assert!(EMAIL_PATTERN.is_match("a.b-c@sub.domain.com"));
        assert!(EMAIL_PATTERN.is_match("al@example.com"));
        assert!(EMAIL_PATTERN.is_match("under_score@x.io"));
    }

    #[test]
    fn email_pattern_rejects_malformed_and_uppercase_local_parts() {
        assert!(!EMAIL_PATTERN.is_match("not-an-email"));
        assert!(!EMAIL_PATTERN.is_match("UPPER@CASE.COM"));
        assert!(!EMAIL_PATTERN.is_match("a@nodot"));
        assert!(!EMAIL_PATTERN.is_match(""));
        assert!(!EMAIL_PATTERN.is_match("a..b@example.com"));
        assert!(!EMAIL_PATTERN.is_match("a@\u{e9}xample.com"));
    }

    #[test]
    fn bmi_matches_known_values() {
        assert!((body_mass_index(180, 82) - 25.308).abs() < 0.001);
        assert!((body_mass_index(180, 80) - 24.691).abs() < 0.001);
        assert!(body_mass_index(0, 10).is_infinite());
        assert!(body_mass_index(0, 0).is_nan());
    }

    #[test]
    fn over_weight_only_when_both_present() {
        let mut failures = ValidationFailures::new();
        check_over_weight(
            &CharacterCreateForm {
                height: Some(180),
                ..CharacterCreateForm::default()
            },
            &mut failures,
        );
        assert!(failures.is_empty());

        check_over_weight(
            &CharacterCreateForm {
                height: Some(180),
                weight: Some(82),
                ..CharacterCreateForm::default()
            },
            &mut failures,
        );
        assert_eq!(
            failures.into_vec(),
            vec![ValidationFailure::global(FailureKind::OverWeight)]
        );
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("Manual".parse::<ValidationStrategy>().unwrap(), ValidationStrategy::Manual);
        assert_eq!(
            " declarative ".parse::<ValidationStrategy>().unwrap(),
            ValidationStrategy::Declarative
        );
        assert!(matches!(
            "annotations".parse::<ValidationStrategy>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn failures_split_by_scope() {
        let mut failures = ValidationFailures::new();
        failures.reject_field(Field::Age, FailureKind::Range { min: 15, max: 100 });
        failures.reject_field(Field::Name, FailureKind::Required);
        failures.reject(FailureKind::OverWeight);

        assert_eq!(failures.len(), 3);
        assert_eq!(failures.failed_fields(), vec![Field::Name, Field::Age]);
        assert_eq!(failures.global().count(), 1);
        assert_eq!(
            failures.for_field(Field::Age).next().map(|f| f.code()),
            Some("range")
        );
        assert!(!failures.has_field_error(Field::Email));
    }

    #[test]
    fn messages_include_bounds() {
        assert_eq!(
            FailureKind::Range { min: 0, max: 250 }.default_message(),
            "must be between 0 and 250"
        );
        assert_eq!(
            FailureKind::LengthRange { min: 2, max: 15 }.default_message(),
            "must be between 2 and 15 characters"
        );
    }
}
