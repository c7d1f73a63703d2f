//! Declarative strategy: field rules declared once as `validator` attributes
//! on a projection of the form. The BMI rule spans two fields and stays a
//! hand-written post-check.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::form::{CharacterCreateForm, Field};

use super::{
    AGE_RANGE, EMAIL_PATTERN, FailureKind, HEIGHT_RANGE, NAME_LENGTH, ValidationFailures,
    WEIGHT_RANGE, check_over_weight,
};

/// The form as the constraints see it: a blank name is absent, an absent
/// email is the empty string.
#[derive(Debug, Validate)]
struct DeclaredCharacter {
    #[validate(required, length(min = 2, max = 15))]
    name: Option<String>,
    #[validate(required, range(min = 15, max = 100))]
    age: Option<i32>,
    #[validate(required, range(min = 0, max = 250))]
    height: Option<i32>,
    #[validate(required, range(min = 0, max = 200))]
    weight: Option<i32>,
    #[validate(regex(path = *EMAIL_PATTERN))]
    email: String,
}

impl From<&CharacterCreateForm> for DeclaredCharacter {
    fn from(form: &CharacterCreateForm) -> Self {
        Self {
            name: form.name.clone().filter(|name| !name.trim().is_empty()),
            age: form.age,
            height: form.height,
            weight: form.weight,
            email: form.email.clone().unwrap_or_default(),
        }
    }
}

/// Validate `form` against the declared constraints, then the BMI cap.
pub fn validate(form: &CharacterCreateForm) -> ValidationFailures {
    let mut failures = match DeclaredCharacter::from(form).validate() {
        Ok(()) => ValidationFailures::new(),
        Err(errors) => failures_from(&errors),
    };
    check_over_weight(form, &mut failures);
    failures
}

/// One failure per field, in [`Field`] order. `required` outranks the
/// field's other constraint.
fn failures_from(errors: &ValidationErrors) -> ValidationFailures {
    let by_field = errors.field_errors();
    let mut failures = ValidationFailures::new();
    for field in Field::ALL {
        let Some(field_errors) = by_field.get(field.as_str()) else {
            continue;
        };
        if field_errors.is_empty() {
            continue;
        }
        let kind = if field_errors.iter().any(is_required) {
            FailureKind::Required
        } else {
            declared_kind(field)
        };
        failures.reject_field(field, kind);
    }
    failures
}

fn is_required(error: &ValidationError) -> bool {
    error.code == "required"
}

fn declared_kind(field: Field) -> FailureKind {
    let range = |(min, max): (i32, i32)| FailureKind::Range { min, max };
    match field {
        Field::Name => FailureKind::LengthRange {
            min: NAME_LENGTH.0,
            max: NAME_LENGTH.1,
        },
        Field::Age => range(AGE_RANGE),
        Field::Height => range(HEIGHT_RANGE),
        Field::Weight => range(WEIGHT_RANGE),
        Field::Email => FailureKind::FormatInvalid,
    }
}
