//! Manual strategy: each rule spelled out as an explicit conditional.

use crate::form::{CharacterCreateForm, Field};

use super::{
    AGE_RANGE, EMAIL_PATTERN, FailureKind, HEIGHT_RANGE, NAME_LENGTH, ValidationFailures,
    WEIGHT_RANGE, check_over_weight,
};

/// Validate `form` with hand-written checks.
pub fn validate(form: &CharacterCreateForm) -> ValidationFailures {
    let mut failures = ValidationFailures::new();

    // Name: present, not blank, 2..=15 characters.
    match form.name.as_deref() {
        None => failures.reject_field(Field::Name, FailureKind::Required),
        Some(name) if name.trim().is_empty() => {
            failures.reject_field(Field::Name, FailureKind::Required)
        }
        Some(name) => {
            let (min, max) = NAME_LENGTH;
            let len = name.chars().count();
            if len < min || len > max {
                failures.reject_field(Field::Name, FailureKind::LengthRange { min, max });
            }
        }
    }

    check_number(&mut failures, Field::Age, form.age, AGE_RANGE);
    check_number(&mut failures, Field::Height, form.height, HEIGHT_RANGE);
    check_number(&mut failures, Field::Weight, form.weight, WEIGHT_RANGE);

    // Absent email is checked as the empty string, which never matches.
    let email = form.email.as_deref().unwrap_or_default();
    if !EMAIL_PATTERN.is_match(email) {
        failures.reject_field(Field::Email, FailureKind::FormatInvalid);
    }

    check_over_weight(form, &mut failures);

    failures
}

fn check_number(
    failures: &mut ValidationFailures,
    field: Field,
    value: Option<i32>,
    (min, max): (i32, i32),
) {
    match value {
        None => failures.reject_field(field, FailureKind::Required),
        Some(v) if v < min || v > max => {
            failures.reject_field(field, FailureKind::Range { min, max })
        }
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FailureScope, ValidationFailure};

    fn valid_form() -> CharacterCreateForm {
        CharacterCreateForm {
            name: Some("Al".to_string()),
            age: Some(30),
            weight: Some(65),
            height: Some(170),
            email: Some("al@example.com".to_string()),
        }
    }

    #[test]
    fn valid_form_has_no_failures() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_field_as_required_or_malformed() {
        let failures = validate(&CharacterCreateForm::empty());

        assert_eq!(
            failures.into_vec(),
            vec![
                ValidationFailure::field(Field::Name, FailureKind::Required),
                ValidationFailure::field(Field::Age, FailureKind::Required),
                ValidationFailure::field(Field::Height, FailureKind::Required),
                ValidationFailure::field(Field::Weight, FailureKind::Required),
                ValidationFailure::field(Field::Email, FailureKind::FormatInvalid),
            ]
        );
    }

    #[test]
    fn blank_name_is_required_not_length() {
        let form = CharacterCreateForm {
            name: Some("   ".to_string()),
            ..valid_form()
        };
        let failures = validate(&form);
        let name: Vec<_> = failures.for_field(Field::Name).map(|f| f.kind).collect();
        assert_eq!(name, vec![FailureKind::Required]);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let form = CharacterCreateForm {
            name: Some("\u{d55c}\u{ad6d}".to_string()),
            ..valid_form()
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn out_of_range_submission_reports_five_field_failures() {
        let form = CharacterCreateForm {
            name: Some("A".to_string()),
            age: Some(200),
            height: Some(300),
            weight: Some(-5),
            email: Some("bad".to_string()),
        };

        let failures = validate(&form);

        assert_eq!(
            failures.into_vec(),
            vec![
                ValidationFailure::field(Field::Name, FailureKind::LengthRange { min: 2, max: 15 }),
                ValidationFailure::field(Field::Age, FailureKind::Range { min: 15, max: 100 }),
                ValidationFailure::field(Field::Height, FailureKind::Range { min: 0, max: 250 }),
                ValidationFailure::field(Field::Weight, FailureKind::Range { min: 0, max: 200 }),
                ValidationFailure::field(Field::Email, FailureKind::FormatInvalid),
            ]
        );
    }

    #[test]
    fn over_weight_is_global_and_runs_alongside_range_failures() {
        let form = CharacterCreateForm {
            height: Some(100),
            weight: Some(201),
            ..valid_form()
        };

        let failures = validate(&form);

        assert!(failures.has_field_error(Field::Weight));
        let global: Vec<_> = failures.global().collect();
        assert_eq!(global.len(), 1);
        assert_eq!(global[0].scope, FailureScope::Global);
        assert_eq!(global[0].kind, FailureKind::OverWeight);
    }

    #[test]
    fn bmi_boundary_cases() {
        let heavy = CharacterCreateForm {
            height: Some(180),
            weight: Some(82),
            ..valid_form()
        };
        let fine = CharacterCreateForm {
            height: Some(180),
            weight: Some(80),
            ..valid_form()
        };

        assert_eq!(validate(&heavy).global().count(), 1);
        assert!(validate(&fine).is_empty());
    }
}
