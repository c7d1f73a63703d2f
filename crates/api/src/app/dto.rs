use serde::{Deserialize, Serialize};

use roster_characters::{Character, CharacterCreateForm, FailureKind, Field, ValidationFailures};
use roster_core::Entity;

// -------------------------
// Request DTOs
// -------------------------

/// Raw `application/x-www-form-urlencoded` body of the create form.
///
/// Everything arrives as text; [`CharacterFormParams::bind`] turns it into a
/// typed [`CharacterCreateForm`]. The raw values are kept to echo them back
/// when the form is re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFormParams {
    pub name: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub email: Option<String>,
}

/// Result of binding: the typed form plus any type-mismatch failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundForm {
    pub form: CharacterCreateForm,
    pub failures: ValidationFailures,
}

impl CharacterFormParams {
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Age => self.age.as_deref(),
            Field::Height => self.height.as_deref(),
            Field::Weight => self.weight.as_deref(),
            Field::Email => self.email.as_deref(),
        }
    }

    /// Bind text parameters onto the typed form.
    ///
    /// Empty numeric text binds as absent. Non-numeric text records a
    /// `TypeMismatch` failure and leaves the field absent, so validation will
    /// additionally report it as required.
    pub fn bind(&self) -> BoundForm {
        let mut failures = ValidationFailures::new();
        let age = bind_number(&mut failures, Field::Age, self.age.as_deref());
        let height = bind_number(&mut failures, Field::Height, self.height.as_deref());
        let weight = bind_number(&mut failures, Field::Weight, self.weight.as_deref());

        BoundForm {
            form: CharacterCreateForm {
                name: self.name.clone(),
                age,
                weight,
                height,
                email: self.email.clone(),
            },
            failures,
        }
    }
}

impl From<&CharacterCreateForm> for CharacterFormParams {
    fn from(form: &CharacterCreateForm) -> Self {
        Self {
            name: form.name.clone(),
            age: form.age.map(|v| v.to_string()),
            weight: form.weight.map(|v| v.to_string()),
            height: form.height.map(|v| v.to_string()),
            email: form.email.clone(),
        }
    }
}

fn bind_number(failures: &mut ValidationFailures, field: Field, raw: Option<&str>) -> Option<i32> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            failures.reject_field(field, FailureKind::TypeMismatch);
            None
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn character_to_json(c: &Character) -> serde_json::Value {
    serde_json::json!({
        "id": c.id().as_u64(),
        "name": c.name(),
        "age": c.age(),
        "height": c.height(),
        "weight": c.weight(),
        "email": c.email(),
        "registered_at": c.registered_at().to_rfc3339(),
    })
}
