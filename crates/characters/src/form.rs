use serde::{Deserialize, Serialize};

use roster_core::{DomainError, DomainResult};

use crate::character::CharacterDraft;

/// Fields of the character create form, in display/validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Age,
    Height,
    Weight,
    Email,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Age, Field::Height, Field::Weight, Field::Email];

    /// Form parameter name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Email => "email",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated user input for registering a character.
///
/// Every field is optional until validated. The form is never stored; after a
/// successful validation it is converted once into a [`CharacterDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCreateForm {
    pub name: Option<String>,
    pub age: Option<i32>,
    /// Weight in kilograms.
    pub weight: Option<i32>,
    /// Height in centimetres.
    pub height: Option<i32>,
    pub email: Option<String>,
}

impl CharacterCreateForm {
    /// An empty form, as handed to the view when the page is first rendered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convert a validated form into a draft.
    ///
    /// Callers must validate first. A form with missing fields is an invariant
    /// violation here, not a user-facing validation failure.
    pub fn into_draft(self) -> DomainResult<CharacterDraft> {
        fn present<T>(value: Option<T>, field: Field) -> DomainResult<T> {
            value.ok_or_else(|| {
                DomainError::invariant(format!("cannot convert form with missing `{field}`"))
            })
        }

        Ok(CharacterDraft {
            name: present(self.name, Field::Name)?,
            age: present(self.age, Field::Age)?,
            weight: present(self.weight, Field::Weight)?,
            height: present(self.height, Field::Height)?,
            email: present(self.email, Field::Email)?,
        })
    }
}
