//! Characters domain module.
//!
//! This crate contains the character entity, the create form users submit, and
//! the two interchangeable validation strategies (manual checks and
//! declarative field constraints). Pure domain logic: no IO, no HTTP, no
//! storage.

pub mod character;
pub mod form;
pub mod validation;

pub use character::{Character, CharacterDraft};
pub use form::{CharacterCreateForm, Field};
pub use validation::{
    FailureKind, FailureScope, ValidationFailure, ValidationFailures, ValidationStrategy,
};
