//! Infrastructure layer: storage adapters for the characters domain.

pub mod character_store;

pub use character_store::{CharacterStore, InMemoryCharacterStore};
