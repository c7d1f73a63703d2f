//! Character storage boundary.
//!
//! The store owns identity: it hands out sequential ids and holds characters
//! keyed by id. Only an in-process implementation exists; state is lost on
//! restart.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryCharacterStore;
pub use r#trait::CharacterStore;
