use std::sync::Arc;

use roster_characters::{Character, CharacterDraft};
use roster_core::CharacterId;

/// Store for validated characters.
///
/// Implementations must make id assignment and insertion one atomic step:
/// concurrent inserts never share an id and never overwrite each other.
pub trait CharacterStore: Send + Sync {
    /// Assign the next id to `draft` and store it.
    ///
    /// `None` is tolerated and ignored: nothing is stored, no id is consumed,
    /// and `None` is returned.
    fn insert(&self, draft: Option<CharacterDraft>) -> Option<Character>;

    fn get(&self, id: CharacterId) -> Option<Character>;

    /// Snapshot of every stored character, ascending by id.
    fn list(&self) -> Vec<Character>;
}

impl<S> CharacterStore for Arc<S>
where
    S: CharacterStore + ?Sized,
{
    fn insert(&self, draft: Option<CharacterDraft>) -> Option<Character> {
        (**self).insert(draft)
    }

    fn get(&self, id: CharacterId) -> Option<Character> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Character> {
        (**self).list()
    }
}
