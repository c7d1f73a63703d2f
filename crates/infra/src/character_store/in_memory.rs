use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use roster_characters::{Character, CharacterDraft};
use roster_core::{CharacterId, Entity};

use super::r#trait::CharacterStore;

#[derive(Debug)]
struct State {
    next_id: CharacterId,
    characters: BTreeMap<CharacterId, Character>,
}

/// In-memory character store.
///
/// A single write lock covers "read next id, increment, insert".
#[derive(Debug)]
pub struct InMemoryCharacterStore {
    inner: RwLock<State>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(State {
                next_id: CharacterId::FIRST,
                characters: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .characters
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStore for InMemoryCharacterStore {
    fn insert(&self, draft: Option<CharacterDraft>) -> Option<Character> {
        let draft = draft?;

        // Nothing below can panic, so a poisoned lock still guards consistent state.
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = state.next_id;
        state.next_id = id.next();

        let character = draft.into_character(id, Utc::now());
        state.characters.insert(id, character.clone());
        let stored = state.characters.len();
        drop(state);

        tracing::info!(
            character_id = %character.id(),
            name = character.name(),
            stored,
            "character stored"
        );
        Some(character)
    }

    fn get(&self, id: CharacterId) -> Option<Character> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        state.characters.get(&id).cloned()
    }

    fn list(&self) -> Vec<Character> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        state.characters.values().cloned().collect()
    }
}
