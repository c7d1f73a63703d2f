use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::{CharacterId, Entity};

/// Validated character data that has not been stored yet.
///
/// Produced by [`crate::CharacterCreateForm::into_draft`] once validation has
/// passed; the store turns it into a [`Character`] by assigning an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: String,
    pub age: i32,
    pub weight: i32,
    pub height: i32,
    pub email: String,
}

impl CharacterDraft {
    /// Attach the store-assigned identity.
    pub fn into_character(self, id: CharacterId, registered_at: DateTime<Utc>) -> Character {
        Character {
            id,
            name: self.name,
            age: self.age,
            weight: self.weight,
            height: self.height,
            email: self.email,
            registered_at,
        }
    }
}

/// Entity: a stored, validated character. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId,
    name: String,
    age: i32,
    weight: i32,
    height: i32,
    email: String,
    registered_at: DateTime<Utc>,
}

impl Character {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Height in centimetres.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl Entity for Character {
    type Id = CharacterId;

    fn id(&self) -> CharacterId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_keeps_fields_and_takes_assigned_id() {
        let draft = CharacterDraft {
            name: "Al".to_string(),
            age: 30,
            weight: 65,
            height: 170,
            email: "al@example.com".to_string(),
        };
        let now = Utc::now();

        let character = draft.into_character(CharacterId::from_u64(7), now);

        assert_eq!(character.id(), CharacterId::from_u64(7));
        assert_eq!(character.name(), "Al");
        assert_eq!(character.age(), 30);
        assert_eq!(character.weight(), 65);
        assert_eq!(character.height(), 170);
        assert_eq!(character.email(), "al@example.com");
        assert_eq!(character.registered_at(), now);
    }
}
