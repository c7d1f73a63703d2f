use std::sync::Arc;

use thiserror::Error;

use roster_characters::{Character, ValidationFailures, ValidationStrategy};
use roster_core::{CharacterId, DomainError};
use roster_infra::{CharacterStore, InMemoryCharacterStore};

use crate::app::dto::BoundForm;

/// Why a registration did not produce a stored character.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The submission failed binding or validation; re-render the form.
    #[error("registration rejected by {strategy} validation with {} failure(s)", .failures.len())]
    Rejected {
        strategy: ValidationStrategy,
        failures: ValidationFailures,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Shared application services, constructed once and handed to handlers.
pub struct AppServices {
    store: Arc<dyn CharacterStore>,
    default_strategy: ValidationStrategy,
}

impl AppServices {
    pub fn new(store: Arc<dyn CharacterStore>, default_strategy: ValidationStrategy) -> Self {
        Self {
            store,
            default_strategy,
        }
    }

    /// In-memory wiring (the only store there is).
    pub fn in_memory(default_strategy: ValidationStrategy) -> Self {
        Self::new(Arc::new(InMemoryCharacterStore::new()), default_strategy)
    }

    pub fn default_strategy(&self) -> ValidationStrategy {
        self.default_strategy
    }

    /// Register with the configured default strategy.
    pub fn register_with_default(&self, bound: BoundForm) -> Result<Character, RegistrationError> {
        self.register_character(self.default_strategy, bound)
    }

    /// Validate a bound submission with `strategy` and store it if it passes.
    pub fn register_character(
        &self,
        strategy: ValidationStrategy,
        bound: BoundForm,
    ) -> Result<Character, RegistrationError> {
        let BoundForm { form, mut failures } = bound;
        failures.extend(strategy.validate(&form));

        if failures.has_errors() {
            tracing::debug!(
                %strategy,
                failures = failures.len(),
                "character registration rejected"
            );
            return Err(RegistrationError::Rejected { strategy, failures });
        }

        let draft = form.into_draft()?;
        self.store.insert(Some(draft)).ok_or_else(|| {
            RegistrationError::Domain(DomainError::invariant(
                "store ignored a validated character",
            ))
        })
    }

    pub fn characters_list(&self) -> Vec<Character> {
        self.store.list()
    }

    pub fn characters_get(&self, id: CharacterId) -> Option<Character> {
        self.store.get(id)
    }
}
