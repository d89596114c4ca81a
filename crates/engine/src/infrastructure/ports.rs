//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character storage (host document database, JSON snapshots)
//! - The optional autocomplete registry bonus keys are published to

use async_trait::async_trait;
use scoped_bonuses_domain::{Actor, ActorId};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(ActorId),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn storage(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Storage(format!("{}: {}", context, err))
    }
}

// =============================================================================
// Database Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// IDs of every player character (`type: "character"`).
    async fn list_player_character_ids(&self) -> Result<Vec<ActorId>, RepoError>;
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError>;
    async fn save(&self, actor: &Actor) -> Result<(), RepoError>;
}

// =============================================================================
// Autocomplete Port
// =============================================================================

/// Human-readable label and description for one autocomplete field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLocalization {
    pub name: String,
    pub description: String,
}

/// External registry of effect change keys offered in effect editors.
#[cfg_attr(test, mockall::automock)]
pub trait AutocompleteRegistry: Send + Sync {
    /// Whether the registry is installed and enabled.
    fn is_active(&self) -> bool;
    fn set_localization(&self, key: &str, entry: FieldLocalization);
    fn add_auto_fields(&self, keys: &[String]);
}
