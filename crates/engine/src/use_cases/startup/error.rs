//! Startup refresh errors.

use crate::infrastructure::ports::RepoError;

/// Errors that abort a refresh pass. Failures on a single character are
/// counted in the summary instead.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Failed to list player characters: {0}")]
    ListCharacters(#[source] RepoError),
}
