//! Startup use cases.
//!
//! Once the host is ready, every player character is re-prepared so derived
//! values already include scoped bonuses.

mod error;

pub use error::RefreshError;

use std::sync::Arc;

use scoped_bonuses_domain::ActorId;

use crate::infrastructure::ports::{CharacterRepo, RepoError};
use crate::use_cases::preparation::DerivedDataPipeline;

/// Outcome of a refresh pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub refreshed: Vec<ActorId>,
    pub failed: Vec<ActorId>,
}

impl RefreshSummary {
    pub fn total(&self) -> usize {
        self.refreshed.len() + self.failed.len()
    }
}

/// Re-prepare every player character in the repository.
pub struct RefreshCharacters {
    repo: Arc<dyn CharacterRepo>,
}

impl RefreshCharacters {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    /// Load, prepare and save each player character in turn.
    ///
    /// A character that fails to load or save is logged and skipped; only a
    /// failure to list characters aborts the pass.
    pub async fn execute(
        &self,
        pipeline: &mut DerivedDataPipeline,
    ) -> Result<RefreshSummary, RefreshError> {
        let ids = self
            .repo
            .list_player_character_ids()
            .await
            .map_err(RefreshError::ListCharacters)?;

        tracing::info!(count = ids.len(), "Refreshing player characters");

        let mut summary = RefreshSummary::default();
        for id in ids {
            match self.refresh_one(id, pipeline).await {
                Ok(()) => summary.refreshed.push(id),
                Err(e) => {
                    tracing::warn!(actor = %id, error = %e, "Failed to refresh character");
                    summary.failed.push(id);
                }
            }
        }

        tracing::info!(
            refreshed = summary.refreshed.len(),
            failed = summary.failed.len(),
            "Character refresh complete"
        );
        Ok(summary)
    }

    async fn refresh_one(
        &self,
        id: ActorId,
        pipeline: &mut DerivedDataPipeline,
    ) -> Result<(), RepoError> {
        let mut actor = self.repo.get(id).await?.ok_or(RepoError::NotFound(id))?;
        pipeline.prepare_actor(&mut actor);
        self.repo.save(&actor).await
    }
}
