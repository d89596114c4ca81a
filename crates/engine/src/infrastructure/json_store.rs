//! JSON snapshot-backed character storage.
//!
//! Loads every actor from a JSON array file into memory. Saves update the
//! in-memory copy and, when persistence is enabled, rewrite the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use scoped_bonuses_domain::{Actor, ActorId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

struct Snapshot {
    /// Actor IDs in file order
    order: Vec<ActorId>,
    actors: HashMap<ActorId, Actor>,
}

/// Character repository over a snapshot file.
pub struct JsonCharacterRepo {
    path: PathBuf,
    persist: bool,
    snapshot: RwLock<Snapshot>,
}

impl JsonCharacterRepo {
    /// Load actors from `path`.
    pub async fn load(path: impl AsRef<Path>, persist: bool) -> Result<Self, RepoError> {
        let path = path.as_ref().to_path_buf();
        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RepoError::storage(&path.display().to_string(), e))?;
        let actors: Vec<Actor> =
            serde_json::from_str(&json).map_err(|e| RepoError::Serialization(e.to_string()))?;

        tracing::debug!(path = %path.display(), count = actors.len(), "Loaded actor snapshot");
        Ok(Self::from_actors(path, persist, actors))
    }

    /// Build a repository around already-loaded actors.
    pub fn from_actors(path: impl Into<PathBuf>, persist: bool, actors: Vec<Actor>) -> Self {
        let order = actors.iter().map(|actor| actor.id).collect();
        let actors = actors.into_iter().map(|actor| (actor.id, actor)).collect();
        Self {
            path: path.into(),
            persist,
            snapshot: RwLock::new(Snapshot { order, actors }),
        }
    }

    /// All actors in file order.
    pub async fn all(&self) -> Vec<Actor> {
        let guard = self.snapshot.read().await;
        guard
            .order
            .iter()
            .filter_map(|id| guard.actors.get(id).cloned())
            .collect()
    }

    async fn write_file(&self) -> Result<(), RepoError> {
        let actors = self.all().await;
        let json = serde_json::to_string_pretty(&actors)
            .map_err(|e| RepoError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| RepoError::storage(&self.path.display().to_string(), e))
    }
}

#[async_trait]
impl CharacterRepo for JsonCharacterRepo {
    async fn list_player_character_ids(&self) -> Result<Vec<ActorId>, RepoError> {
        let guard = self.snapshot.read().await;
        Ok(guard
            .order
            .iter()
            .filter(|id| {
                guard
                    .actors
                    .get(*id)
                    .is_some_and(Actor::is_player_character)
            })
            .copied()
            .collect())
    }

    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError> {
        Ok(self.snapshot.read().await.actors.get(&id).cloned())
    }

    async fn save(&self, actor: &Actor) -> Result<(), RepoError> {
        {
            let mut guard = self.snapshot.write().await;
            if !guard.actors.contains_key(&actor.id) {
                guard.order.push(actor.id);
            }
            guard.actors.insert(actor.id, actor.clone());
        }

        if self.persist {
            self.write_file().await?;
        }
        Ok(())
    }
}
