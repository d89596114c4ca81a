//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{AutocompleteRegistry, CharacterRepo};
use crate::use_cases::{
    register_autocomplete_keys, DerivedDataPipeline, RefreshCharacters, RefreshError,
    RefreshSummary, ScopedBonusHooks,
};

/// Main application state.
///
/// Owns the preparation pipeline (and through it the scoped bonus hooks and
/// their log cache) for the lifetime of the process.
pub struct App {
    pub characters: Arc<dyn CharacterRepo>,
    pub autocomplete: Option<Arc<dyn AutocompleteRegistry>>,
    pub pipeline: DerivedDataPipeline,
    pub use_cases: UseCases,
}

/// Container for use cases.
pub struct UseCases {
    pub refresh: Arc<RefreshCharacters>,
}

/// What happened during startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub registered_keys: usize,
    pub refresh: RefreshSummary,
}

impl App {
    /// Create a new App with D&D 5e rules and scoped bonus hooks installed.
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        autocomplete: Option<Arc<dyn AutocompleteRegistry>>,
    ) -> Self {
        let pipeline = DerivedDataPipeline::dnd5e().with_hooks(ScopedBonusHooks::new());
        let refresh = Arc::new(RefreshCharacters::new(characters.clone()));

        Self {
            characters,
            autocomplete,
            pipeline,
            use_cases: UseCases { refresh },
        }
    }

    /// Init phase registers autocomplete keys; ready phase refreshes every
    /// player character.
    pub async fn startup(&mut self) -> Result<StartupReport, RefreshError> {
        tracing::info!("Initializing scoped bonuses");
        let registered_keys = register_autocomplete_keys(self.autocomplete.as_deref());

        let refresh = self.use_cases.refresh.execute(&mut self.pipeline).await?;

        Ok(StartupReport {
            registered_keys,
            refresh,
        })
    }
}
