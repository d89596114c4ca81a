//! Scoped bonuses engine - Main entry point.
//!
//! Loads a character snapshot, runs the startup pass and prints the
//! resulting spellcasting numbers as JSON.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoped_bonuses_engine::infrastructure::{
    autocomplete::InMemoryAutocompleteRegistry, config::EngineConfig,
    json_store::JsonCharacterRepo, ports::AutocompleteRegistry,
};
use scoped_bonuses_engine::use_cases::CharacterReport;
use scoped_bonuses_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoped_bonuses_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();
    tracing::info!(
        data = %config.data_path.display(),
        persist = config.persist,
        "Starting scoped bonuses engine"
    );

    let characters = Arc::new(
        JsonCharacterRepo::load(&config.data_path, config.persist)
            .await
            .with_context(|| format!("loading {}", config.data_path.display()))?,
    );
    let autocomplete: Option<Arc<dyn AutocompleteRegistry>> = config
        .register_autocomplete
        .then(|| Arc::new(InMemoryAutocompleteRegistry::new(true)) as Arc<dyn AutocompleteRegistry>);

    let mut app = App::new(characters.clone(), autocomplete);
    let startup = app.startup().await?;
    tracing::info!(
        keys = startup.registered_keys,
        refreshed = startup.refresh.refreshed.len(),
        failed = startup.refresh.failed.len(),
        "Startup complete"
    );

    let reports: Vec<CharacterReport> = characters
        .all()
        .await
        .iter()
        .filter(|actor| actor.is_player_character())
        .map(CharacterReport::from_actor)
        .collect();
    println!("{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
