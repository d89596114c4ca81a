//! Engine configuration from the environment.

use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "characters.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON array of actors to refresh
    pub data_path: PathBuf,
    /// Write refreshed actors back to `data_path`
    pub persist: bool,
    /// Publish bonus keys to the in-process autocomplete registry
    pub register_autocomplete: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            persist: false,
            register_autocomplete: true,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `SCOPED_BONUSES_DATA`: snapshot path (default `characters.json`)
    /// - `SCOPED_BONUSES_PERSIST`: write results back (default `false`)
    /// - `SCOPED_BONUSES_AUTOCOMPLETE`: register bonus keys (default `true`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup("SCOPED_BONUSES_DATA")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            persist: lookup("SCOPED_BONUSES_PERSIST")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.persist),
            register_autocomplete: lookup("SCOPED_BONUSES_AUTOCOMPLETE")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.register_autocomplete),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), EngineConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("SCOPED_BONUSES_DATA", "/srv/party.json"),
            ("SCOPED_BONUSES_PERSIST", "yes"),
            ("SCOPED_BONUSES_AUTOCOMPLETE", "0"),
        ]);
        assert_eq!(config.data_path, PathBuf::from("/srv/party.json"));
        assert!(config.persist);
        assert!(!config.register_autocomplete);
    }

    #[test]
    fn unparseable_flags_fall_back_to_defaults() {
        let config = config_from(&[
            ("SCOPED_BONUSES_DATA", "  "),
            ("SCOPED_BONUSES_PERSIST", "sometimes"),
        ]);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(!config.persist);
    }
}
