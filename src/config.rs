// Configuration module for reading Search.toml
// Holds the tunable parameters of the search engine; the evaluator and the
// candidate move set are code, injected at engine construction instead.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub trace: TraceConfig,
}

/// Search depth and pruning parameters
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Number of simulated rounds explored before the evaluator is consulted.
    /// Zero requests immediate evaluation of the root.
    pub max_depth: u8,
}

/// Decision trace configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TraceConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Search.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Search.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Search.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Search.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig { max_depth: 4 },
            trace: TraceConfig {
                enabled: false,
                log_file_path: "arena_search_decisions.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Search.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
