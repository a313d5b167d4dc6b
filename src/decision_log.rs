// Decision trace logging
//
// Writes one JSON line per decision so games can be reconstructed and
// analyzed offline. Logging failures are reported through the log facade
// and never disturb the decision path.

use log::error;
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;

use crate::types::PlayerId;

/// Represents a single decision log entry
#[derive(Debug, Serialize)]
struct DecisionLogEntry {
    player: PlayerId,
    chosen_move: String,
    score: f64,
    max_depth: u8,
    reached_end: bool,
    cache_hit: bool,
    timestamp: String,
}

/// Shared decision logger state
#[derive(Clone)]
pub struct DecisionLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DecisionLogger {
    /// Creates a new decision logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Decision trace enabled: {}", log_file_path);
                DecisionLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create decision log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled decision logger (no-op)
    pub fn disabled() -> Self {
        DecisionLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    /// Appends one decision to the trace file
    pub fn log_decision(
        &self,
        player: PlayerId,
        chosen_move: String,
        score: f64,
        max_depth: u8,
        reached_end: bool,
        cache_hit: bool,
    ) {
        if !self.enabled {
            return;
        }

        let mut file_guard = self.file.lock();
        if let Some(file) = file_guard.as_mut() {
            let entry = DecisionLogEntry {
                player,
                chosen_move,
                score,
                max_depth,
                reached_end,
                cache_hit,
                timestamp: chrono::Utc::now().to_rfc3339(),
            };

            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    if let Err(e) = writeln!(file, "{}", json_line) {
                        error!("Failed to write decision log entry: {}", e);
                    } else if let Err(e) = file.flush() {
                        error!("Failed to flush decision log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize decision log entry: {}", e);
                }
            }
        }
    }
}
