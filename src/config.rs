//! Game configuration.
//!
//! Everything has a default matching the classic board; a JSON file may
//! override any subset of fields.
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::level::Level;

pub const CONFIG_ENV_VAR: &str = "MEMORY_MATCH_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.json";

const STANDARD_SYMBOLS: [&str; 8] = ["🌽", "🍅", "🌱", "🚗", "🏭", "🛒", "🏙️", "🌾"];
const EXTENDED_SYMBOLS: [&str; 10] = ["🌽", "🍅", "🌱", "🚗", "🏭", "🛒", "🏙️", "🌾", "💻", "💡"];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleButtonConfig {
    pub width: f64,
    pub height: f64,
    /// Gap between the button and the right edge of the canvas.
    pub margin: f64,
}

impl Default for ToggleButtonConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 30.0,
            margin: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub score_area_height: f64,
    pub reveal_delay_ms: u64,
    pub mismatch_delay_ms: u64,
    pub toggle_button: ToggleButtonConfig,
    pub standard_symbols: Vec<String>,
    pub extended_symbols: Vec<String>,
    pub starting_cards: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            score_area_height: 50.0,
            reveal_delay_ms: 1000,
            mismatch_delay_ms: 1000,
            toggle_button: ToggleButtonConfig::default(),
            standard_symbols: STANDARD_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            extended_symbols: EXTENDED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            starting_cards: Level::Standard.card_count(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads `path` if given, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded game config");
                config
            }
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_symbols("standard_symbols", &self.standard_symbols, Level::Standard)?;
        check_symbols("extended_symbols", &self.extended_symbols, Level::Extended)?;

        let positive = [
            ("canvas_width", self.canvas_width > 0.0),
            ("score_area_height", self.score_area_height > 0.0),
            ("reveal_delay_ms", self.reveal_delay_ms > 0),
            ("mismatch_delay_ms", self.mismatch_delay_ms > 0),
            ("toggle_button.width", self.toggle_button.width > 0.0),
            ("toggle_button.height", self.toggle_button.height > 0.0),
        ];
        for (field, ok) in positive {
            if !ok {
                return Err(ConfigError::NonPositive { field });
            }
        }
        Ok(())
    }

    pub fn symbols_for(&self, level: Level) -> &[String] {
        match level {
            Level::Standard => &self.standard_symbols,
            Level::Extended => &self.extended_symbols,
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }
}

fn check_symbols(field: &'static str, symbols: &[String], level: Level) -> Result<(), ConfigError> {
    let distinct: HashSet<&str> = symbols.iter().map(String::as_str).collect();
    let expected = level.unique_symbols();
    if symbols.len() != expected || distinct.len() != expected {
        return Err(ConfigError::SymbolCount {
            field,
            expected,
            found: distinct.len(),
        });
    }
    Ok(())
}
