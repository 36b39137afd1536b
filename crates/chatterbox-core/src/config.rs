use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ChatterboxError, Result};

/// Top-level configuration for the Chatterbox application.
///
/// Loaded from `~/.chatterbox/config.toml` by default. Each section
/// corresponds to one concern; defaults reproduce the stock bot exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatterboxConfig {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub responses: ResponsesConfig,
}

impl ChatterboxConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ChatterboxConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ChatterboxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.bot.name.trim().is_empty() {
            return Err(ChatterboxError::Config(
                "bot.name must not be empty".to_string(),
            ));
        }
        if self.typing.min_delay_ms >= self.typing.max_delay_ms {
            return Err(ChatterboxError::Config(format!(
                "typing.min_delay_ms ({}) must be below typing.max_delay_ms ({})",
                self.typing.min_delay_ms, self.typing.max_delay_ms
            )));
        }
        Ok(())
    }
}

/// Bot identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Display name used in bot message bubbles and export labels.
    pub name: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "ChatBot".to_string(),
        }
    }
}

/// Simulated typing-delay settings.
///
/// Each accepted turn sleeps for a duration drawn uniformly from
/// `[min_delay_ms, max_delay_ms)` before the bot reply lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Lower bound of the delay window, inclusive.
    pub min_delay_ms: u64,
    /// Upper bound of the delay window, exclusive.
    pub max_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1000,
            max_delay_ms: 3000,
        }
    }
}

/// Response table source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsesConfig {
    /// Optional path to a TOML response pack replacing the built-in tables.
    pub pack: Option<String>,
}
