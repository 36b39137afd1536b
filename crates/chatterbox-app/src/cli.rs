//! CLI argument definitions for the Chatterbox application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Chatterbox — a keyword-matching chat companion for the terminal.
#[derive(Parser, Debug)]
#[command(name = "chatterbox", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Seed for the random source, making replies and typing delays
    /// deterministic.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Path to a TOML response pack replacing the built-in tables.
    #[arg(short = 'r', long = "responses")]
    pub responses: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CHATTERBOX_CONFIG env var > platform
    /// default (~/.chatterbox/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CHATTERBOX_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log filter directive.
    ///
    /// Priority: --log-level flag > RUST_LOG env var > "warn", so the chat
    /// transcript stays readable by default.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".chatterbox").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".chatterbox").join("config.toml");
    }
    PathBuf::from("config.toml")
}
