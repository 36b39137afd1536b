//! Chatterbox application binary - composition root.
//!
//! Ties the workspace crates together into a terminal chat:
//! 1. Parse CLI arguments and initialize tracing
//! 2. Load configuration from TOML
//! 3. Build the response engine (built-in tables or a response pack)
//! 4. Wire a ConversationSession to the terminal surface
//! 5. Run the read-eval loop over stdin

use std::io::Write;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chatterbox_core::{ChatterboxConfig, Theme};
use chatterbox_engine::{ResponseEngine, ResponseTable};
use chatterbox_session::ConversationSession;

mod cli;
mod surface;

use cli::CliArgs;
use surface::TerminalSurface;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. Default to warn so log lines do not interleave with chat.
    tracing_subscriber::fmt()
        .with_env_filter(match args.resolve_log_level() {
            Some(level) => tracing_subscriber::EnvFilter::new(level),
            None => tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        })
        .init();

    tracing::info!("Starting Chatterbox v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let config = ChatterboxConfig::load_or_default(&config_file);
    config.validate()?;

    // Response tables: CLI pack > config pack > built-in.
    let pack_path = args
        .responses
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .or_else(|| config.responses.pack.clone());
    let table = match pack_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)?;
            let table = ResponseTable::from_toml_str(&content)?;
            tracing::info!(path = %path, "Response pack loaded");
            table
        }
        None => ResponseTable::builtin(),
    };
    let engine = ResponseEngine::new(table)?;

    // Session wired to the terminal.
    let surface = TerminalSurface::new(config.bot.name.clone());
    let session = match args.seed {
        Some(seed) => {
            ConversationSession::with_rng(engine, surface, &config, StdRng::seed_from_u64(seed))
        }
        None => ConversationSession::new(engine, surface, &config),
    };

    let mut theme = Theme::default();
    println!(
        "{} is online. Type a message, or /clear, /export, /theme, /quit.",
        session.bot_name()
    );

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let Some(line) = surface::read_line().await else {
            break;
        };
        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                if session.clear().await {
                    println!("History cleared.");
                } else {
                    println!("Clear cancelled.");
                }
            }
            "/export" => {
                if let Err(e) = session.export_to_surface().await {
                    println!("! {}", e);
                }
            }
            "/theme" => {
                theme = theme.toggled();
                println!("Theme set to {}.", theme);
            }
            text => {
                if let Err(e) = session.submit(text).await {
                    println!("! {}", e);
                }
            }
        }
    }

    println!("Goodbye! It was nice chatting with you!");
    Ok(())
}
