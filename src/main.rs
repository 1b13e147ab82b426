//! Folio - themeable terminal portfolio card
//!
//! Renders a single-page portfolio in the terminal: a pointer-reactive
//! decorative background, themed content cards, and a runtime theme
//! switcher with crossfade.

// Module declarations
mod config;
mod constants;
mod content;
mod models;
mod motion;
mod tui;

use anyhow::Result;
use clap::Parser;
use constants::{APP_BINARY_NAME, APP_NAME};
use tui::ThemeId;

/// Folio - themeable terminal portfolio card
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start with a specific theme instead of the configured one
    #[arg(short, long, value_enum)]
    theme: Option<ThemeId>,

    /// Disable mouse capture (no pointer-reactive background)
    #[arg(long)]
    no_mouse: bool,

    /// Delete the saved configuration and start fresh
    #[arg(long)]
    reset_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.reset_config {
        config::Config::reset()?;
        println!("{APP_NAME}: configuration reset.");
        println!("Run `{APP_BINARY_NAME}` to start with defaults.");
        return Ok(());
    }

    let mut config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to load config, using defaults: {e}");
            config::Config::new()
        }
    };
    if let Some(theme) = cli.theme {
        config.ui.theme = Some(theme);
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    let mut terminal = tui::setup_terminal(config.ui.mouse)?;
    let mut app_state = tui::AppState::new(config);

    let result = tui::run_tui(&mut app_state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result?;

    Ok(())
}
