//! Solo Tic Tac Toe - terminal front-end
//!
//! Renders the engine's state and forwards key presses to it. All game
//! logic lives in the `solo_tictactoe` crate.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::Cli;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use solo_tictactoe::{EngineConfig, Game};
use std::io;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = load_config(&cli)?;
    let game = Game::new(&config);

    info!("Starting Solo Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(game));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "TUI exited with error");
    }
    info!("Shutting down");
    res
}

/// Log to a file so output does not interfere with the TUI.
fn initialize_tracing(path: &std::path::Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip(cli), fields(config_path = ?cli.config))]
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path).context("Failed to load engine config")?,
        None => {
            info!("No config file given, using defaults");
            EngineConfig::default()
        }
    };

    if let Some(seed) = cli.seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(Some(seed));
    }
    if let Some(limit) = cli.session_limit {
        info!(limit, "Overriding session limit");
        config = config.with_session_limit(limit);
    }
    config.validate()?;

    Ok(config)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Control::Quit {
                return Ok(());
            }
        }
    }
}
