use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tui_toybox::config::AppConfig;
use tui_toybox::ui::GameApp;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Draw pieces as plain letters instead of Unicode discs
    #[arg(long)]
    ascii: bool,

    /// Do not capture mouse events
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.ascii {
        config.ui.ascii_pieces = true;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    run_ui(config)
}

fn run_ui(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    if config.ui.mouse {
        execute!(stdout, EnableMouseCapture).context("enabling mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = GameApp::new(config.ui.clone());
    let res = app.run(&mut terminal);

    // Restore terminal even if the app errored
    if config.ui.mouse {
        let _ = execute!(terminal.backend_mut(), DisableMouseCapture);
    }
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game UI")
}
