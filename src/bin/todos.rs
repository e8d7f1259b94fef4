use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tui_toybox::config::AppConfig;
use tui_toybox::todo::TodoList;
use tui_toybox::ui::TodoApp;

/// Manage a todo list in the terminal.
#[derive(Parser)]
#[command(name = "todos", about = "Manage a todo list in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Start with an empty list instead of the example todos
    #[arg(long)]
    no_seed: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.no_seed {
        config.todo.seed_examples = false;
    }

    let list = if config.todo.seed_examples {
        TodoList::seeded()
    } else {
        TodoList::new()
    };

    run_ui(config, list)
}

fn run_ui(config: AppConfig, list: TodoList) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = TodoApp::new(config.ui, list);
    let res = app.run(&mut terminal);

    // Restore terminal even if the app errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running todo UI")
}
