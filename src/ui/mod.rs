//! Terminal UI: a playable Connect Four view and a todo list manager,
//! each driven by its own event-loop app.

mod game_app;
mod game_view;
mod todo_app;
mod todo_view;

pub use game_app::GameApp;
pub use todo_app::TodoApp;

/// UI settings shared by both apps, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to block waiting for input events, in milliseconds.
    pub tick_rate_ms: u64,
    /// Capture mouse events so pieces can be dropped by clicking the board.
    pub mouse: bool,
    /// Draw pieces as plain letters instead of Unicode discs.
    pub ascii_pieces: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 100,
            mouse: true,
            ascii_pieces: false,
        }
    }
}
