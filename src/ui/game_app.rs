use crate::game::{GameState, MoveError, COLS};
use crate::ui::UiConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

pub struct GameApp {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Where the board was drawn on the last frame, for mapping clicks.
    board_area: Option<Rect>,
    config: UiConfig,
}

impl GameApp {
    pub fn new(config: UiConfig) -> Self {
        GameApp {
            game_state: GameState::new(),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            board_area: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = self.game_state.drop_piece(self.selected_column);
                self.report(result);
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece in the column under a left click on the board
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        self.message = None;

        if let Some(area) = self.board_area {
            if let Some(index) = super::game_view::board_cell_at(area, mouse.column, mouse.row) {
                let result = self.game_state.drop_at_index(index);
                self.report(result);
            }
        }
    }

    fn report(&mut self, result: Result<usize, MoveError>) {
        match result {
            Ok(_) => {}
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::InvalidIndex) => {
                self.message = Some("That cell is not on the board!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = Some(super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.config.ascii_pieces,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{index_of, Cell};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_selection_stays_on_the_board() {
        let mut app = GameApp::new(UiConfig::default());
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = GameApp::new(UiConfig::default());
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.game_state.board().cell(index_of(5, 3)), Cell::Red);
        assert!(app.message.is_none());
    }

    #[test]
    fn test_full_column_shows_message_and_keeps_board() {
        let mut app = GameApp::new(UiConfig::default());
        for _ in 0..6 {
            app.handle_key(key(KeyCode::Enter));
        }
        let before = *app.game_state.board();

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.game_state.board(), &before);
    }

    #[test]
    fn test_reset_key_starts_new_game() {
        let mut app = GameApp::new(UiConfig::default());
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Char('r')));

        assert_eq!(app.game_state, GameState::new());
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_click_drops_in_clicked_column() {
        let mut app = GameApp::new(UiConfig::default());
        app.board_area = Some(Rect::new(0, 0, 40, 12));

        // x = 10, y = 2 is the top cell of column 0; the piece lands at the
        // bottom of that column.
        app.handle_mouse(click(10, 2));

        assert_eq!(app.game_state.board().cell(index_of(5, 0)), Cell::Red);
    }

    #[test]
    fn test_click_outside_board_does_nothing() {
        let mut app = GameApp::new(UiConfig::default());
        app.board_area = Some(Rect::new(0, 0, 40, 12));

        app.handle_mouse(click(0, 0));

        assert_eq!(app.game_state, GameState::new());
    }

    #[test]
    fn test_key_clears_previous_message() {
        let mut app = GameApp::new(UiConfig::default());
        app.message = Some("Column is full!".to_string());

        app.handle_key(key(KeyCode::Left));

        assert!(app.message.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = GameApp::new(UiConfig::default());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = GameApp::new(UiConfig::default());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
