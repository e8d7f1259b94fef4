use crate::todo::{Place, TodoList};
use crate::ui::UiConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Input mode: Normal navigates the list, Insert types a new todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    Normal,
    Insert,
}

pub struct TodoApp {
    list: TodoList,
    cursor: usize,
    mode: Mode,
    input: String,
    input_place: Option<Place>,
    should_quit: bool,
    message: Option<String>,
    config: UiConfig,
}

impl TodoApp {
    pub fn new(config: UiConfig, list: TodoList) -> Self {
        TodoApp {
            list,
            cursor: 0,
            mode: Mode::Normal,
            input: String::new(),
            input_place: None,
            should_quit: false,
            message: None,
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

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                match self.mode {
                    Mode::Normal => self.handle_normal_key(key),
                    Mode::Insert => self.handle_insert_key(key),
                }
            }
        }
        Ok(())
    }

    /// Handle key press while navigating the list
    fn handle_normal_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.list.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                self.toggle_under_cursor();
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.remove_under_cursor();
            }
            KeyCode::Char('c') => {
                self.complete_all();
            }
            KeyCode::Char('i') | KeyCode::Char('a') => {
                self.mode = Mode::Insert;
            }
            KeyCode::Char('p') => {
                self.input_place = next_place(self.input_place);
            }
            _ => {}
        }
    }

    /// Handle key press while typing a new todo
    fn handle_insert_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                self.commit_input();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Add the typed todo, keeping the chosen place for the next one
    fn commit_input(&mut self) {
        let text = self.input.trim();
        if text.is_empty() {
            self.message = Some("Nothing to add.".to_string());
            return;
        }

        self.list.add(text.to_string(), self.input_place);
        self.input.clear();
        self.mode = Mode::Normal;
        self.cursor = self.list.len() - 1;
    }

    fn toggle_under_cursor(&mut self) {
        if let Some(id) = self.list.items().get(self.cursor).map(|t| t.id) {
            let _ = self.list.toggle(id);
        }
    }

    fn remove_under_cursor(&mut self) {
        if let Some(id) = self.list.items().get(self.cursor).map(|t| t.id) {
            if let Ok(removed) = self.list.remove(id) {
                self.message = Some(format!("Removed \"{}\"", removed.text));
            }
            // Keep the cursor on the list after removing the last item
            if self.cursor >= self.list.len() && self.cursor > 0 {
                self.cursor -= 1;
            }
        }
    }

    fn complete_all(&mut self) {
        if self.list.has_unfinished() {
            self.list.complete_all();
            self.message = Some("All todos completed!".to_string());
        } else {
            self.message = Some("Nothing left to complete.".to_string());
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::todo_view::render(
            frame,
            &self.list,
            self.cursor,
            self.mode,
            &self.input,
            self.input_place,
            &self.message,
        );
    }
}

/// Cycle the place tag: no place, then Home, then Work, then back around.
fn next_place(place: Option<Place>) -> Option<Place> {
    match place {
        None => Some(Place::Home),
        Some(Place::Home) => Some(Place::Work),
        Some(Place::Work) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> TodoApp {
        TodoApp::new(UiConfig::default(), TodoList::new())
    }

    fn type_text(app: &mut TodoApp, text: &str) {
        for c in text.chars() {
            app.handle_insert_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_place_cycles_through_options() {
        assert_eq!(next_place(None), Some(Place::Home));
        assert_eq!(next_place(Some(Place::Home)), Some(Place::Work));
        assert_eq!(next_place(Some(Place::Work)), None);
    }

    #[test]
    fn test_insert_then_commit_adds_todo() {
        let mut app = app();
        app.handle_normal_key(key(KeyCode::Char('i')));
        assert_eq!(app.mode, Mode::Insert);

        type_text(&mut app, "Buy milk");
        app.handle_insert_key(key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items()[0].text, "Buy milk");
        assert_eq!(app.cursor, 0);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_blank_input_is_not_added() {
        let mut app = app();
        app.handle_normal_key(key(KeyCode::Char('i')));
        type_text(&mut app, "   ");
        app.handle_insert_key(key(KeyCode::Enter));

        assert_eq!(app.list.len(), 0);
        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(app.message.as_deref(), Some("Nothing to add."));
    }

    #[test]
    fn test_escape_cancels_input() {
        let mut app = app();
        app.handle_normal_key(key(KeyCode::Char('i')));
        type_text(&mut app, "Half a thought");
        app.handle_insert_key(key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.input.is_empty());
        assert_eq!(app.list.len(), 0);
    }

    #[test]
    fn test_place_applies_to_new_todos_until_cleared() {
        let mut app = app();
        app.handle_normal_key(key(KeyCode::Char('p')));

        app.handle_normal_key(key(KeyCode::Char('i')));
        type_text(&mut app, "Water the plants");
        app.handle_insert_key(key(KeyCode::Enter));

        app.handle_normal_key(key(KeyCode::Char('i')));
        type_text(&mut app, "Sweep the porch");
        app.handle_insert_key(key(KeyCode::Enter));

        assert_eq!(app.list.items()[0].place, Some(Place::Home));
        assert_eq!(app.list.items()[1].place, Some(Place::Home));
    }

    #[test]
    fn test_space_toggles_under_cursor() {
        let mut app = app();
        app.list.add("Buy milk".to_string(), None);

        app.handle_normal_key(key(KeyCode::Char(' ')));
        assert!(app.list.items()[0].done);

        app.handle_normal_key(key(KeyCode::Char(' ')));
        assert!(!app.list.items()[0].done);
    }

    #[test]
    fn test_remove_clamps_cursor_to_list() {
        let mut app = app();
        app.list.add("First".to_string(), None);
        app.list.add("Second".to_string(), None);
        app.cursor = 1;

        app.handle_normal_key(key(KeyCode::Char('d')));

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.message.as_deref(), Some("Removed \"Second\""));
    }

    #[test]
    fn test_cursor_stays_within_list() {
        let mut app = app();
        app.list.add("Only".to_string(), None);

        app.handle_normal_key(key(KeyCode::Down));
        assert_eq!(app.cursor, 0);

        app.handle_normal_key(key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_complete_all_reports_when_nothing_open() {
        let mut app = app();
        app.handle_normal_key(key(KeyCode::Char('c')));
        assert_eq!(app.message.as_deref(), Some("Nothing left to complete."));

        app.list.add("Buy milk".to_string(), None);
        app.handle_normal_key(key(KeyCode::Char('c')));
        assert_eq!(app.message.as_deref(), Some("All todos completed!"));
        assert!(!app.list.has_unfinished());
    }
}
