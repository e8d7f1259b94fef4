use super::todo_app::Mode;
use crate::todo::{Place, Todo, TodoList};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    list: &TodoList,
    cursor: usize,
    mode: Mode,
    input: &str,
    input_place: Option<Place>,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // List
            Constraint::Length(3), // Input
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, list, chunks[0]);
    render_list(frame, list, cursor, mode, chunks[1]);
    render_input(frame, mode, input, input_place, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, mode, chunks[4]);
}

fn render_header(frame: &mut Frame, list: &TodoList, area: Rect) {
    let header = Paragraph::new(format!(
        "{} open / {} total",
        list.open_count(),
        list.len()
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Todos"));

    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, list: &TodoList, cursor: usize, mode: Mode, area: Rect) {
    if list.is_empty() {
        let empty = Paragraph::new("No todos yet. Press 'i' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    let first = first_visible(cursor, height);

    let lines: Vec<Line> = list
        .items()
        .iter()
        .enumerate()
        .skip(first)
        .take(height.max(1))
        .map(|(i, todo)| todo_line(todo, i == cursor, mode))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Index of the first visible item, scrolled just enough to keep the
/// cursor on screen.
fn first_visible(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return cursor;
    }
    cursor.saturating_sub(height - 1)
}

fn todo_line(todo: &Todo, selected: bool, mode: Mode) -> Line<'_> {
    let mut spans = Vec::new();

    if selected && mode == Mode::Normal {
        spans.push(Span::styled("▸ ", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::raw("  "));
    }

    spans.push(Span::raw(if todo.done { "[x] " } else { "[ ] " }));

    let text_style = if todo.done {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    spans.push(Span::styled(todo.text.as_str(), text_style));

    if let Some(place) = todo.place {
        spans.push(Span::styled(
            format!("  ({})", place.name()),
            Style::default().fg(Color::Blue),
        ));
    }

    Line::from(spans)
}

fn render_input(frame: &mut Frame, mode: Mode, input: &str, input_place: Option<Place>, area: Rect) {
    let place_label = input_place.map(Place::name).unwrap_or("None");

    let content = match mode {
        Mode::Insert => Line::from(vec![
            Span::raw(input.to_string()),
            Span::styled("█", Style::default().fg(Color::White)),
        ]),
        Mode::Normal => Line::from(Span::styled(
            "press 'i' to type",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let input_widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Add todo (place: {})", place_label)),
    );

    frame.render_widget(input_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, mode: Mode, area: Rect) {
    let text = match mode {
        Mode::Normal => {
            "↑/↓: Move  |  Space: Toggle  |  i: Add  |  d: Delete  |  c: Complete all  |  p: Place  |  Q: Quit"
        }
        Mode::Insert => "Enter: Add  |  Esc: Cancel",
    };

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
