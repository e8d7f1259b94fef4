use crate::game::{index_of, Board, Cell, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rendered width of every board line: "  ║" + 7 cells of 3 chars + " ║".
const BOARD_TEXT_WIDTH: u16 = 26;

/// Render the whole game screen and return the area the board was drawn in,
/// so mouse clicks can be mapped back to cells.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    ascii_pieces: bool,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state.board(), selected_column, ascii_pieces, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    chunks[1]
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let next = game_state.next_player();
    let color = match next {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    };

    let header = Paragraph::new(format!("Next player: {}", next.name()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    ascii_pieces: bool,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = piece(board.get(row, col), ascii_pieces);
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn piece(cell: Cell, ascii_pieces: bool) -> (&'static str, Color) {
    match (cell, ascii_pieces) {
        (Cell::Empty, _) => (" . ", Color::DarkGray),
        (Cell::Red, false) => (" ● ", Color::Red),
        (Cell::Red, true) => (" R ", Color::Red),
        (Cell::Yellow, false) => (" ● ", Color::Yellow),
        (Cell::Yellow, true) => (" Y ", Color::Yellow),
    }
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls =
        Paragraph::new("←/→: Move  |  Enter: Drop  |  Click: Drop  |  R: Reset  |  Q: Quit")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Controls"),
            );

    frame.render_widget(controls, area);
}

/// Map a terminal coordinate inside the board area to a cell index.
///
/// The board paragraph is centered, each line is [BOARD_TEXT_WIDTH] wide, and
/// the cell grid starts 3 columns in (after "  ║") and 2 lines down (after the
/// column numbers and the top border). Each cell is 3 columns wide and 1 line
/// tall. Returns None for clicks on padding, borders, or outside the grid.
pub(super) fn board_cell_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    if area.width < BOARD_TEXT_WIDTH {
        return None;
    }

    let x0 = area.x + (area.width - BOARD_TEXT_WIDTH) / 2 + 3;
    let y0 = area.y + 2;
    if x < x0 || y < y0 || y >= area.y + area.height {
        return None;
    }

    let col = usize::from((x - x0) / 3);
    let row = usize::from(y - y0);
    if col >= COLS || row >= ROWS {
        return None;
    }

    Some(index_of(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    // With a 40-wide area at the origin the board lines start at x = 7, so
    // the cell grid starts at x0 = 10, y0 = 2.
    fn area() -> Rect {
        Rect::new(0, 0, 40, 12)
    }

    #[test]
    fn test_click_on_top_left_cell() {
        assert_eq!(board_cell_at(area(), 10, 2), Some(0));
    }

    #[test]
    fn test_click_on_rightmost_column() {
        assert_eq!(board_cell_at(area(), 28, 2), Some(6));
    }

    #[test]
    fn test_click_on_bottom_left_cell() {
        assert_eq!(board_cell_at(area(), 10, 7), Some(35));
    }

    #[test]
    fn test_click_maps_within_cell_width() {
        // All three columns of the middle cell in the bottom row map to it.
        for x in [19, 20, 21] {
            assert_eq!(board_cell_at(area(), x, 7), Some(38));
        }
    }

    #[test]
    fn test_click_left_of_grid_is_ignored() {
        assert_eq!(board_cell_at(area(), 9, 2), None);
    }

    #[test]
    fn test_click_on_column_numbers_is_ignored() {
        assert_eq!(board_cell_at(area(), 10, 1), None);
    }

    #[test]
    fn test_click_on_bottom_border_is_ignored() {
        assert_eq!(board_cell_at(area(), 10, 8), None);
    }

    #[test]
    fn test_click_right_of_grid_is_ignored() {
        // x = 31 is the right border, one past column 6.
        assert_eq!(board_cell_at(area(), 31, 2), None);
    }

    #[test]
    fn test_too_narrow_area_is_ignored() {
        assert_eq!(board_cell_at(Rect::new(0, 0, 20, 12), 5, 3), None);
    }
}
