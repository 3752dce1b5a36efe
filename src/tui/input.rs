//! Key and mouse translation for the game screen.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tictac_timeline_core::Position;

use super::ui::AppLayout;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let target = match key {
        KeyCode::Left if col > 0 => Position::from_row_col(row, col - 1),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up if row > 0 => Position::from_row_col(row - 1, col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Cell selected by a digit key, `1` being the top-left cell.
pub fn digit_cell(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1)),
        _ => None,
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board cell.
    Cell(Position),
    /// A visible row of the history list (0 is the first row inside the border).
    HistoryRow(usize),
    /// The sort toggle button.
    SortButton,
}

/// Resolves a left-button press against the layout of the last frame.
pub fn click_target(mouse: MouseEvent, layout: &AppLayout) -> Option<ClickTarget> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (col, row) = (mouse.column, mouse.row);
    if let Some(pos) = layout.cell_at(col, row) {
        return Some(ClickTarget::Cell(pos));
    }
    if layout.is_sort_button(col, row) {
        return Some(ClickTarget::SortButton);
    }
    layout.history_row_at(col, row).map(ClickTarget::HistoryRow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
    }

    #[test]
    fn test_digit_cells() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Enter), None);
    }

    #[test]
    fn test_click_targets() {
        let layout = super::super::ui::layout(Rect::new(0, 0, 100, 30), true);
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        let center = layout.cells[4];
        assert_eq!(
            click_target(click(center.x + 1, center.y + 1), &layout),
            Some(ClickTarget::Cell(Position::Center))
        );
        let sort = layout.sort_button;
        assert_eq!(
            click_target(click(sort.x + 2, sort.y + 1), &layout),
            Some(ClickTarget::SortButton)
        );
        let history = layout.history;
        assert_eq!(
            click_target(click(history.x + 2, history.y + 1), &layout),
            Some(ClickTarget::HistoryRow(0))
        );
        assert_eq!(click_target(click(0, 0), &layout), None);
    }
}
