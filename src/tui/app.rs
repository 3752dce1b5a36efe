//! Application state and input handling for the game screen.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::widgets::ListState;
use tictac_timeline_core::{GameController, GameEvent, Position, SortOrder};
use tracing::{debug, info, instrument, warn};

use super::input::{ClickTarget, click_target, digit_cell, move_cursor};
use super::ui::AppLayout;

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board; arrows move the cell cursor.
    #[default]
    Board,
    /// The history list; arrows move the selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    history_state: ListState,
    show_coordinates: bool,
    layout: Option<AppLayout>,
    should_quit: bool,
}

impl App {
    /// Creates the application for a fresh game.
    #[instrument]
    pub fn new(sort_order: SortOrder, show_coordinates: bool) -> Self {
        let mut app = Self {
            controller: GameController::new(sort_order),
            cursor: Position::Center,
            focus: Focus::Board,
            history_state: ListState::default(),
            show_coordinates,
            layout: None,
            should_quit: false,
        };
        app.select_current_entry();
        app
    }

    /// The game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether to draw row and column rulers.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Selected row of the history list, in presentation order.
    pub fn selected_entry(&self) -> Option<usize> {
        self.history_state.selected()
    }

    /// List state handed to the history widget.
    pub fn history_state_mut(&mut self) -> &mut ListState {
        &mut self.history_state
    }

    /// Records the layout of the frame just drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: AppLayout) {
        self.layout = Some(layout);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.select_current_entry();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.send(GameEvent::SortToggled),
            KeyCode::Home => self.send(GameEvent::HistoryStepActivated(0)),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(GameEvent::CellActivated(self.cursor.to_index()));
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, code);
            }
            other => {
                if let Some(pos) = digit_cell(other) {
                    self.cursor = pos;
                    self.send(GameEvent::CellActivated(pos.to_index()));
                }
            }
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let len = self.controller.state().history().len();
        let selected = self.history_state.selected().unwrap_or(0);
        match code {
            KeyCode::Up => self.history_state.select(Some(selected.saturating_sub(1))),
            KeyCode::Down => self.history_state.select(Some((selected + 1).min(len - 1))),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_entry(selected),
            _ => {}
        }
    }

    /// Handles a mouse event using the layout of the last drawn frame.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = self.layout else {
            debug!("Mouse event before first frame");
            return;
        };
        match click_target(mouse, &layout) {
            Some(ClickTarget::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.send(GameEvent::CellActivated(pos.to_index()));
            }
            Some(ClickTarget::SortButton) => self.send(GameEvent::SortToggled),
            Some(ClickTarget::HistoryRow(row)) => {
                self.focus = Focus::History;
                self.activate_entry(self.history_state.offset() + row);
            }
            None => {}
        }
    }

    /// Jumps to the history entry shown at `row` in presentation order.
    fn activate_entry(&mut self, row: usize) {
        match self.controller.entries().nth(row) {
            Some(entry) => self.send(GameEvent::HistoryStepActivated(*entry.step())),
            None => debug!(row, "No history entry at row"),
        }
    }

    fn send(&mut self, event: GameEvent) {
        if let Err(e) = self.controller.dispatch(event) {
            warn!(error = %e, "Event rejected");
        }
        self.select_current_entry();
    }

    /// Points the list selection at the active snapshot's entry.
    fn select_current_entry(&mut self) {
        let row = self.controller.entries().position(|e| *e.is_current());
        self.history_state.select(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::layout::Rect;
    use tictac_timeline_core::{Mark, Square, Status};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key(*code));
        }
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(SortOrder::Ascending, true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        let board = *app.controller().state().current_snapshot().board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_digit_keys_play_and_history_jumps() {
        let mut app = App::new(SortOrder::Ascending, true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        assert_eq!(app.controller().state().history().len(), 4);
        assert_eq!(app.selected_entry(), Some(3));

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.controller().state().step(), 1);
        assert_eq!(app.controller().state().status(), Status::NextPlayer(Mark::O));
    }

    #[test]
    fn test_sort_toggle_keeps_selection_on_current() {
        let mut app = App::new(SortOrder::Ascending, true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('s')]);
        assert_eq!(*app.controller().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected_entry(), Some(0));
    }

    #[test]
    fn test_home_returns_to_start() {
        let mut app = App::new(SortOrder::Ascending, true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Home]);
        assert_eq!(app.controller().view().status(), "Next player: X");
        assert_eq!(app.controller().state().history().len(), 2);
    }

    #[test]
    fn test_mouse_click_plays_cell() {
        let mut app = App::new(SortOrder::Ascending, false);
        let layout = super::super::ui::layout(Rect::new(0, 0, 100, 30), false);
        app.set_layout(layout);

        let cell = layout.cells[8];
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cell.x + 2,
            row: cell.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        let board = *app.controller().state().current_snapshot().board();
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Mark::X));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn app_with_layout(moves: &[KeyCode]) -> (App, AppLayout) {
        let mut app = App::new(SortOrder::Ascending, false);
        let layout = super::super::ui::layout(Rect::new(0, 0, 100, 30), false);
        app.set_layout(layout);
        press(&mut app, moves);
        (app, layout)
    }

    #[test]
    fn test_mouse_history_click_after_sort_toggle() {
        let (mut app, layout) =
            app_with_layout(&[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);

        click(&mut app, layout.sort_button.x + 1, layout.sort_button.y + 1);
        assert_eq!(*app.controller().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected_entry(), Some(0));

        // Newest first: rows show steps 3, 2, 1, 0.
        click(&mut app, layout.history.x + 2, layout.history.y + 1 + 2);
        assert_eq!(app.controller().state().step(), 1);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_entry(), Some(2));
        assert_eq!(app.controller().state().history().len(), 4);
    }

    #[test]
    fn test_mouse_history_click_respects_scroll_offset() {
        let (mut app, layout) =
            app_with_layout(&[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        *app.history_state_mut().offset_mut() = 1;

        click(&mut app, layout.history.x + 2, layout.history.y + 1);
        assert_eq!(app.controller().state().step(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending, true);
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Esc]);
        assert!(app.should_quit());
    }
}
