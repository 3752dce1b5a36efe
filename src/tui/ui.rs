//! Layout and rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictac_timeline_core::{Mark, Position, SortOrder, Square};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board panel.
    pub board_panel: Rect,
    /// One rect per board cell, in index order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Sort toggle button.
    pub sort_button: Rect,
    /// Bordered history list.
    pub history: Rect,
    /// Key help line.
    pub help: Rect,
}

impl AppLayout {
    /// Board cell under the given screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ratatui::layout::Position::new(column, row);
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }

    /// Row inside the history list's borders under the given coordinate.
    pub fn history_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(self.history);
        inner
            .contains(ratatui::layout::Position::new(column, row))
            .then(|| usize::from(row - inner.y))
    }

    /// Whether the coordinate hits the sort button.
    pub fn is_sort_button(&self, column: u16, row: u16) -> bool {
        self.sort_button
            .contains(ratatui::layout::Position::new(column, row))
    }
}

/// Splits the terminal area into the screen regions.
pub fn layout(area: Rect, show_coordinates: bool) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(GRID_HEIGHT + 3),
            Constraint::Length(3), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GRID_WIDTH + 8), Constraint::Min(30)])
        .split(chunks[1]);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Sort button
            Constraint::Min(3),    // History
        ])
        .split(body[1]);

    let board_inner = Block::default().borders(Borders::ALL).inner(body[0]);
    // Rulers take one row above and two columns left of the grid.
    let (width, height) = if show_coordinates {
        (GRID_WIDTH + 2, GRID_HEIGHT + 1)
    } else {
        (GRID_WIDTH, GRID_HEIGHT)
    };
    let mut grid = center_rect(board_inner, width, height);
    if show_coordinates {
        grid = Rect::new(
            grid.x + 2,
            grid.y + 1,
            grid.width.saturating_sub(2),
            grid.height.saturating_sub(1),
        );
    }

    AppLayout {
        title: chunks[0],
        board_panel: body[0],
        cells: cell_rects(grid),
        status: info[0],
        sort_button: info[1],
        history: info[2],
        help: chunks[2],
    }
}

fn cell_rects(grid: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell;
        }
    }
    cells
}

/// Renders the whole screen and records the layout on the app for mouse input.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let layout = layout(frame.area(), app.show_coordinates());
    app.set_layout(layout);
    let view = app.controller().view();

    let title = Paragraph::new("Tic Tac Toe - Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, app, &layout, view.board().squares());

    let status_style = if *view.is_win() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let sort_label = match view.sort_order() {
        SortOrder::Ascending => "[ Sort: Ascending ]",
        SortOrder::Descending => "[ Sort: Descending ]",
    };
    let sort_button = Paragraph::new(sort_label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(sort_button, layout.sort_button);

    let items: Vec<ListItem> = view
        .history()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let history_border = if app.focus() == Focus::History {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(history_border)
                .title("History"),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, layout.history, app.history_state_mut());

    let help = Paragraph::new(
        "←↑↓→ move | Enter/Space: play | 1-9: play cell | Tab: history | s: sort | Home: start | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, app: &App, layout: &AppLayout, squares: &[Square; 9]) {
    let border = if app.focus() == Focus::Board {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Board"),
        layout.board_panel,
    );

    if app.show_coordinates() {
        draw_rulers(frame, layout);
    }

    for pos in Position::ALL {
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            squares[pos.to_index()],
            app.focus() == Focus::Board && pos == app.cursor(),
        );
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, selected: bool) {
    let (symbol, style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let border = if selected {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_rulers(frame: &mut Frame, layout: &AppLayout) {
    let ruler = Style::default().fg(Color::DarkGray);
    for i in 0..3 {
        let top = layout.cells[i];
        if top.y > 0 {
            let area = Rect::new(top.x, top.y - 1, top.width, 1);
            frame.render_widget(
                Paragraph::new((i + 1).to_string()).style(ruler).alignment(Alignment::Center),
                area,
            );
        }
        let left = layout.cells[i * 3];
        if left.x > 1 {
            let area = Rect::new(left.x - 2, left.y + left.height / 2, 1, 1);
            frame.render_widget(Paragraph::new((i + 1).to_string()).style(ruler), area);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
