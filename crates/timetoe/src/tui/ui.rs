//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{
        Alignment, Constraint, Direction, Layout, Margin, Position as ScreenPosition, Rect,
    },
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetoe_engine::{Board, Player, Position, Square};

use super::app::{App, Focus};

const HELP: &str =
    "Arrows/1-9: Move | Enter: Play/Jump | Tab: Switch pane | [ ]: Step | s: Sort | r: Restart | q: Quit";

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Move list pane, including its border.
    pub history: Rect,
    /// Status line above the board.
    pub status: Rect,
    /// The 3x3 grid with its separators.
    pub board: Rect,
    /// Key help bar.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into the game's panes.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(15),   // Body
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(42)])
            .split(chunks[1]);

        let game = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(11),   // Board
            ])
            .split(body[1]);

        Self {
            title: chunks[0],
            history: body[0],
            status: game[0],
            board: center_rect(game[1], 40, 11),
            help: chunks[2],
        }
    }

    /// Area of every board square.
    pub fn cells(&self) -> Vec<(Position, Rect)> {
        let rows = board_rows(self.board);
        Position::ALL
            .iter()
            .map(|pos| (*pos, row_columns(rows[pos.row() * 2])[pos.column() * 2]))
            .collect()
    }

    /// Board square under the terminal cell at `column`, `row`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells()
            .into_iter()
            .find(|(_, area)| area.contains(point))
            .map(|(pos, _)| pos)
    }

    /// Display index of the move list row at `column`, `row`.
    ///
    /// Rows map one-to-one while the list fits without scrolling.
    pub fn history_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.history.inner(Margin::new(1, 1));
        inner
            .contains(ScreenPosition::new(column, row))
            .then(|| usize::from(row - inner.y))
    }
}

/// Draws the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Game")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_history(frame, layout.history, app);
    draw_game(frame, &layout, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .entries()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.to_string(), style)))
        })
        .collect();

    let border_style = match app.focus() {
        Focus::History => Style::default().fg(Color::Yellow),
        Focus::Board => Style::default(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("History [s: {}]", app.order().toggle_label()));

    let mut list = List::new(items).block(block);
    let mut state = ListState::default();
    if *app.focus() == Focus::History {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        state.select(Some(app.selected_index()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_game(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let history = app.history();
    let game_status = history.status();
    let mut status = game_status.to_string();
    if let Some(message) = app.message() {
        status.push_str(" - ");
        status.push_str(message);
    }
    let color = if game_status.is_over() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let cursor = match app.focus() {
        Focus::Board => Some(*app.board_cursor()),
        Focus::History => None,
    };
    let highlight: Vec<Position> = history
        .winning_line()
        .map(|line| line.to_vec())
        .unwrap_or_default();
    draw_board(
        frame,
        layout,
        history.current_board(),
        cursor,
        &highlight,
    );
}

fn draw_board(
    frame: &mut Frame,
    layout: &ScreenLayout,
    board: &Board,
    cursor: Option<Position>,
    highlight: &[Position],
) {
    for (pos, area) in layout.cells() {
        draw_cell(frame, area, board, cursor, highlight, pos);
    }

    let rows = board_rows(layout.board);
    for row in 0..3 {
        let cols = row_columns(rows[row * 2]);
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

/// Three 3-line rows with 1-line separators between them.
fn board_rows(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// Three 12-column cells with 1-column separators between them.
fn row_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area)
        .to_vec()
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    highlight: &[Position],
    pos: Position,
) {
    let (symbol, mut style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if highlight.contains(&pos) {
        style = style.bg(Color::LightYellow);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the symbol in the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
