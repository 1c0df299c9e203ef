//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use timetoe_engine::{GameHistory, MoveEntry, Position, SortOrder, move_entries};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use super::ui::ScreenLayout;

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a history entry.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Game history and cursor.
    history: GameHistory,
    /// Move list display order.
    order: SortOrder,
    /// Pane with keyboard focus.
    focus: Focus,
    /// Highlighted board square.
    board_cursor: Position,
    /// History step highlighted in the move list.
    selected_step: usize,
    /// Feedback from the last action, if any.
    message: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        Self {
            history: GameHistory::new(),
            order,
            focus: Focus::Board,
            board_cursor: Position::Center,
            selected_step: 0,
            message: None,
        }
    }

    /// Move list entries in display order.
    pub fn entries(&self) -> Vec<MoveEntry> {
        move_entries(&self.history, self.order)
    }

    /// Display index of the selected entry.
    pub fn selected_index(&self) -> usize {
        match self.order {
            SortOrder::Ascending => self.selected_step,
            SortOrder::Descending => self.history.len() - 1 - self.selected_step,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.toggle_order(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::PageUp | KeyCode::Char('[') => self.step_back(),
            KeyCode::PageDown | KeyCode::Char(']') => self.step_forward(),
            code => {
                if let Some(position) = digit_position(code) {
                    self.board_cursor = position;
                    self.play(position);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::History => self.handle_history_key(code),
                    }
                }
            }
        }
        Control::Continue
    }

    /// Handles a mouse event: a left click plays a square or jumps to a move.
    #[instrument(skip(self, layout), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(position) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.board_cursor = position;
            self.play(position);
        } else if let Some(step) = layout
            .history_row_at(mouse.column, mouse.row)
            .and_then(|index| self.entries().get(index).map(|entry| entry.step))
        {
            self.focus = Focus::History;
            self.jump_to(step);
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.board_cursor),
            _ => self.board_cursor = move_cursor(self.board_cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.select_relative(-1),
            KeyCode::Down => self.select_relative(1),
            KeyCode::Home => self.select_index(0),
            KeyCode::End => self.select_index(self.history.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected_step),
            _ => {}
        }
    }

    fn select_relative(&mut self, delta: isize) {
        let index = self.selected_index().saturating_add_signed(delta);
        self.select_index(index.min(self.history.len() - 1));
    }

    fn select_index(&mut self, index: usize) {
        if let Some(entry) = self.entries().get(index) {
            self.selected_step = entry.step;
        }
    }

    /// Plays `position` for the player to move; rejected moves are no-ops.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) {
        let player = self.history.next_player();
        match self.history.play(position) {
            Ok(_) => {
                info!(%player, %position, step = self.history.cursor(), "Move played");
                self.selected_step = self.history.cursor();
                self.message = None;
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Moves the history cursor to `step`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        match self.history.jump(step) {
            Ok(()) => {
                info!(step, "Jumped");
                self.selected_step = step;
                self.message = None;
            }
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    /// Jumps one step back, if possible.
    pub fn step_back(&mut self) {
        if let Some(step) = self.history.cursor().checked_sub(1) {
            self.jump_to(step);
        }
    }

    /// Jumps one step forward, if possible.
    pub fn step_forward(&mut self) {
        let step = self.history.cursor() + 1;
        if step < self.history.len() {
            self.jump_to(step);
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.restart();
        self.selected_step = 0;
        self.board_cursor = Position::Center;
        self.message = Some("Game restarted".to_string());
    }

    /// Flips the move list order, keeping the same step selected.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move list order changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetoe_engine::{GameStatus, Player};

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn layout() -> ScreenLayout {
        ScreenLayout::new(ratatui::layout::Rect::new(0, 0, 110, 24))
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(mouse, &layout());
    }

    fn click_square(app: &mut App, position: Position) {
        let (_, area) = layout()
            .cells()
            .into_iter()
            .find(|(pos, _)| *pos == position)
            .unwrap();
        click(app, area.x + 1, area.y + 1);
    }

    fn click_history_row(app: &mut App, index: u16) {
        let history = layout().history;
        click(app, history.x + 2, history.y + 1 + index);
    }

    #[test]
    fn test_digit_plays() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.history().len(), 2);
        assert_eq!(app.board_cursor(), &Position::Center);
        assert_eq!(app.selected_step(), &1);
    }

    #[test]
    fn test_rejected_play_sets_message() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.history().len(), 2);
        assert_eq!(
            app.message().as_deref(),
            Some("Square Center is already occupied")
        );
    }

    #[test]
    fn test_arrows_and_enter_play() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history().steps()[1].position(), Some(Position::TopLeft));
    }

    #[test]
    fn test_history_navigation_descending() {
        let mut app = App::new(SortOrder::Descending);
        for key in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), &Focus::History);
        assert_eq!(app.selected_index(), 0);

        // Down in a descending list walks back in time.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_step(), &1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history().cursor(), 1);
        assert_eq!(app.history().len(), 4);
        assert_eq!(app.history().next_player(), Player::O);
    }

    #[test]
    fn test_selection_clamps() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_step(), &0);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_step(), &1);
    }

    #[test]
    fn test_step_keys_and_branching() {
        let mut app = App::new(SortOrder::Ascending);
        for key in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::PageUp);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.history().cursor(), 1);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.history().cursor(), 2);
        press(&mut app, KeyCode::Char('['));

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.history().len(), 3);
        assert_eq!(app.history().cursor(), 2);
    }

    #[test]
    fn test_restart_and_toggle() {
        let mut app = App::new(SortOrder::Ascending);
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.history().status(), GameStatus::Winner(Player::X));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.order(), &SortOrder::Descending);
        assert_eq!(app.entries()[0].step, 5);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.order(), &SortOrder::Descending);
    }

    #[test]
    fn test_click_square_plays() {
        let mut app = App::new(SortOrder::Ascending);
        click_square(&mut app, Position::BottomRight);
        assert_eq!(app.history().len(), 2);
        assert_eq!(app.history().steps()[1].position(), Some(Position::BottomRight));
        assert_eq!(app.board_cursor(), &Position::BottomRight);

        click_square(&mut app, Position::BottomRight);
        assert_eq!(app.history().len(), 2);
        assert!(app.message().is_some());
    }

    #[test]
    fn test_click_history_row_jumps() {
        let mut app = App::new(SortOrder::Descending);
        for position in [Position::TopLeft, Position::Center, Position::BottomRight] {
            click_square(&mut app, position);
        }

        // Descending: row 0 is move #3, row 2 is move #1.
        click_history_row(&mut app, 2);
        assert_eq!(app.focus(), &Focus::History);
        assert_eq!(app.history().cursor(), 1);
        assert_eq!(app.history().len(), 4);
        assert_eq!(app.selected_step(), &1);

        // Below the last entry.
        click_history_row(&mut app, 6);
        assert_eq!(app.history().cursor(), 1);
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let mut app = App::new(SortOrder::Ascending);
        let (_, area) = layout().cells()[4];
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: area.x,
            row: area.y,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(mouse, &layout());
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Control::Quit
        );
    }
}
