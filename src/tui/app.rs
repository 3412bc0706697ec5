//! Application state and key handling.

use super::input::{digit_to_index, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, GameStatus, MoveOutcome, Position, Snapshot};
use tracing::{debug, error, info, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Holds the engine and the last snapshot it returned; everything the
/// UI draws comes from that snapshot.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    snapshot: Snapshot,
    cursor: Position,
    status_message: String,
    title: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(title: impl Into<String>) -> Self {
        let engine = GameEngine::new();
        let snapshot = engine.snapshot();
        let status_message = turn_message(&snapshot);
        Self {
            engine,
            snapshot,
            cursor: Position::Center,
            status_message,
            title: title.into(),
        }
    }

    /// Latest engine snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Heading shown above the board.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// End-of-game banner, once the game is won or drawn.
    pub fn notification(&self) -> Option<String> {
        let status = self.snapshot.status();
        if !status.is_terminal() {
            return None;
        }
        Some(match status.winner() {
            Some(player) => format!(
                "Player {} wins! Press 'r' to play again or 'q' to quit.",
                player
            ),
            None => "It's a draw! Press 'r' to play again or 'q' to quit.".to_string(),
        })
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.select(index);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Forwards a cell selection to the engine.
    fn select(&mut self, index: usize) {
        match self.engine.apply_move(index) {
            Ok(report) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.status_message = match report.outcome {
                    MoveOutcome::Accepted { .. } => turn_message(&report.snapshot),
                    MoveOutcome::Rejected(reason) => {
                        debug!(%reason, "Ignoring selection");
                        format!("{}. {}", reason, turn_message(&report.snapshot))
                    }
                };
                self.snapshot = report.snapshot;
            }
            Err(e) => {
                error!(error = %e, "Selection outside the board");
                self.status_message = e.to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.snapshot = self.engine.reset();
        self.status_message = turn_message(&self.snapshot);
    }
}

fn turn_message(snapshot: &Snapshot) -> String {
    match snapshot.status() {
        GameStatus::InProgress => format!("Player {}'s turn", snapshot.current_player()),
        status => format!("Game over: {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Cell, Player, WinLine};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), AppAction::Continue);
        }
    }

    #[test]
    fn test_digits_mark_cells_alternately() {
        let mut app = App::new("test");
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        let board = app.snapshot().board();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::O));
        assert_eq!(app.status_message(), "Player X's turn");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new("test");
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(
            app.snapshot().board().get(Position::TopLeft),
            Cell::Occupied(Player::X)
        );
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = App::new("test");
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.snapshot().move_count(), 1);
        assert_eq!(app.status_message(), "Center is already occupied. Player O's turn");
    }

    #[test]
    fn test_win_shows_notification_and_reset_clears_it() {
        let mut app = App::new("test");
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('4'),
                KeyCode::Char('2'),
                KeyCode::Char('5'),
                KeyCode::Char('3'),
            ],
        );
        assert_eq!(app.snapshot().status(), GameStatus::Won(Player::X));
        assert_eq!(app.snapshot().winning_line(), Some(WinLine::ALL[0]));
        assert!(app.notification().unwrap().starts_with("Player X wins!"));

        // Further selections are refused.
        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.snapshot().move_count(), 5);

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.snapshot(), &Snapshot::initial());
        assert_eq!(app.notification(), None);
    }

    #[test]
    fn test_draw_notification() {
        let mut app = App::new("test");
        let keys: Vec<KeyCode> = "123546879".chars().map(KeyCode::Char).collect();
        press(&mut app, &keys);
        assert_eq!(app.snapshot().status(), GameStatus::Draw);
        assert!(app.notification().unwrap().starts_with("It's a draw!"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new("test");
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
