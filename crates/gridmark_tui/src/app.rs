//! Application state and key handling.

use crate::input::Action;
use gridmark::{Game, GameSnapshot, MoveError, Outcome, Placement};
use tracing::{debug, instrument, warn};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    notice: Option<String>,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(game: Game) -> Self {
        Self { game, notice: None }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Message about the last key press, if it needs one.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies an action. Returns `false` when the user asked to quit.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> bool {
        self.notice = None;
        match action {
            Action::Quit => return false,
            Action::Cursor(direction) => {
                self.game.move_cursor(direction);
            }
            Action::Select => match self.game.select() {
                Ok(Placement::Placed(_)) => {}
                Ok(Placement::Occupied) => {
                    self.notice = Some("That space is taken. Pick an empty one.".to_string());
                }
                Err(MoveError::GameOver) => {
                    self.notice = Some("The game is over. Press r to play again.".to_string());
                }
                Err(e) => {
                    warn!(error = %e, "Move failed");
                    self.notice = Some(format!("Move error: {}", e));
                }
            },
            Action::Restart => {
                if self.game.outcome().is_terminal() {
                    debug!("Restarting game");
                    self.game = self.game.restart();
                }
            }
        }
        true
    }
}

/// Status text for the current game state.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.outcome() {
        Outcome::InProgress => format!("{}'s turn", snapshot.current_player()),
        Outcome::Win(player) => format!("{} has won!", player),
        Outcome::Draw => "Draw! Try again!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmark::{Direction, Player};

    fn play(app: &mut App, moves: &[Action]) {
        for action in moves {
            assert!(app.handle(*action));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Game::new(3, 3).unwrap());
        assert!(!app.handle(Action::Quit));
    }

    #[test]
    fn test_occupied_select_sets_notice() {
        let mut app = App::new(Game::new(3, 3).unwrap());
        play(&mut app, &[Action::Select, Action::Select]);
        assert!(app.notice().is_some());
        assert_eq!(app.game().current_player(), Player::Two);

        play(&mut app, &[Action::Cursor(Direction::Right)]);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_win_then_restart() {
        use Action::{Cursor, Select};
        use Direction::{Down, Left, Right, Up};
        let mut app = App::new(Game::new(3, 3).unwrap());
        // Player 1 takes the left column, player 2 the middle one.
        play(
            &mut app,
            &[
                Select,
                Cursor(Right),
                Select,
                Cursor(Down),
                Cursor(Left),
                Select,
                Cursor(Right),
                Select,
                Cursor(Down),
                Cursor(Left),
                Select,
            ],
        );
        assert_eq!(app.game().outcome(), Outcome::Win(Player::One));
        assert_eq!(status_line(&app.game().snapshot()), "Player 1 has won!");

        play(&mut app, &[Cursor(Up), Select]);
        assert!(app.notice().is_some());

        play(&mut app, &[Action::Restart]);
        assert_eq!(app.game().outcome(), Outcome::InProgress);
        assert_eq!(app.game().board().occupied_count(), 0);
    }

    #[test]
    fn test_restart_ignored_mid_game() {
        let mut app = App::new(Game::new(3, 3).unwrap());
        play(&mut app, &[Action::Select, Action::Restart]);
        assert_eq!(app.game().board().occupied_count(), 1);
    }

    #[test]
    fn test_status_line() {
        let game = Game::new(3, 3).unwrap();
        assert_eq!(status_line(&game.snapshot()), "Player 1's turn");
        let draw = Game::replay(3, 3, &[0, 1, 2, 4, 3, 6, 7, 5, 8]).unwrap();
        assert_eq!(status_line(&draw.snapshot()), "Draw! Try again!");
    }
}
