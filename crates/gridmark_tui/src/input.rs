//! Key bindings for keyboard play.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridmark::Direction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(Direction),
    /// Mark the cell under the cursor.
    Select,
    /// Start a new game once the current one is over.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action; unbound keys yield `None`.
///
/// Arrows, vim keys (`hjkl`) and `wasd` all steer the cursor.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(Action::Cursor(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(Action::Cursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(Action::Cursor(Direction::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
