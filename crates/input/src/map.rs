//! Key mapping from terminal events to game actions.

use crate::types::{BoardSize, Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Buttons
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Start),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::Regenerate),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc => Some(GameAction::Stop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::ClearHistory),

        // Settings
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleColorMode),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::CycleAlphabet),
        KeyCode::Char(d @ '3'..='7') => {
            let side = d.to_digit(10)? as u8;
            BoardSize::from_side(side).map(GameAction::SetSize)
        }

        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::MoveCursor(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::MoveCursor(Direction::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::SelectCursor),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
