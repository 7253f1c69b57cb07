//! Key mapping from terminal events to demo actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::BlockAction;

/// Map a key press to a Tetris action (arrows, WASD or vim keys).
pub fn block_action(key: KeyEvent) -> Option<BlockAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(BlockAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(BlockAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(BlockAction::SoftDrop)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(BlockAction::Rotate)
        }
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(BlockAction::Restart),
        _ => None,
    }
}

/// Check if a key should quit the current demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
