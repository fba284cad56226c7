//! Errors surfaced by the game engine.

use thiserror::Error;

/// Reasons the engine refuses an operation.
///
/// None of these are fatal: callers log them and leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A board cannot be filled from zero letters.
    #[error("cannot build a board from an empty alphabet")]
    EmptyAlphabet,
    /// Board size and alphabet cannot change while a game is running.
    #[error("settings are locked while a game is running")]
    SettingsLocked,
}
