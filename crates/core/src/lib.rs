//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed and clock produce identical games
//! - **Testable**: Time is injected through [`Clock`], randomness through a seed
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-light**: Boards and per-cell state live in fixed-capacity arrays
//!
//! # Module Structure
//!
//! - [`board`]: Square letter grid and its generation
//! - [`game_state`]: The `Idle -> Running -> Idle` state machine
//! - [`history`]: Completed runs of the session
//! - [`rng`]: Bag-based letter drawing
//! - [`target`]: Found-set bookkeeping and next-target selection
//! - [`timer`]: Clock capability and the stopwatch
//!
//! # Game Rules
//!
//! - A board of `size * size` letters is drawn from the chosen alphabet,
//!   without repeats when it fits and in shuffled passes when it does not
//! - One random unfound letter is the target; clicking any cell holding it
//!   finds that letter value
//! - A wrong click flashes for 500ms and changes nothing else
//! - Once every letter value is found, the time is recorded in the history
//!
//! # Example
//!
//! ```
//! use schulte_core::{ClickOutcome, GameEngine, ManualClock, Settings};
//!
//! let clock = ManualClock::new();
//! let mut game = GameEngine::with_seed(Settings::default(), clock.clone(), 12345);
//! game.start().unwrap();
//!
//! let target = game.target().unwrap();
//! let index = game.board().unwrap().letters().iter().position(|&c| c == target).unwrap();
//!
//! clock.advance(1_200);
//! assert!(matches!(game.click(index), ClickOutcome::Correct { .. }));
//! assert_eq!(game.found().len(), 1);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod history;
pub mod rng;
pub mod snapshot;
pub mod target;
pub mod timer;

pub use schulte_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use game_state::{ClickOutcome, GameEngine, GamePhase, Settings};
pub use history::{HistoryEntry, HistoryLog};
pub use rng::LetterBag;
pub use snapshot::GameSnapshot;
pub use target::{FoundSet, TargetSelector};
pub use timer::{Clock, ManualClock, SystemClock, Timer};
