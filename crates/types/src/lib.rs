//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! A Schulte table is always square. Supported side lengths are 3 through 7,
//! so a board holds between 9 and [`MAX_CELLS`] (49) letters.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | UI loop poll interval |
//! | `DISPLAY_SAMPLE_MS` | 1000 | Timer display refresh interval |
//! | `WRONG_FLASH_MS` | 500 | How long a wrong click stays highlighted |
//!
//! # Examples
//!
//! ```
//! use schulte_types::{Alphabet, BoardSize, ElapsedTime, GameAction};
//!
//! let size = BoardSize::from_side(5).unwrap();
//! assert_eq!(size.cells(), 25);
//!
//! assert_eq!(Alphabet::English.letters().len(), 26);
//! assert_eq!(Alphabet::Ukrainian.letters().len(), 33);
//!
//! let t = ElapsedTime::from_millis(83_999);
//! assert_eq!(t.to_string(), "01:23");
//!
//! assert_eq!(GameAction::from_str("clearHistory"), Some(GameAction::ClearHistory));
//! ```

use std::fmt;

/// Largest supported board side.
pub const MAX_SIDE: u8 = 7;

/// Smallest supported board side.
pub const MIN_SIDE: u8 = 3;

/// Upper bound on the number of cells of any board (7x7).
pub const MAX_CELLS: usize = (MAX_SIDE as usize) * (MAX_SIDE as usize);

/// UI loop poll interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// The timer display is refreshed once per second.
pub const DISPLAY_SAMPLE_MS: u64 = 1000;

/// A wrong click stays highlighted for 500ms.
pub const WRONG_FLASH_MS: u64 = 500;

const ENGLISH_LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const UKRAINIAN_LETTERS: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Ґ', 'Д', 'Е', 'Є', 'Ж', 'З', 'И', 'І', 'Ї', 'Й', 'К', 'Л', 'М', 'Н', 'О',
    'П', 'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ь', 'Ю', 'Я',
];

/// The two letter sets a table can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// Latin A-Z (26 letters)
    #[default]
    English,
    /// Ukrainian Cyrillic (33 letters)
    Ukrainian,
}

impl Alphabet {
    pub const ALL: [Alphabet; 2] = [Alphabet::English, Alphabet::Ukrainian];

    /// Letters in alphabetical order. Every letter is unique.
    pub fn letters(&self) -> &'static [char] {
        match self {
            Alphabet::English => &ENGLISH_LETTERS,
            Alphabet::Ukrainian => &UKRAINIAN_LETTERS,
        }
    }

    /// Human readable name, as shown in the settings line and history rows.
    pub fn display_name(&self) -> &'static str {
        match self {
            Alphabet::English => "English",
            Alphabet::Ukrainian => "Ukrainian",
        }
    }

    /// Parse alphabet from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use schulte_types::Alphabet;
    ///
    /// assert_eq!(Alphabet::from_str("english"), Some(Alphabet::English));
    /// assert_eq!(Alphabet::from_str("UA"), Some(Alphabet::Ukrainian));
    /// assert_eq!(Alphabet::from_str("klingon"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" | "latin" => Some(Alphabet::English),
            "ukrainian" | "ua" | "uk" | "cyrillic" => Some(Alphabet::Ukrainian),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Alphabet::English => "english",
            Alphabet::Ukrainian => "ukrainian",
        }
    }

    /// The next alphabet in selector order (wraps around).
    pub fn next(&self) -> Self {
        match self {
            Alphabet::English => Alphabet::Ukrainian,
            Alphabet::Ukrainian => Alphabet::English,
        }
    }
}

/// Side length of a square board, always within `MIN_SIDE..=MAX_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(u8);

impl BoardSize {
    pub const ALL: [BoardSize; 5] = [
        BoardSize(3),
        BoardSize(4),
        BoardSize(5),
        BoardSize(6),
        BoardSize(7),
    ];

    /// Build a size from its side length.
    ///
    /// # Examples
    ///
    /// ```
    /// use schulte_types::BoardSize;
    ///
    /// assert!(BoardSize::from_side(3).is_some());
    /// assert!(BoardSize::from_side(7).is_some());
    /// assert!(BoardSize::from_side(2).is_none());
    /// assert!(BoardSize::from_side(8).is_none());
    /// ```
    pub fn from_side(side: u8) -> Option<Self> {
        if (MIN_SIDE..=MAX_SIDE).contains(&side) {
            Some(Self(side))
        } else {
            None
        }
    }

    pub fn side(&self) -> u8 {
        self.0
    }

    /// Total number of cells (`side * side`).
    pub fn cells(&self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.0, self.0)
    }
}

/// Elapsed game time truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ElapsedTime {
    total_secs: u64,
}

impl ElapsedTime {
    pub const ZERO: ElapsedTime = ElapsedTime { total_secs: 0 };

    pub fn from_secs(total_secs: u64) -> Self {
        Self { total_secs }
    }

    /// Sub-second remainders are dropped, never rounded up.
    pub fn from_millis(ms: u64) -> Self {
        Self {
            total_secs: ms / 1000,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn minutes(&self) -> u64 {
        self.total_secs / 60
    }

    pub fn seconds(&self) -> u64 {
        self.total_secs % 60
    }
}

/// `MM:SS`, each part padded to at least two digits.
///
/// ```
/// use schulte_types::ElapsedTime;
///
/// assert_eq!(ElapsedTime::from_secs(0).to_string(), "00:00");
/// assert_eq!(ElapsedTime::from_secs(61).to_string(), "01:01");
/// assert_eq!(ElapsedTime::from_secs(100 * 60 + 5).to_string(), "100:05");
/// ```
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

/// Cardinal direction for the keyboard selection cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// User intents produced by the input layer.
///
/// Each one maps to a control of the game screen: the start/generate/stop
/// buttons, the size and alphabet selectors, the color mode toggle and the
/// history clear button. Cursor actions let a keyboard-only player pick cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a new run on the current board
    Start,
    /// Build a fresh board (resets a running game)
    Regenerate,
    /// Abort the running game without recording it
    Stop,
    /// Forget all completed runs
    ClearHistory,
    /// Toggle per-cell rainbow coloring
    ToggleColorMode,
    /// Switch to the next alphabet
    CycleAlphabet,
    /// Pick a board size
    SetSize(BoardSize),
    /// Move the selection cursor
    MoveCursor(Direction),
    /// Click the cell under the selection cursor
    SelectCursor,
}

impl GameAction {
    /// Parse a parameterless action from its camelCase name.
    ///
    /// # Examples
    ///
    /// ```
    /// use schulte_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("toggleColorMode"), Some(GameAction::ToggleColorMode));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "regenerate" => Some(GameAction::Regenerate),
            "stop" => Some(GameAction::Stop),
            "clearhistory" => Some(GameAction::ClearHistory),
            "togglecolormode" => Some(GameAction::ToggleColorMode),
            "cyclealphabet" => Some(GameAction::CycleAlphabet),
            "selectcursor" => Some(GameAction::SelectCursor),
            _ => None,
        }
    }

    /// camelCase name, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Regenerate => "regenerate",
            GameAction::Stop => "stop",
            GameAction::ClearHistory => "clearHistory",
            GameAction::ToggleColorMode => "toggleColorMode",
            GameAction::CycleAlphabet => "cycleAlphabet",
            GameAction::SetSize(_) => "setSize",
            GameAction::MoveCursor(_) => "moveCursor",
            GameAction::SelectCursor => "selectCursor",
        }
    }
}

/// Per-cell feedback state shown by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellMark {
    #[default]
    Plain,
    /// The cell was clicked while its letter was the target.
    Correct,
    /// The cell was clicked while it was not the target (transient).
    Wrong,
}
