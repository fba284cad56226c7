use arrayvec::ArrayVec;

use crate::game_state::{GamePhase, Settings};
use crate::types::{BoardSize, CellMark, ElapsedTime, MAX_CELLS};

/// Read-only copy of everything the view draws.
///
/// Hashable, so renderers can fingerprint it and skip redundant frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub settings: Settings,
    /// Side of the current board (settings size if there is no board).
    pub size: BoardSize,
    pub board_id: u32,
    /// Row-major letters; empty when no board has been generated.
    pub letters: ArrayVec<char, MAX_CELLS>,
    /// Row-major cell feedback, same length as `letters`.
    pub marks: ArrayVec<CellMark, MAX_CELLS>,
    pub target: Option<char>,
    /// Timer as displayed (sampled once per second).
    pub time: ElapsedTime,
    /// Distinct letter values found so far.
    pub found: usize,
    /// Distinct letter values on the board.
    pub distinct: usize,
    /// Time of the most recent completed run.
    pub last_result: Option<ElapsedTime>,
    pub history_len: usize,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = GamePhase::Idle;
        self.settings = Settings::default();
        self.size = BoardSize::default();
        self.board_id = 0;
        self.letters.clear();
        self.marks.clear();
        self.target = None;
        self.time = ElapsedTime::ZERO;
        self.found = 0;
        self.distinct = 0;
        self.last_result = None;
        self.history_len = 0;
    }

    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn settings_locked(&self) -> bool {
        self.running()
    }

    pub fn cell(&self, index: usize) -> Option<(char, CellMark)> {
        let ch = *self.letters.get(index)?;
        let mark = self.marks.get(index).copied().unwrap_or_default();
        Some((ch, mark))
    }
}
