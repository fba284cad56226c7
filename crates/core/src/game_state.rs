//! Game state module - the Schulte table state machine
//!
//! This module ties together all core components: board generation, target
//! selection, timing, and history. It owns every piece of mutable game state;
//! presentation layers read it through [`GameEngine::snapshot`] and drive it
//! through the action methods.
//!
//! Lifecycle: `Idle -> Running -> (completed) -> Idle`. Completion is a
//! transition rather than a resting phase: the completing click records the
//! run, builds a fresh board, and leaves the engine `Idle`, reporting the
//! result through [`ClickOutcome::Completed`].

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::error::GameError;
use crate::history::{HistoryEntry, HistoryLog};
use crate::snapshot::GameSnapshot;
use crate::target::{FoundSet, TargetSelector};
use crate::timer::{Clock, SystemClock, Timer};
use crate::types::{Alphabet, BoardSize, CellMark, ElapsedTime, MAX_CELLS, WRONG_FLASH_MS};

/// Whether a game is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Settings editable, timer stopped, clicks ignored.
    #[default]
    Idle,
    /// Timer running, settings locked, clicks validated.
    Running,
}

/// Player-selectable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Settings {
    pub size: BoardSize,
    pub alphabet: Alphabet,
    /// Rainbow cell colors. Presentation only.
    pub color_mode: bool,
}

/// Result of clicking a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No game running, or the index is off the board.
    Ignored,
    /// The cell held the target; a new target was chosen.
    Correct { letter: char, next_target: char },
    /// The cell did not hold the target. Nothing changed except the
    /// transient wrong mark.
    Wrong { letter: char, target: char },
    /// The cell held the last unfound letter. The run was recorded.
    Completed(HistoryEntry),
}

/// Complete game state
#[derive(Debug)]
pub struct GameEngine<C: Clock = SystemClock> {
    clock: C,
    rng: StdRng,
    settings: Settings,
    phase: GamePhase,
    board: Option<Board>,
    /// Monotonic id, bumped every time a board is built.
    board_id: u32,
    /// Persistent per-cell marks (`Plain` or `Correct`).
    marks: ArrayVec<CellMark, MAX_CELLS>,
    /// Per-cell deadline of a pending wrong flash.
    wrong_until: ArrayVec<Option<u64>, MAX_CELLS>,
    found: FoundSet,
    /// Distinct letter values on the current board.
    distinct: usize,
    target: Option<char>,
    timer: Timer,
    history: HistoryLog,
    last_result: Option<HistoryEntry>,
    games_completed: u32,
}

impl<C: Clock> GameEngine<C> {
    /// Create an idle engine with an OS-seeded RNG and no board yet.
    pub fn new(settings: Settings, clock: C) -> Self {
        Self::with_rng(settings, clock, StdRng::from_os_rng())
    }

    /// Create an idle engine whose boards and targets are reproducible.
    pub fn with_seed(settings: Settings, clock: C, seed: u64) -> Self {
        Self::with_rng(settings, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, clock: C, rng: StdRng) -> Self {
        Self {
            clock,
            rng,
            settings,
            phase: GamePhase::Idle,
            board: None,
            board_id: 0,
            marks: ArrayVec::new(),
            wrong_until: ArrayVec::new(),
            found: FoundSet::new(),
            distinct: 0,
            target: None,
            timer: Timer::new(),
            history: HistoryLog::new(),
            last_result: None,
            games_completed: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Size and alphabet cannot change while this is true.
    pub fn settings_locked(&self) -> bool {
        self.is_running()
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn board_id(&self) -> u32 {
        self.board_id
    }

    pub fn target(&self) -> Option<char> {
        self.target
    }

    pub fn found(&self) -> &FoundSet {
        &self.found
    }

    /// Distinct letter values on the current board.
    pub fn distinct_letters(&self) -> usize {
        self.distinct
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The most recent completed run, kept across board regeneration.
    pub fn last_result(&self) -> Option<&HistoryEntry> {
        self.last_result.as_ref()
    }

    pub fn games_completed(&self) -> u32 {
        self.games_completed
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Timer value as the once-per-second display shows it.
    pub fn displayed_time(&self) -> ElapsedTime {
        self.timer.displayed()
    }

    /// Exact elapsed time of the running game.
    pub fn elapsed(&self) -> Option<ElapsedTime> {
        self.timer.elapsed(self.clock.now_ms())
    }

    /// What the view should show for cell `index`.
    pub fn mark_at(&self, index: usize) -> CellMark {
        if matches!(self.wrong_until.get(index), Some(Some(_))) {
            return CellMark::Wrong;
        }
        self.marks.get(index).copied().unwrap_or_default()
    }

    /// Build a new board from the current settings.
    ///
    /// While a game is running this stops it first (without recording it).
    pub fn regenerate(&mut self) -> Result<(), GameError> {
        if self.is_running() {
            return self.stop();
        }
        self.rebuild_board()
    }

    /// Start a game on the current board, generating one if none exists.
    ///
    /// Ignored while a game is already running.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.is_running() {
            debug!("start ignored: game already running");
            return Ok(());
        }
        if self.board.as_ref().map_or(true, Board::is_empty) {
            debug!("no board available, generating one before start");
            self.rebuild_board()?;
        }

        self.clear_round();
        let Some(board) = self.board.as_ref() else {
            return Ok(());
        };
        self.target = TargetSelector::pick(board, &self.found, &mut self.rng);
        self.phase = GamePhase::Running;
        self.timer.start(self.clock.now_ms());

        info!(
            board_id = self.board_id,
            side = self.settings.size.side(),
            alphabet = self.settings.alphabet.as_str(),
            "game started"
        );
        Ok(())
    }

    /// Abort the running game without recording it and build a new board.
    ///
    /// Also usable while idle, where it simply rebuilds the board.
    pub fn stop(&mut self) -> Result<(), GameError> {
        if let Some(elapsed) = self.timer.stop(self.clock.now_ms()) {
            info!(
                board_id = self.board_id,
                found = self.found.len(),
                elapsed = %elapsed,
                "game stopped"
            );
        }
        self.phase = GamePhase::Idle;
        self.rebuild_board()
    }

    /// Click cell `index`.
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        if !self.is_running() {
            return ClickOutcome::Ignored;
        }
        let (Some(letter), Some(target)) = (self.board.as_ref().and_then(|b| b.get(index)), self.target)
        else {
            warn!(index, "click outside the board ignored");
            return ClickOutcome::Ignored;
        };

        if letter != target {
            let until = self.clock.now_ms() + WRONG_FLASH_MS;
            if let Some(slot) = self.wrong_until.get_mut(index) {
                *slot = Some(until);
            }
            debug!(index, %letter, %target, "wrong cell");
            return ClickOutcome::Wrong { letter, target };
        }

        self.found.insert(letter);
        if let Some(mark) = self.marks.get_mut(index) {
            *mark = CellMark::Correct;
        }

        let next = self
            .board
            .as_ref()
            .and_then(|b| TargetSelector::pick(b, &self.found, &mut self.rng));
        match next {
            Some(next_target) => {
                self.target = Some(next_target);
                debug!(index, %letter, %next_target, "correct cell");
                ClickOutcome::Correct {
                    letter,
                    next_target,
                }
            }
            None => ClickOutcome::Completed(self.complete()),
        }
    }

    /// Service time-based state. Call regularly from the UI loop.
    ///
    /// Expires wrong flashes and refreshes the timer display. Returns true
    /// when anything visible changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_ms();
        let mut changed = false;

        for slot in self.wrong_until.iter_mut() {
            if matches!(*slot, Some(until) if now >= until) {
                *slot = None;
                changed = true;
            }
        }

        changed |= self.timer.sample(now);
        changed
    }

    pub fn set_size(&mut self, size: BoardSize) -> Result<(), GameError> {
        self.ensure_unlocked()?;
        if self.settings.size == size && self.board.is_some() {
            return Ok(());
        }
        self.settings.size = size;
        self.rebuild_board()
    }

    pub fn set_alphabet(&mut self, alphabet: Alphabet) -> Result<(), GameError> {
        self.ensure_unlocked()?;
        if self.settings.alphabet == alphabet && self.board.is_some() {
            return Ok(());
        }
        self.settings.alphabet = alphabet;
        self.rebuild_board()
    }

    pub fn cycle_alphabet(&mut self) -> Result<(), GameError> {
        self.set_alphabet(self.settings.alphabet.next())
    }

    /// Color mode only affects rendering and may change at any time.
    pub fn toggle_color_mode(&mut self) -> bool {
        self.settings.color_mode = !self.settings.color_mode;
        self.settings.color_mode
    }

    pub fn clear_history(&mut self) {
        info!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// Immutable view of everything the presentation layer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its storage.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.phase = self.phase;
        out.settings = self.settings;
        out.board_id = self.board_id;
        if let Some(board) = self.board.as_ref() {
            out.size = board.size();
            out.letters.extend(board.letters().iter().copied());
            out.marks.extend((0..board.len()).map(|i| self.mark_at(i)));
        } else {
            out.size = self.settings.size;
        }
        out.target = self.target;
        out.time = self.timer.displayed();
        out.found = self.found.len();
        out.distinct = self.distinct;
        out.last_result = self.last_result.as_ref().map(HistoryEntry::time);
        out.history_len = self.history.len();
    }

    fn ensure_unlocked(&self) -> Result<(), GameError> {
        if self.settings_locked() {
            warn!("settings change refused while game is running");
            return Err(GameError::SettingsLocked);
        }
        Ok(())
    }

    /// Record the finished run, then return to idle on a fresh board.
    fn complete(&mut self) -> HistoryEntry {
        let elapsed = self
            .timer
            .stop(self.clock.now_ms())
            .unwrap_or(ElapsedTime::ZERO);
        let size = self
            .board
            .as_ref()
            .map_or(self.settings.size, Board::size);
        let entry = HistoryEntry::new(
            self.clock.local_now(),
            self.settings.alphabet,
            size,
            elapsed,
        );

        self.history.append(entry.clone());
        self.last_result = Some(entry.clone());
        self.games_completed += 1;
        self.phase = GamePhase::Idle;
        info!(
            board_id = self.board_id,
            time = %elapsed,
            games = self.games_completed,
            "game completed"
        );

        if let Err(err) = self.rebuild_board() {
            warn!(%err, "could not build the next board");
        }
        entry
    }

    /// Reset round state and build a new board.
    ///
    /// On failure the board is cleared, so a later `start` retries.
    fn rebuild_board(&mut self) -> Result<(), GameError> {
        self.clear_round();
        self.timer.reset();
        self.board = None;
        self.marks.clear();
        self.wrong_until.clear();
        self.distinct = 0;

        let board = Board::generate(
            self.settings.alphabet.letters(),
            self.settings.size,
            &mut self.rng,
        )?;
        self.marks.extend((0..board.len()).map(|_| CellMark::Plain));
        self.wrong_until.extend((0..board.len()).map(|_| None));
        self.distinct = board.distinct_letters().len();
        self.board = Some(board);
        self.board_id = self.board_id.wrapping_add(1);
        Ok(())
    }

    /// Forget found letters, target, and cell feedback of the current board.
    fn clear_round(&mut self) {
        self.found.clear();
        self.target = None;
        self.marks.iter_mut().for_each(|m| *m = CellMark::Plain);
        self.wrong_until.iter_mut().for_each(|w| *w = None);
    }

    /// Replace the board with explicit letters. Only valid while idle.
    pub fn load_board(&mut self, board: Board) -> Result<(), GameError> {
        self.ensure_unlocked()?;
        self.clear_round();
        self.timer.reset();
        self.settings.size = board.size();
        self.marks.clear();
        self.marks.extend((0..board.len()).map(|_| CellMark::Plain));
        self.wrong_until.clear();
        self.wrong_until.extend((0..board.len()).map(|_| None));
        self.distinct = board.distinct_letters().len();
        self.board = Some(board);
        self.board_id = self.board_id.wrapping_add(1);
        Ok(())
    }
}
