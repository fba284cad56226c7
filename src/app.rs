//! Application glue: routes input to the engine and the engine to the view.
//!
//! `App` owns the pieces of UI state that are not game rules, namely the
//! keyboard selection cursor and the view layout used to hit-test mouse
//! clicks. It is generic over the clock so the whole input-to-frame path can
//! run under simulated time in tests.

use tracing::{debug, warn};

use crate::core::{Board, ClickOutcome, Clock, GameEngine, GameError, SystemClock};
use crate::term::{frame_fingerprint, FrameBuffer, GameView, Viewport};
use crate::types::{Direction, GameAction};

pub struct App<C: Clock = SystemClock> {
    engine: GameEngine<C>,
    view: GameView,
    cursor: usize,
}

impl<C: Clock> App<C> {
    pub fn new(engine: GameEngine<C>) -> Self {
        Self::with_view(engine, GameView::default())
    }

    pub fn with_view(engine: GameEngine<C>, view: GameView) -> Self {
        Self {
            engine,
            view,
            cursor: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine<C> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<C> {
        &mut self.engine
    }

    /// Keyboard selection, clamped to the current board.
    pub fn cursor(&self) -> usize {
        let cells = self.engine.board().map_or(0, Board::len);
        self.cursor.min(cells.saturating_sub(1))
    }

    /// Apply one user intent. Refused operations are logged and otherwise
    /// leave the game untouched.
    pub fn apply_action(&mut self, action: GameAction) -> Option<ClickOutcome> {
        debug!(action = action.as_str(), "action");
        let result: Result<(), GameError> = match action {
            GameAction::Start => self.engine.start(),
            GameAction::Regenerate => self.engine.regenerate(),
            GameAction::Stop => self.engine.stop(),
            GameAction::ClearHistory => {
                self.engine.clear_history();
                Ok(())
            }
            GameAction::ToggleColorMode => {
                self.engine.toggle_color_mode();
                Ok(())
            }
            GameAction::CycleAlphabet => self.engine.cycle_alphabet(),
            GameAction::SetSize(size) => self.engine.set_size(size),
            GameAction::MoveCursor(direction) => {
                self.move_cursor(direction);
                Ok(())
            }
            GameAction::SelectCursor => return Some(self.engine.click(self.cursor())),
        };

        if let Err(err) = result {
            warn!(action = action.as_str(), %err, "action refused");
        }
        None
    }

    /// Mouse click at a terminal position. Returns `None` if it missed the grid.
    pub fn click_at(&mut self, column: u16, row: u16) -> Option<ClickOutcome> {
        let size = self.engine.board()?.size();
        let index = self.view.hit_test(size, column, row)?;
        self.cursor = index;
        Some(self.engine.click(index))
    }

    /// Service engine timers. Returns true when the screen needs a redraw.
    pub fn tick(&mut self) -> bool {
        self.engine.tick()
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let snap = self.engine.snapshot();
        self.view.render_into(
            &snap,
            self.engine.history(),
            Some(self.cursor()),
            viewport,
            fb,
        );
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }

    /// Changes whenever the next frame would differ from the last one.
    pub fn fingerprint(&self, viewport: Viewport) -> u64 {
        frame_fingerprint(&self.engine.snapshot(), Some(self.cursor()), viewport)
    }

    fn move_cursor(&mut self, direction: Direction) {
        let Some(board) = self.engine.board() else {
            return;
        };
        let size = board.size();
        let side = size.side();
        let (row, col) = Board::position_of(size, self.cursor());
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(side - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(side - 1)),
        };
        self.cursor = Board::index_of(size, row, col);
    }
}
