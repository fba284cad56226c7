//! Skip redraws when nothing on screen would change.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;
use crate::game_view::Viewport;

/// Hash of everything that affects a frame.
pub fn frame_fingerprint(snap: &GameSnapshot, cursor: Option<usize>, viewport: Viewport) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.hash(&mut hasher);
    cursor.hash(&mut hasher);
    viewport.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    max_idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    /// `max_idle_interval_ms` bounds how long an unchanged frame goes
    /// without a refresh (history timestamps tick over, terminals lose state).
    pub fn new(max_idle_interval_ms: u64) -> Self {
        Self {
            max_idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders on the first call, whenever the fingerprint changes, and
    /// otherwise at most once per `max_idle_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.max_idle_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}
