//! Terminal Schulte table runner (default binary).
//!
//! It uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use schulte_tui::app::App;
use schulte_tui::config::AppConfig;
use schulte_tui::core::{GameEngine, SystemClock};
use schulte_tui::input::{click_position, handle_key_event, should_quit};
use schulte_tui::logging;
use schulte_tui::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use schulte_tui::types::TICK_MS;

/// Unchanged frames are still redrawn this often.
const IDLE_REDRAW_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting after error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let clock = SystemClock::new();
    let engine = match config.seed {
        Some(seed) => GameEngine::with_seed(config.settings, clock, seed),
        None => GameEngine::new(config.settings, clock),
    };
    let mut app = App::new(engine);
    app.engine_mut().regenerate()?;
    tracing::info!(
        side = config.settings.size.side(),
        alphabet = config.settings.alphabet.as_str(),
        "ready"
    );

    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint(viewport)) {
            app.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pos) = click_position(mouse) {
                        app.click_at(pos.column, pos.row);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick();
        }
    }
}
