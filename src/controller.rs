//! Game controller
//!
//! Owns the session state and its RNG and exposes the small API a host
//! loop drives: session controls, clicks and frame ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::FrameView;
use crate::sim::{
    self, GameEvent, GamePhase, GameState, InputOutcome, PlayArea, SessionSummary,
};
use crate::tuning::Tuning;

/// Single owner of all mutable game state
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    rng: Pcg32,
}

impl GameController {
    /// Create a controller with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to place objects
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Report the play-area size (e.g. after a resize)
    ///
    /// Shrinking the area below a live object counts as that object escaping.
    pub fn set_play_area(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::warn!("Ignoring invalid play area {}x{}", width, height);
            return;
        }
        self.state.area = PlayArea::new(width, height);
        if self.state.is_running() && sim::any_escaped(&self.state) {
            sim::end_session(&mut self.state);
        }
    }

    /// Begin a session; no-op unless on the start screen
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::NotStarted {
            return;
        }
        self.state.phase = GamePhase::Running;
        self.state.last_frame_time = None;
        log::info!("Session started");
    }

    /// Return to the start screen with fresh session values
    pub fn reset(&mut self) {
        self.state.reset();
        log::info!("Session reset");
    }

    /// Handle a click/tap in play-area coordinates
    pub fn handle_input(&mut self, pos: Vec2) -> InputOutcome {
        sim::handle_input(&mut self.state, pos)
    }

    /// Advance the simulation by a frame delta
    pub fn tick(&mut self, elapsed_ms: f64) {
        sim::tick(&mut self.state, &mut self.rng, elapsed_ms);
    }

    /// Advance using an absolute host timestamp
    ///
    /// The first frame after `start` only records the timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        if !self.state.is_running() {
            return;
        }
        let elapsed = match self.state.last_frame_time {
            Some(prev) => now_ms - prev,
            None => 0.0,
        };
        self.state.last_frame_time = Some(now_ms);
        self.tick(elapsed);
    }

    /// End the session (safe to call repeatedly)
    pub fn end_session(&mut self) -> SessionSummary {
        sim::end_session(&mut self.state)
    }

    /// Borrow everything the render hook needs
    pub fn view(&self) -> FrameView<'_> {
        FrameView::new(&self.state)
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Center of the lowest live object (idle/demo mode aim point)
    pub fn autoplay_target(&self) -> Option<Vec2> {
        self.state
            .objects
            .iter()
            .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
            .map(|o| self.state.object_bounds(o).center())
    }
}
