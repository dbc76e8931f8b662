//! Platform abstraction layer
//!
//! The seam between the simulation and whatever draws it: a borrowed
//! snapshot of the current frame and the trait presenters implement.

use crate::sim::{Bounds, CatchFlash, FallingObject, GamePhase, GameState, PlayArea, object_bounds};

/// Read-only view of one frame for the render hook
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub objects: &'a [FallingObject],
    pub flashes: &'a [CatchFlash],
    pub area: PlayArea,
    pub lane_count: u32,
    pub phase: GamePhase,
    pub score: u64,
    pub stage: u32,
    pub stars: u8,
    pub max_stars: u8,
    pub endless: bool,
    object_width_ratio: f32,
    object_height: f32,
    flash_linger_ms: f64,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            objects: &state.objects,
            flashes: &state.flashes,
            area: state.area,
            lane_count: state.tuning.lane_count,
            phase: state.phase,
            score: state.score,
            stage: state.stage,
            stars: state.stars,
            max_stars: state.tuning.max_stars,
            endless: state.endless,
            object_width_ratio: state.tuning.object_width_ratio,
            object_height: state.tuning.object_height,
            flash_linger_ms: state.tuning.catch_flash_ms,
        }
    }

    /// Screen rectangle for an object (or flash) at `lane`, `y`
    pub fn bounds_at(&self, lane: u32, y: f32) -> Bounds {
        object_bounds(
            &self.area,
            lane,
            y,
            self.lane_count,
            self.object_width_ratio,
            self.object_height,
        )
    }

    /// Flash opacity in [0, 1], fading out over the linger time
    pub fn flash_alpha(&self, flash: &CatchFlash) -> f32 {
        if self.flash_linger_ms <= 0.0 {
            return 0.0;
        }
        (flash.remaining_ms / self.flash_linger_ms).clamp(0.0, 1.0) as f32
    }
}

/// Compose a `class` attribute from a fixed base and one toggled modifier
///
/// Hosts that write the whole attribute must keep the base classes or the
/// element loses its layout.
pub fn class_list(base: &str, modifier: &str, on: bool) -> String {
    match (base.is_empty(), on) {
        (_, false) => base.to_string(),
        (true, true) => modifier.to_string(),
        (false, true) => format!("{} {}", base, modifier),
    }
}

/// Something that can draw a frame (canvas, terminal, log)
pub trait Presenter {
    fn present(&mut self, view: &FrameView<'_>);
}
