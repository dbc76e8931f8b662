//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only by caller-supplied frame deltas
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod input;
pub mod state;
pub mod tick;

pub use bounds::{Bounds, PlayArea, object_bounds};
pub use input::{InputOutcome, handle_input};
pub use state::{CatchFlash, FallingObject, GameEvent, GamePhase, GameState, SessionSummary};
pub use tick::{advance_stage, any_escaped, end_session, sanitize_elapsed, tick};
