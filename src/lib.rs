//! Lane Drop - a lane-based falling block tap game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, scoring, stars)
//! - `controller`: Session API driven by the host loop
//! - `platform`: Render hook seam between simulation and presentation
//! - `renderer`: Canvas 2D (web) and text (native) presenters
//! - `tuning`: Data-driven game balance

pub mod controller;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use controller::GameController;
pub use platform::{FrameView, Presenter};
pub use sim::{GameEvent, GamePhase, InputOutcome, SessionSummary};
pub use tuning::{Tuning, TuningError};
