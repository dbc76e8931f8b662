//! Game state and core simulation types
//!
//! Everything a session needs lives in `GameState`; the presentation layer
//! only ever reads it.

use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, PlayArea, object_bounds};
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen
    #[default]
    NotStarted,
    /// Objects falling, input live
    Running,
    /// Session ended (miss or escaped object); only reset leaves this
    Over,
}

/// A falling object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    /// Unique id, allocated in creation order
    pub id: u32,
    pub lane: u32,
    /// Top edge in play-area pixels (negative while entering)
    pub y: f32,
}

/// A caught object kept around for its "clicked" animation only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatchFlash {
    pub lane: u32,
    pub y: f32,
    /// Milliseconds left before the flash disappears
    pub remaining_ms: f64,
}

/// Final numbers of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u64,
    pub stage: u32,
    pub stars: u8,
    pub endless: bool,
}

/// Notable things that happened since the host last drained events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, lane: u32 },
    Caught { id: u32, lane: u32, score: u64 },
    StageUp { stage: u32 },
    StarEarned { stars: u8 },
    EndlessEntered,
    SessionEnded(SessionSummary),
}

/// Complete game state (deterministic given the seed and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values this session runs with
    pub tuning: Tuning,
    /// Play-area size reported by the host
    pub area: PlayArea,
    pub phase: GamePhase,
    pub score: u64,
    /// Difficulty tier, always `score / points_per_stage + 1`
    pub stage: u32,
    /// Stars earned by survival time (0..=max_stars)
    pub stars: u8,
    /// Set once all stars are earned; never cleared within a session
    pub endless: bool,
    pub drop_speed: f32,
    /// Per-frame spawn probability
    pub spawn_rate: f32,
    /// Milliseconds accumulated toward the next star
    pub star_timer: f64,
    /// Host timestamp of the previous frame (None until the first frame)
    pub last_frame_time: Option<f64>,
    /// Live objects (sorted by id, oldest first)
    pub objects: Vec<FallingObject>,
    /// Caught-object animations (not gameplay-affecting)
    #[serde(skip)]
    pub flashes: Vec<CatchFlash>,
    /// Pending events for the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh, not-yet-started state
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            area: PlayArea::default(),
            phase: GamePhase::NotStarted,
            score: 0,
            stage: 1,
            stars: 0,
            endless: false,
            drop_speed: tuning.base_drop_speed,
            spawn_rate: tuning.base_spawn_rate,
            star_timer: 0.0,
            last_frame_time: None,
            objects: Vec::new(),
            flashes: Vec::new(),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Restore every session value to its initial state
    ///
    /// Seed, tuning and play area are kept.
    pub fn reset(&mut self) {
        *self = Self {
            area: self.area,
            ..Self::new(self.seed, self.tuning.clone())
        };
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an object just above the top edge of `lane`
    pub fn spawn_object(&mut self, lane: u32) -> u32 {
        let id = self.next_entity_id();
        let lane = lane.min(self.tuning.lane_count.saturating_sub(1));
        self.objects.push(FallingObject {
            id,
            lane,
            y: -self.tuning.object_height,
        });
        self.events.push(GameEvent::Spawned { id, lane });
        id
    }

    /// Bounding box of a live object
    pub fn object_bounds(&self, object: &FallingObject) -> Bounds {
        object_bounds(
            &self.area,
            object.lane,
            object.y,
            self.tuning.lane_count,
            self.tuning.object_width_ratio,
            self.tuning.object_height,
        )
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// True only while a session is running
    #[inline]
    pub fn is_started(&self) -> bool {
        self.is_running()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Stage implied by the current score
    pub fn stage_for_score(&self) -> u32 {
        let stage = self.score / self.tuning.points_per_stage.max(1) + 1;
        u32::try_from(stage).unwrap_or(u32::MAX)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            stage: self.stage,
            stars: self.stars,
            endless: self.endless,
        }
    }
}
