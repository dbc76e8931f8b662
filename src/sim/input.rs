//! Click/tap hit testing
//!
//! A click either lands on a live object (caught) or ends the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{CatchFlash, GameEvent, GameState, SessionSummary};
use super::tick::{advance_stage, end_session};

/// Result of a click/tap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputOutcome {
    /// Session not running; nothing happened
    Ignored,
    /// An object was caught and removed
    Caught { id: u32, score: u64 },
    /// The click missed every object and ended the session
    Ended(SessionSummary),
}

/// Handle a click/tap at `pos` (play-area coordinates)
///
/// Objects are tested newest first so overlapping objects resolve to the
/// most recently spawned one.
pub fn handle_input(state: &mut GameState, pos: Vec2) -> InputOutcome {
    if !state.is_running() {
        return InputOutcome::Ignored;
    }

    let hit = state
        .objects
        .iter()
        .rposition(|o| state.object_bounds(o).contains_point(pos));

    let Some(index) = hit else {
        return InputOutcome::Ended(end_session(state));
    };

    let caught = state.objects.remove(index);
    state.score += state.tuning.catch_bonus;
    state.flashes.push(CatchFlash {
        lane: caught.lane,
        y: caught.y,
        remaining_ms: state.tuning.catch_flash_ms,
    });
    state.events.push(GameEvent::Caught {
        id: caught.id,
        lane: caught.lane,
        score: state.score,
    });
    advance_stage(state);

    InputOutcome::Caught {
        id: caught.id,
        score: state.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    fn running_state() -> GameState {
        let mut state = GameState::new(3, Tuning::default());
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_hit_catches_object() {
        let mut state = running_state();
        let id = state.spawn_object(1);
        state.objects[0].y = 100.0;
        let center = state.object_bounds(&state.objects[0]).center();

        let outcome = handle_input(&mut state, center);
        assert_eq!(outcome, InputOutcome::Caught { id, score: 10 });
        assert_eq!(state.score, 10);
        assert!(state.objects.is_empty());
        assert!(state.is_running());
        assert_eq!(state.flashes.len(), 1);
        assert_eq!(state.flashes[0].lane, 1);
    }

    #[test]
    fn test_miss_ends_session_score_unchanged() {
        let mut state = running_state();
        state.score = 40;
        state.spawn_object(0);
        state.objects[0].y = 100.0;

        // Lane 3 is empty
        let outcome = handle_input(&mut state, Vec2::new(350.0, 130.0));
        match outcome {
            InputOutcome::Ended(summary) => {
                assert_eq!(summary.score, 40);
                assert_eq!(summary.stage, 1);
            }
            other => panic!("expected Ended, got {:?}", other),
        }
        assert!(state.is_over());
        assert_eq!(state.score, 40);
        assert!(state.objects.is_empty());
    }

    #[test]
    fn test_gap_between_object_and_lane_edge_is_a_miss() {
        let mut state = running_state();
        state.spawn_object(0);
        state.objects[0].y = 100.0;
        // Lane 0 spans x 0..100, object spans 10..90
        let outcome = handle_input(&mut state, Vec2::new(5.0, 130.0));
        assert!(matches!(outcome, InputOutcome::Ended(_)));
    }

    #[test]
    fn test_overlap_prefers_newest() {
        let mut state = running_state();
        let older = state.spawn_object(2);
        let newer = state.spawn_object(2);
        state.objects[0].y = 100.0;
        state.objects[1].y = 130.0;

        let outcome = handle_input(&mut state, Vec2::new(250.0, 150.0));
        assert_eq!(outcome, InputOutcome::Caught { id: newer, score: 10 });
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].id, older);
    }

    #[test]
    fn test_input_ignored_when_not_running() {
        let mut state = GameState::new(3, Tuning::default());
        assert_eq!(handle_input(&mut state, Vec2::ZERO), InputOutcome::Ignored);
        assert_eq!(state.phase, GamePhase::NotStarted);

        state.phase = GamePhase::Over;
        assert_eq!(handle_input(&mut state, Vec2::ZERO), InputOutcome::Ignored);
    }

    #[test]
    fn test_catch_recomputes_stage() {
        let mut state = running_state();
        state.score = 90;
        state.spawn_object(0);
        let center = state.object_bounds(&state.objects[0]).center();
        handle_input(&mut state, center);
        assert_eq!(state.score, 100);
        assert_eq!(state.stage, 2);
        assert!((state.drop_speed - 2.3).abs() < 1e-5);
    }
}
