//! Per-frame simulation step
//!
//! Advances a running session by a caller-supplied frame delta. Time only
//! moves when the host says so; nothing here reads a clock.

use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState, SessionSummary};

/// Advance the game state by `elapsed_ms`
///
/// No-op unless the session is running. Negative or non-finite deltas are
/// treated as zero.
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R, elapsed_ms: f64) {
    if state.phase != GamePhase::Running {
        return;
    }
    let elapsed_ms = sanitize_elapsed(elapsed_ms);

    spawn_step(state, rng);

    if fall_step(state, elapsed_ms) {
        end_session(state);
        return;
    }

    advance_stage(state);
    advance_stars(state, elapsed_ms);
    age_flashes(state, elapsed_ms);
}

/// Clamp a frame delta to a finite, non-negative value
#[inline]
pub fn sanitize_elapsed(elapsed_ms: f64) -> f64 {
    if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        elapsed_ms
    } else {
        0.0
    }
}

/// Maybe spawn one object in a random lane
fn spawn_step<R: Rng>(state: &mut GameState, rng: &mut R) {
    let roll: f32 = rng.random();
    if roll < state.spawn_rate {
        let lane = rng.random_range(0..state.tuning.lane_count.max(1));
        state.spawn_object(lane);
    }
}

/// Move every object down; returns true if any reached the bottom edge
fn fall_step(state: &mut GameState, elapsed_ms: f64) -> bool {
    let dy = state.drop_speed * elapsed_ms as f32 * state.tuning.fall_scale;
    for object in &mut state.objects {
        object.y += dy;
    }
    any_escaped(state)
}

/// True if any live object has reached the bottom edge
pub fn any_escaped(state: &GameState) -> bool {
    let bottom = state.area.height;
    state.objects.iter().any(|o| o.y >= bottom)
}

/// Bring the stage in line with the score, bumping difficulty once per
/// stage gained
pub fn advance_stage(state: &mut GameState) {
    let target = state.stage_for_score();
    while state.stage < target {
        state.stage += 1;

        let t = &state.tuning;
        if state.stage <= t.stage_cap {
            state.drop_speed += t.drop_speed_step;
            state.spawn_rate += t.spawn_rate_step;
        }
        if state.endless {
            state.drop_speed += t.endless_drop_speed_step;
            state.spawn_rate += t.endless_spawn_rate_step;
        }
        state.spawn_rate = state.spawn_rate.min(1.0);

        log::debug!(
            "Stage {}: drop_speed={:.2}, spawn_rate={:.4}",
            state.stage,
            state.drop_speed,
            state.spawn_rate
        );
        state.events.push(GameEvent::StageUp { stage: state.stage });
    }
}

/// Accumulate survival time and award stars, carrying the remainder
fn advance_stars(state: &mut GameState, elapsed_ms: f64) {
    state.star_timer += elapsed_ms;

    let interval = state.tuning.star_interval_ms;
    while state.star_timer >= interval && state.stars < state.tuning.max_stars {
        state.stars += 1;
        state.star_timer -= interval;
        log::debug!("Star {} earned", state.stars);
        state.events.push(GameEvent::StarEarned { stars: state.stars });

        if state.stars == state.tuning.max_stars && !state.endless {
            state.endless = true;
            log::info!("Endless mode entered at stage {}", state.stage);
            state.events.push(GameEvent::EndlessEntered);
        }
    }
}

/// Count down caught-object animations
fn age_flashes(state: &mut GameState, elapsed_ms: f64) {
    for flash in &mut state.flashes {
        flash.remaining_ms -= elapsed_ms;
    }
    state.flashes.retain(|f| f.remaining_ms > 0.0);
}

/// End the session and report its final numbers
///
/// Idempotent: ending an already-ended session changes nothing.
pub fn end_session(state: &mut GameState) -> SessionSummary {
    let summary = state.summary();
    if state.phase == GamePhase::Over {
        return summary;
    }

    state.phase = GamePhase::Over;
    state.objects.clear();
    state.flashes.clear();
    state.events.push(GameEvent::SessionEnded(summary));
    log::info!(
        "Session over: score={}, stage={}, stars={}",
        summary.score,
        summary.stage,
        summary.stars
    );
    summary
}
