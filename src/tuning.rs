//! Data-driven game balance
//!
//! Every gameplay constant lives here so a tester can vary it without
//! touching the simulation. Values can be overridden from a JSON string;
//! fields missing from the JSON keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating tuning values
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Number of lanes objects can fall in
    pub lane_count: u32,
    /// Drop speed at the start of a session
    pub base_drop_speed: f32,
    /// Per-frame spawn probability at the start of a session
    pub base_spawn_rate: f32,
    /// Last stage that still receives the regular difficulty bump
    pub stage_cap: u32,
    /// Score needed per stage
    pub points_per_stage: u64,
    /// Score awarded per caught object
    pub catch_bonus: u64,
    /// Regular per-stage increments
    pub drop_speed_step: f32,
    pub spawn_rate_step: f32,
    /// Extra per-stage increments once endless mode is active
    pub endless_drop_speed_step: f32,
    pub endless_spawn_rate_step: f32,
    /// Milliseconds of play per star
    pub star_interval_ms: f64,
    /// Stars needed to enter endless mode
    pub max_stars: u8,
    /// Pixels fallen per (speed unit * millisecond)
    pub fall_scale: f32,
    /// Object height in play-area pixels
    pub object_height: f32,
    /// Object width as a fraction of its lane width (centered)
    pub object_width_ratio: f32,
    /// How long a caught object lingers for its "clicked" animation
    pub catch_flash_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_count: 4,
            base_drop_speed: 2.0,
            base_spawn_rate: 0.03,
            stage_cap: 50,
            points_per_stage: 100,
            catch_bonus: 10,
            drop_speed_step: 0.3,
            spawn_rate_step: 0.003,
            endless_drop_speed_step: 0.5,
            endless_spawn_rate_step: 0.005,
            star_interval_ms: 10_000.0,
            max_stars: 3,
            fall_scale: 0.1,
            object_height: 60.0,
            object_width_ratio: 0.8,
            catch_flash_ms: 200.0,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.lane_count == 0 {
            return invalid("lane_count", "must be at least 1");
        }
        if !(self.base_drop_speed > 0.0) {
            return invalid("base_drop_speed", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.base_spawn_rate) {
            return invalid("base_spawn_rate", "must be within [0, 1]");
        }
        if self.points_per_stage == 0 {
            return invalid("points_per_stage", "must be at least 1");
        }
        if !(self.star_interval_ms > 0.0) {
            return invalid("star_interval_ms", "must be positive");
        }
        for (field, step) in [
            ("drop_speed_step", self.drop_speed_step),
            ("spawn_rate_step", self.spawn_rate_step),
            ("endless_drop_speed_step", self.endless_drop_speed_step),
            ("endless_spawn_rate_step", self.endless_spawn_rate_step),
        ] {
            if !(step >= 0.0) {
                return invalid(field, "must not be negative");
            }
        }
        if self.max_stars == 0 {
            return invalid("max_stars", "must be at least 1");
        }
        if !(self.fall_scale > 0.0) {
            return invalid("fall_scale", "must be positive");
        }
        if !(self.object_height > 0.0) {
            return invalid("object_height", "must be positive");
        }
        if !(self.object_width_ratio > 0.0 && self.object_width_ratio <= 1.0) {
            return invalid("object_width_ratio", "must be within (0, 1]");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.lane_count, 4);
        assert_eq!(tuning.catch_bonus, 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "lane_count": 6, "catch_bonus": 25 }"#).unwrap();
        assert_eq!(tuning.lane_count, 6);
        assert_eq!(tuning.catch_bonus, 25);
        assert_eq!(tuning.base_drop_speed, 2.0);
        assert_eq!(tuning.star_interval_ms, 10_000.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Tuning::from_json(r#"{ "lane_count": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "lane_count", .. }));

        let err = Tuning::from_json(r#"{ "base_spawn_rate": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "base_spawn_rate", .. }));

        let err = Tuning::from_json(r#"{ "max_stars": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "max_stars", .. }));

        let err = Tuning::from_json(r#"{ "spawn_rate_step": -0.1 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "spawn_rate_step", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ lane_count: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse tuning JSON"));
    }
}
