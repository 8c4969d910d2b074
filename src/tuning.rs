//! Data-driven game balance
//!
//! Every gameplay constant lives here so a page can override them with a
//! JSON blob. Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::EdgeRule;

/// Errors raised while loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tuning field `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("max_lives must be at least 1")]
    NoLives,
}

/// Game balance constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Collision ===
    /// Whether touching edges count as a collision
    pub edge_rule: EdgeRule,

    // === Character ===
    /// Character speed (units/s)
    pub character_speed: f32,
    /// Lives at the start of a run
    pub max_lives: u8,
    /// Invulnerability window after a hit (s)
    pub recovery_secs: f32,
    /// Hurt flash shown at the start of the recovery window (s)
    pub hurt_flash_secs: f32,

    // === Hazards ===
    pub chaser_speed: f32,
    pub vertical_speed: f32,
    /// Vertical patrol travel either side of the start position
    pub vertical_range: f32,
    pub horizontal_speed: f32,
    /// Horizontal patrol travel either side of the start position
    pub horizontal_range: f32,
    /// Gap kept between a patrol bound and the arena edge
    pub patrol_margin: f32,

    // === Terminal transitions ===
    /// Delay before a defeated level restarts (s)
    pub defeat_restart_secs: f32,
    /// Delay before a completed level advances (s)
    pub complete_advance_secs: f32,
    /// Shown when the last life is lost
    pub defeat_message: String,
    /// Prefix for the final score line on completion
    pub final_score_label: String,

    // === Effects (no gameplay impact) ===
    pub particle_count: u32,
    pub particle_lifetime_secs: f32,
    /// Full width of the random particle scatter
    pub particle_spread: f32,
    pub shake_secs: f32,

    // === Loop ===
    /// Longest frame delta the clock will report (s)
    pub max_frame_delta: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            edge_rule: EdgeRule::Exclusive,

            character_speed: 220.0,
            max_lives: 3,
            recovery_secs: 1.4,
            hurt_flash_secs: 0.6,

            chaser_speed: 140.0,
            vertical_speed: 180.0,
            vertical_range: 160.0,
            horizontal_speed: 200.0,
            horizontal_range: 200.0,
            patrol_margin: 10.0,

            defeat_restart_secs: 2.8,
            complete_advance_secs: 2.6,
            defeat_message: "The adventure isn't over! Try again!".to_string(),
            final_score_label: "Total score".to_string(),

            particle_count: 18,
            particle_lifetime_secs: 0.7,
            particle_spread: 180.0,
            shake_secs: 0.5,

            max_frame_delta: 0.1,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every rate and duration is usable
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.max_lives == 0 {
            return Err(TuningError::NoLives);
        }

        let positive = [
            ("character_speed", self.character_speed),
            ("recovery_secs", self.recovery_secs),
            ("hurt_flash_secs", self.hurt_flash_secs),
            ("chaser_speed", self.chaser_speed),
            ("vertical_speed", self.vertical_speed),
            ("vertical_range", self.vertical_range),
            ("horizontal_speed", self.horizontal_speed),
            ("horizontal_range", self.horizontal_range),
            ("defeat_restart_secs", self.defeat_restart_secs),
            ("complete_advance_secs", self.complete_advance_secs),
            ("particle_lifetime_secs", self.particle_lifetime_secs),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        Ok(())
    }
}
