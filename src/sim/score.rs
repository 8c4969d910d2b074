//! Score formula
//!
//! The score is never stored; it is recomputed from distance, remaining
//! health and whole elapsed seconds whenever it is displayed.

use crate::consts::{DISTANCE_PER_POINT, SURVIVAL_BONUS_PER_LIFE, TIME_PENALTY_INTERVAL_SECS};

/// `max(0, round(distance / 4) + max(0, (health - 1) * 75) - floor(elapsed / 5))`
pub fn score(distance: f32, health: u8, elapsed_secs: u32) -> u32 {
    let travel = (distance.max(0.0) / DISTANCE_PER_POINT).round() as i64;
    let survival = ((health as i64 - 1) * SURVIVAL_BONUS_PER_LIFE).max(0);
    let penalty = (elapsed_secs / TIME_PENALTY_INTERVAL_SECS) as i64;
    (travel + survival - penalty).max(0) as u32
}
