//! Arena Dash - A small arena dodge-and-reach arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, hazards, damage, game state)
//! - `hud`: Derived score/clock strings and per-frame render instructions
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod sim;
pub mod tuning;

pub use hud::{FrameView, Hud};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed step used by the native scripted run
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Score: one point per this many units travelled
    pub const DISTANCE_PER_POINT: f32 = 4.0;
    /// Score: bonus per life kept beyond the last one
    pub const SURVIVAL_BONUS_PER_LIFE: i64 = 75;
    /// Score: one point lost every this many seconds
    pub const TIME_PENALTY_INTERVAL_SECS: u32 = 5;
}

/// Format whole seconds as a zero-padded `MM:SS` clock
pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
