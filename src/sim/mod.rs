//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-driven only (the frame clock is the single place that sees timestamps)
//! - Seeded RNG only, and only for visual effects
//! - Stable iteration order (layout order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod character;
pub mod clock;
pub mod collision;
pub mod effects;
pub mod hazard;
pub mod input;
pub mod layout;
pub mod levels;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use character::Character;
pub use clock::FrameClock;
pub use collision::{Contact, EdgeRule, clamp, detect_contact};
pub use effects::{Effects, Particle};
pub use hazard::{Hazard, HazardKind};
pub use input::{HeldKeys, Key};
pub use layout::{HazardSpec, LayoutError, LevelLayout};
pub use levels::{LEVEL_ONE_ROUTE, LevelId};
pub use rect::Rect;
pub use score::score;
pub use state::{GamePhase, GameState, LevelTransition};
pub use tick::{FrameResult, step};
