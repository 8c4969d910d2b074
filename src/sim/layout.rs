//! Initial level layout
//!
//! The presentation layer (or the built-in level catalogue) hands the core a
//! `LevelLayout` once per run. The core never reads presentational state
//! after construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::hazard::HazardKind;
use super::rect::Rect;

/// Reasons a layout cannot start a run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("arena must have positive size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
    #[error("character size must be positive, got {0}")]
    InvalidCharacterSize(f32),
    #[error("character start {0} does not fit inside the arena")]
    StartOutOfBounds(Vec2),
    #[error("{what} has a degenerate rectangle")]
    DegenerateRect { what: &'static str },
}

/// A hazard as described by the layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardSpec {
    pub kind: HazardKind,
    pub rect: Rect,
}

/// Everything needed to start a run on one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub width: f32,
    pub height: f32,
    /// Character top-left at the start and after every hit
    pub start: Vec2,
    pub character_size: f32,
    pub walls: Vec<Rect>,
    pub hazards: Vec<HazardSpec>,
    pub target: Rect,
    /// Level intro text, reused as the first line of the completion message
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub message_visible: bool,
    #[serde(default)]
    pub heart_visible: bool,
}

impl LevelLayout {
    /// Reject layouts that would leave the run half-initialized
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()) {
            return Err(LayoutError::InvalidArena {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.character_size > 0.0 && self.character_size.is_finite()) {
            return Err(LayoutError::InvalidCharacterSize(self.character_size));
        }

        let bounds = Rect::new(0.0, 0.0, self.width, self.height);
        if !bounds.contains(&Rect::square(self.start, self.character_size)) {
            return Err(LayoutError::StartOutOfBounds(self.start));
        }

        if !self.target.is_valid() {
            return Err(LayoutError::DegenerateRect { what: "target" });
        }
        if self.walls.iter().any(|w| !w.is_valid()) {
            return Err(LayoutError::DegenerateRect { what: "wall" });
        }
        if self.hazards.iter().any(|h| !h.rect.is_valid()) {
            return Err(LayoutError::DegenerateRect { what: "hazard" });
        }

        Ok(())
    }
}
