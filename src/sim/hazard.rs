//! Moving hazards
//!
//! Each hazard owns its kinematic state and advances independently of the
//! others. Hazards pass through walls and through each other; only the
//! arena boundary stops them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::clamp;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Movement behavior of a hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    /// Heads straight for the character
    Chaser,
    /// Bounces up and down around its start
    VerticalPatrol,
    /// Bounces left and right around its start
    HorizontalPatrol,
    /// Never moves
    Static,
}

/// A hazard entity
#[derive(Debug, Clone)]
pub struct Hazard {
    pub kind: HazardKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per second
    pub speed: f32,
    /// +1 or -1 along the patrol axis
    pub direction: f32,
    /// Patrol bounds on the patrol axis (top for vertical, left for horizontal)
    pub min: f32,
    pub max: f32,
}

impl Hazard {
    /// Build a hazard from its layout box, deriving patrol bounds once
    pub fn new(kind: HazardKind, rect: Rect, arena: &Arena, tuning: &Tuning) -> Self {
        let margin = tuning.patrol_margin;
        let (speed, min, max) = match kind {
            HazardKind::Chaser => (tuning.chaser_speed, 0.0, 0.0),
            HazardKind::VerticalPatrol => {
                let range = tuning.vertical_range;
                let min = (rect.top() - range).max(margin);
                let max = (rect.top() + range).min(arena.height() - rect.size.y - margin);
                (tuning.vertical_speed, min, max)
            }
            HazardKind::HorizontalPatrol => {
                let range = tuning.horizontal_range;
                let min = (rect.left() - range).max(margin);
                let max = (rect.left() + range).min(arena.width() - rect.size.x - margin);
                (tuning.horizontal_speed, min, max)
            }
            HazardKind::Static => (0.0, 0.0, 0.0),
        };

        Self {
            kind,
            pos: rect.pos,
            size: rect.size,
            speed,
            direction: 1.0,
            min,
            max: max.max(min),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Advance one frame toward/along the behavior's path, then clamp into the arena
    ///
    /// `target` is the character's top-left corner this frame.
    pub fn advance(&mut self, target: Vec2, arena: &Arena, dt: f32) {
        match self.kind {
            HazardKind::Chaser => {
                let delta = target - self.pos;
                // Coincident: fall back to magnitude 1 so the step is zero, not NaN
                let distance = match delta.length() {
                    d if d > 0.0 => d,
                    _ => 1.0,
                };
                self.pos += delta / distance * self.speed * dt;
            }
            HazardKind::VerticalPatrol => {
                self.pos.y = self.patrol(self.pos.y, dt);
            }
            HazardKind::HorizontalPatrol => {
                self.pos.x = self.patrol(self.pos.x, dt);
            }
            HazardKind::Static => {}
        }

        self.pos = arena.clamp_position(self.pos, self.size);
    }

    /// Reflecting patrol along one axis; overshoot is dropped, not carried
    fn patrol(&mut self, coord: f32, dt: f32) -> f32 {
        let next = coord + self.direction * self.speed * dt;
        if next >= self.max {
            self.direction = -1.0;
            self.max
        } else if next <= self.min {
            self.direction = 1.0;
            self.min
        } else {
            clamp(next, self.min, self.max)
        }
    }
}
