//! Built-in level catalogue
//!
//! Two hand-made layouts played in a loop: clearing level one leads to
//! level two, clearing level two leads back to level one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hazard::HazardKind;
use super::input::Key;
use super::layout::{HazardSpec, LevelLayout};
use super::rect::Rect;

/// Held key and seconds held, played in order, that clears level one
///
/// Over the first pillar, down the gap between the pillars, then under the
/// second one into the goal. The chaser starts behind and never closes in.
pub const LEVEL_ONE_ROUTE: [(Key, f32); 3] =
    [(Key::Right, 1.3), (Key::Down, 1.8), (Key::Right, 2.2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelId {
    One,
    Two,
}

impl LevelId {
    /// Level played after this one is completed
    pub fn next(self) -> Self {
        match self {
            LevelId::One => LevelId::Two,
            LevelId::Two => LevelId::One,
        }
    }

    /// Page that hosts the level in the browser build
    pub fn page(self) -> &'static str {
        match self {
            LevelId::One => "index.html",
            LevelId::Two => "level2.html",
        }
    }

    /// Resolve the level from the current page's file name
    pub fn from_page(file_name: &str) -> Self {
        if file_name == LevelId::Two.page() {
            LevelId::Two
        } else {
            LevelId::One
        }
    }

    /// Built-in layout for this level
    pub fn layout(self) -> LevelLayout {
        match self {
            LevelId::One => level_one(),
            LevelId::Two => level_two(),
        }
    }
}

fn hazard(kind: HazardKind, left: f32, top: f32, side: f32) -> HazardSpec {
    HazardSpec {
        kind,
        rect: Rect::new(left, top, side, side),
    }
}

/// Two pillars, open at alternating ends
fn level_one() -> LevelLayout {
    LevelLayout {
        width: 800.0,
        height: 500.0,
        start: Vec2::new(20.0, 20.0),
        character_size: 36.0,
        walls: vec![Rect::new(220.0, 140.0, 20.0, 360.0), Rect::new(480.0, 0.0, 20.0, 360.0)],
        hazards: vec![
            hazard(HazardKind::Static, 120.0, 300.0, 30.0),
            hazard(HazardKind::VerticalPatrol, 360.0, 220.0, 30.0),
            hazard(HazardKind::HorizontalPatrol, 600.0, 250.0, 30.0),
            hazard(HazardKind::Chaser, 40.0, 440.0, 28.0),
        ],
        target: Rect::new(720.0, 420.0, 60.0, 60.0),
        message: "Reach the heart!".to_string(),
        message_visible: true,
        heart_visible: true,
    }
}

/// A serpentine of three ledges climbing to the top-right corner
fn level_two() -> LevelLayout {
    LevelLayout {
        width: 800.0,
        height: 500.0,
        start: Vec2::new(20.0, 440.0),
        character_size: 36.0,
        walls: vec![
            Rect::new(120.0, 380.0, 680.0, 20.0),
            Rect::new(0.0, 250.0, 660.0, 20.0),
            Rect::new(120.0, 120.0, 680.0, 20.0),
        ],
        hazards: vec![
            hazard(HazardKind::Static, 80.0, 290.0, 30.0),
            hazard(HazardKind::HorizontalPatrol, 400.0, 310.0, 30.0),
            hazard(HazardKind::VerticalPatrol, 700.0, 180.0, 30.0),
            hazard(HazardKind::HorizontalPatrol, 300.0, 180.0, 30.0),
            hazard(HazardKind::Chaser, 400.0, 40.0, 28.0),
        ],
        target: Rect::new(720.0, 30.0, 60.0, 60.0),
        message: "One more climb to the heart!".to_string(),
        message_visible: true,
        heart_visible: true,
    }
}
