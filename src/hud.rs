//! HUD strings and per-frame render instructions
//!
//! Everything here is derived from `GameState` by shared reference. The host
//! applies a `FrameView` to whatever it draws with and never touches the
//! state itself.

use glam::Vec2;
use serde::Serialize;

use crate::format_clock;
use crate::sim::{GamePhase, GameState};

/// The three HUD lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: String,
    pub lives: String,
    pub time: String,
}

impl Hud {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: format!("Score: {}", state.score()),
            lives: format!("Lives: {}", state.character.health),
            time: format!("Time: {}", format_clock(state.elapsed_secs())),
        }
    }
}

/// Character styling flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterStatus {
    pub visible: bool,
    pub hurt: bool,
    pub recovering: bool,
    pub celebrating: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    pub character: Vec2,
    pub status: CharacterStatus,
    pub hazards: Vec<Vec2>,
    pub particles: Vec<ParticleView>,
    pub shaking: bool,
    pub heart_visible: bool,
    /// Message box text, `None` while hidden
    pub message: Option<String>,
    pub hud: Hud,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        let character = &state.character;
        Self {
            character: character.pos,
            status: CharacterStatus {
                visible: character.visible,
                hurt: character.is_hurt(),
                recovering: state.is_recovering(),
                celebrating: state.phase == GamePhase::Celebrating,
            },
            hazards: state.hazards.iter().map(|h| h.pos).collect(),
            particles: state
                .effects
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos(),
                    scale: p.scale,
                    opacity: p.opacity(),
                })
                .collect(),
            shaking: state.effects.is_shaking(),
            heart_visible: state.heart_visible,
            message: state.message_visible.then(|| state.message.clone()),
            hud: Hud::capture(state),
        }
    }
}
