//! Game state and core simulation types
//!
//! Everything a run needs lives in one owned `GameState`. Update functions
//! take it by `&mut`; render capture takes it by `&`.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::character::{Character, HitOutcome};
use super::effects::Effects;
use super::hazard::Hazard;
use super::input::{HeldKeys, Key};
use super::layout::{LayoutError, LevelLayout};
use super::levels::LevelId;
use super::score::score;
use crate::tuning::Tuning;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Live play (the character may be recovering)
    Running,
    /// Last life lost
    Defeated,
    /// Target reached
    Celebrating,
}

/// What the host should load once a finished run's delay has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelTransition {
    /// Play the same level again from scratch
    Restart(LevelId),
    /// Move on to the given level
    Advance(LevelId),
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    pub level: LevelId,
    pub tuning: Tuning,
    pub arena: Arena,
    pub character: Character,
    /// Hazards in layout order
    pub hazards: Vec<Hazard>,
    pub keys: HeldKeys,
    pub phase: GamePhase,
    /// Simulated seconds since the run started
    pub elapsed: f32,
    /// Whole seconds captured when the run ended
    pub frozen_secs: Option<u32>,
    /// Distance covered by accepted moves
    pub distance: f32,
    /// Seconds left before the terminal transition fires
    pub transition_timer: f32,
    pub transition_fired: bool,
    pub cancelled: bool,
    pub effects: Effects,
    pub heart_visible: bool,
    pub message_visible: bool,
    /// Text currently in the message box
    pub message: String,
    /// Level intro text (first line of the completion message)
    intro: String,
}

impl GameState {
    /// Start a run from a layout; an invalid layout starts nothing
    pub fn new(level: LevelId, layout: LevelLayout, tuning: Tuning, seed: u64) -> Result<Self, LayoutError> {
        layout.validate()?;

        let arena = Arena::new(layout.width, layout.height, layout.walls, layout.target);
        let hazards = layout
            .hazards
            .iter()
            .map(|spec| Hazard::new(spec.kind, spec.rect, &arena, &tuning))
            .collect();
        let character = Character::new(layout.start, layout.character_size, tuning.max_lives);

        log::info!(
            "Level {:?}: arena {}x{}, {} walls, {} hazards",
            level,
            arena.width(),
            arena.height(),
            arena.walls().len(),
            layout.hazards.len()
        );

        Ok(Self {
            level,
            arena,
            character,
            hazards,
            keys: HeldKeys::default(),
            phase: GamePhase::Running,
            elapsed: 0.0,
            frozen_secs: None,
            distance: 0.0,
            transition_timer: 0.0,
            transition_fired: false,
            cancelled: false,
            effects: Effects::new(seed),
            heart_visible: layout.heart_visible,
            message_visible: layout.message_visible,
            message: layout.message.clone(),
            intro: layout.message,
            tuning,
        })
    }

    /// Start a run on one of the built-in levels
    pub fn for_level(level: LevelId, tuning: Tuning, seed: u64) -> Result<Self, LayoutError> {
        Self::new(level, level.layout(), tuning, seed)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }

    #[inline]
    pub fn is_recovering(&self) -> bool {
        self.is_running() && self.character.is_recovering()
    }

    /// Hold a movement key; ignored once the run has ended
    pub fn press(&mut self, key: Key) {
        if self.is_terminal() {
            return;
        }
        self.keys.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.set(key, false);
    }

    /// Stop scheduling frames; subsequent steps do nothing
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whole elapsed seconds, frozen once the run ends
    pub fn elapsed_secs(&self) -> u32 {
        self.frozen_secs.unwrap_or(self.elapsed.max(0.0).floor() as u32)
    }

    /// Score derived from the current (or frozen) state
    pub fn score(&self) -> u32 {
        score(self.distance, self.character.health, self.elapsed_secs())
    }

    /// Damage transition; a no-op while recovering or once the run has ended
    pub fn hit(&mut self) {
        if self.character.is_recovering() || self.is_terminal() {
            return;
        }

        let tuning = &self.tuning;
        self.effects.burst(
            self.character.rect().center(),
            tuning.particle_count,
            tuning.particle_spread,
            tuning.particle_lifetime_secs,
        );
        self.effects.shake(tuning.shake_secs);

        match self
            .character
            .take_hit(tuning.recovery_secs, tuning.hurt_flash_secs)
        {
            HitOutcome::Defeated => self.defeat(),
            HitOutcome::Recovering => {
                log::debug!("Hit! {} lives left", self.character.health);
                self.heart_visible = false;
                self.message_visible = false;
            }
        }
    }

    fn freeze_clock(&mut self) {
        self.frozen_secs = Some(self.elapsed_secs());
    }

    fn defeat(&mut self) {
        self.phase = GamePhase::Defeated;
        self.freeze_clock();
        self.keys.clear();
        self.character.visible = false;
        self.heart_visible = false;
        self.message = self.tuning.defeat_message.clone();
        self.message_visible = true;
        self.transition_timer = self.tuning.defeat_restart_secs;
        log::info!("Level {:?} lost after {}s", self.level, self.elapsed_secs());
    }

    /// Target reached; fires at most once per run
    pub fn complete(&mut self) {
        if self.is_terminal() {
            return;
        }

        self.phase = GamePhase::Celebrating;
        self.freeze_clock();
        self.keys.clear();
        self.character.clear_damage_state();
        self.heart_visible = true;

        let final_score = self.score();
        self.message = format!("{}\n{}: {}", self.intro, self.tuning.final_score_label, final_score);
        self.message_visible = true;
        self.transition_timer = self.tuning.complete_advance_secs;
        log::info!(
            "Level {:?} complete in {}s, score {}",
            self.level,
            self.elapsed_secs(),
            final_score
        );
    }

    /// Transition owed to the host once the terminal delay is over
    pub fn pending_transition(&self) -> Option<LevelTransition> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::Defeated => Some(LevelTransition::Restart(self.level)),
            GamePhase::Celebrating => Some(LevelTransition::Advance(self.level.next())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::for_level(LevelId::One, Tuning::default(), 1).expect("level one is valid")
    }

    #[test]
    fn test_new_state() {
        let s = state();
        assert_eq!(s.phase, GamePhase::Running);
        assert_eq!(s.character.health, 3);
        assert_eq!(s.score(), 150);
        assert!(s.heart_visible);
        assert_eq!(s.message, "Reach the heart!");
    }

    #[test]
    fn test_invalid_layout_declines_to_start() {
        let mut layout = LevelId::One.layout();
        layout.height = -1.0;
        assert!(GameState::new(LevelId::One, layout, Tuning::default(), 1).is_err());
    }

    #[test]
    fn test_hit_enters_recovery() {
        let mut s = state();
        s.character.pos.x += 50.0;
        s.hit();

        assert_eq!(s.character.health, 2);
        assert!(s.is_recovering());
        assert_eq!(s.character.pos, s.character.start);
        assert!(!s.heart_visible);
        assert!(!s.message_visible);
        assert_eq!(s.effects.particles.len(), 18);
        assert!(s.effects.is_shaking());

        // Invulnerable: a second hit is ignored
        s.hit();
        assert_eq!(s.character.health, 2);
    }

    #[test]
    fn test_defeat_happens_once() {
        let mut s = state();
        s.character.health = 1;
        s.elapsed = 12.7;
        s.hit();

        assert_eq!(s.phase, GamePhase::Defeated);
        assert_eq!(s.frozen_secs, Some(12));
        assert!(!s.character.visible);
        assert!(s.message_visible);
        assert_eq!(s.pending_transition(), Some(LevelTransition::Restart(LevelId::One)));

        s.hit();
        assert_eq!(s.character.health, 0);
        assert_eq!(s.phase, GamePhase::Defeated);
    }

    #[test]
    fn test_complete() {
        let mut s = state();
        s.press(Key::Right);
        s.character.recovery = 1.0;
        s.character.hurt = 0.3;
        s.distance = 400.0;
        s.elapsed = 10.2;
        s.complete();

        assert_eq!(s.phase, GamePhase::Celebrating);
        assert_eq!(s.frozen_secs, Some(10));
        assert!(!s.keys.is_down(Key::Right));
        assert!(!s.character.is_recovering());
        assert!(s.heart_visible);
        assert_eq!(s.message, "Reach the heart!\nTotal score: 248");
        assert_eq!(s.pending_transition(), Some(LevelTransition::Advance(LevelId::Two)));

        // Frozen clock keeps the score stable
        s.elapsed = 100.0;
        assert_eq!(s.score(), 248);
    }

    #[test]
    fn test_press_ignored_after_end() {
        let mut s = state();
        s.complete();
        s.press(Key::Up);
        assert!(!s.keys.is_down(Key::Up));
    }
}
