//! The player character
//!
//! Movement is resolved as a whole: the proposed step is clamped into the
//! arena and then either accepted or rejected. Rejected steps leave the
//! character exactly where it was.

use glam::Vec2;

use super::arena::Arena;
use super::collision::{EdgeRule, detect_contact};
use super::rect::Rect;

/// Result of a movement attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No direction held
    Idle,
    /// Step accepted; carries the distance actually covered
    Moved(f32),
    /// Wall, boundary or (when vulnerable) hazard in the way
    Blocked,
    /// Stepped into a hazard while vulnerable; the step is discarded
    Hit,
}

/// Result of taking damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Lost a life, back at the start and invulnerable for a while
    Recovering,
    /// Lost the last life
    Defeated,
}

#[derive(Debug, Clone)]
pub struct Character {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Where the character (re)spawns
    pub start: Vec2,
    pub health: u8,
    /// Seconds of invulnerability left
    pub recovery: f32,
    /// Seconds of hurt flash left
    pub hurt: f32,
    pub visible: bool,
}

impl Character {
    pub fn new(start: Vec2, size: f32, health: u8) -> Self {
        Self {
            pos: start,
            size,
            start,
            health,
            recovery: 0.0,
            hurt: 0.0,
            visible: true,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    #[inline]
    pub fn is_recovering(&self) -> bool {
        self.recovery > 0.0
    }

    #[inline]
    pub fn is_hurt(&self) -> bool {
        self.hurt > 0.0
    }

    /// Count down the recovery and hurt-flash windows
    pub fn update_timers(&mut self, dt: f32) {
        self.recovery = (self.recovery - dt).max(0.0);
        self.hurt = (self.hurt - dt).max(0.0);
    }

    /// Clear any damage feedback (used when the level is completed)
    pub fn clear_damage_state(&mut self) {
        self.recovery = 0.0;
        self.hurt = 0.0;
    }

    /// Try to step along `direction` (unit or zero) for `dt` seconds
    pub fn try_move<I>(
        &mut self,
        direction: Vec2,
        speed: f32,
        dt: f32,
        arena: &Arena,
        hazards: I,
        rule: EdgeRule,
    ) -> MoveOutcome
    where
        I: IntoIterator<Item = Rect>,
    {
        if direction == Vec2::ZERO {
            return MoveOutcome::Idle;
        }

        let size = Vec2::splat(self.size);
        let proposed = self.pos + direction * speed * dt;
        let candidate_pos = arena.clamp_position(proposed, size);
        let candidate = Rect::from_pos_size(candidate_pos, size);

        let recovering = self.is_recovering();
        let contact = detect_contact(&candidate, arena, hazards, rule, recovering);

        if contact.danger && !recovering {
            return MoveOutcome::Hit;
        }
        if contact.solid {
            return MoveOutcome::Blocked;
        }

        let travelled = candidate_pos.distance(self.pos);
        self.pos = candidate_pos;
        MoveOutcome::Moved(travelled)
    }

    /// Lose a life; on survival respawn at the start with fresh timers
    pub fn take_hit(&mut self, recovery_secs: f32, hurt_secs: f32) -> HitOutcome {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            return HitOutcome::Defeated;
        }

        self.recovery = recovery_secs;
        self.hurt = hurt_secs;
        self.visible = true;
        self.pos = self.start;
        HitOutcome::Recovering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(
            400.0,
            300.0,
            vec![Rect::new(200.0, 0.0, 20.0, 150.0)],
            Rect::new(360.0, 260.0, 30.0, 30.0),
        )
    }

    #[test]
    fn test_move_accepted_accumulates_distance() {
        let mut c = Character::new(Vec2::new(10.0, 10.0), 20.0, 3);
        let out = c.try_move(Vec2::X, 100.0, 0.5, &arena(), [], EdgeRule::Exclusive);
        assert_eq!(out, MoveOutcome::Moved(50.0));
        assert_eq!(c.pos, Vec2::new(60.0, 10.0));
    }

    #[test]
    fn test_move_clamped_at_boundary() {
        let mut c = Character::new(Vec2::new(10.0, 10.0), 20.0, 3);
        let out = c.try_move(Vec2::NEG_X, 100.0, 1.0, &arena(), [], EdgeRule::Exclusive);
        assert_eq!(out, MoveOutcome::Moved(10.0));
        assert_eq!(c.pos, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_wall_blocks_whole_move() {
        let mut c = Character::new(Vec2::new(170.0, 10.0), 20.0, 3);
        let out = c.try_move(Vec2::X, 100.0, 0.2, &arena(), [], EdgeRule::Exclusive);
        assert_eq!(out, MoveOutcome::Blocked);
        assert_eq!(c.pos, Vec2::new(170.0, 10.0));
    }

    #[test]
    fn test_wall_blocks_while_recovering() {
        let mut c = Character::new(Vec2::new(170.0, 10.0), 20.0, 3);
        c.recovery = 1.0;
        let out = c.try_move(Vec2::X, 100.0, 0.2, &arena(), [], EdgeRule::Exclusive);
        assert_eq!(out, MoveOutcome::Blocked);
    }

    #[test]
    fn test_touching_wall_allowed_under_exclusive_rule() {
        let mut c = Character::new(Vec2::new(170.0, 10.0), 20.0, 3);
        let out = c.try_move(Vec2::X, 100.0, 0.1, &arena(), [], EdgeRule::Exclusive);
        assert_eq!(out, MoveOutcome::Moved(10.0));

        let mut c = Character::new(Vec2::new(170.0, 10.0), 20.0, 3);
        let out = c.try_move(Vec2::X, 100.0, 0.1, &arena(), [], EdgeRule::Inclusive);
        assert_eq!(out, MoveOutcome::Blocked);
    }

    #[test]
    fn test_hazard_hits_unless_recovering() {
        let hazard = Rect::new(50.0, 10.0, 20.0, 20.0);

        let mut c = Character::new(Vec2::new(10.0, 10.0), 20.0, 3);
        let out = c.try_move(Vec2::X, 100.0, 0.3, &arena(), [hazard], EdgeRule::Exclusive);
        assert_eq!(out, MoveOutcome::Hit);
        assert_eq!(c.pos, Vec2::new(10.0, 10.0));

        c.recovery = 1.0;
        let out = c.try_move(Vec2::X, 100.0, 0.3, &arena(), [hazard], EdgeRule::Exclusive);
        assert_eq!(out, MoveOutcome::Moved(30.0));
    }

    #[test]
    fn test_take_hit_resets_and_protects() {
        let mut c = Character::new(Vec2::new(10.0, 10.0), 20.0, 3);
        c.pos = Vec2::new(100.0, 100.0);

        assert_eq!(c.take_hit(1.4, 0.6), HitOutcome::Recovering);
        assert_eq!(c.health, 2);
        assert_eq!(c.pos, c.start);
        assert!(c.is_recovering());
        assert!(c.is_hurt());

        c.update_timers(0.7);
        assert!(c.is_recovering());
        assert!(!c.is_hurt());
        c.update_timers(0.7);
        assert!(!c.is_recovering());
    }

    #[test]
    fn test_last_hit_defeats_without_reset() {
        let mut c = Character::new(Vec2::new(10.0, 10.0), 20.0, 1);
        c.pos = Vec2::new(100.0, 100.0);
        assert_eq!(c.take_hit(1.4, 0.6), HitOutcome::Defeated);
        assert_eq!(c.health, 0);
        assert_eq!(c.pos, Vec2::new(100.0, 100.0));
        assert_eq!(c.take_hit(1.4, 0.6), HitOutcome::Defeated);
        assert_eq!(c.health, 0);
    }
}
