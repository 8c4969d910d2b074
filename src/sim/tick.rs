//! Per-frame simulation step
//!
//! Order within a frame is fixed: countdowns, character, hazards, target
//! check, then effects and the terminal delay. Hazards move after the character
//! so a chaser homes in on where the character is this frame.

use super::character::MoveOutcome;
use super::state::{GameState, LevelTransition};

/// What the host needs to know after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameResult {
    /// The run is still live (neither defeated nor celebrating)
    pub running: bool,
    /// Call `step` again next frame
    pub reschedule: bool,
    /// Set on exactly one frame, once the terminal delay has elapsed
    pub transition: Option<LevelTransition>,
}

/// Advance the game state by `dt` simulated seconds
pub fn step(state: &mut GameState, dt: f32) -> FrameResult {
    if state.cancelled || state.transition_fired {
        return FrameResult {
            running: state.is_running(),
            reschedule: false,
            transition: None,
        };
    }

    let dt = dt.max(0.0);
    // The terminal delay starts counting on the frame after the run ends
    let counting_down = !state.is_running();

    if state.is_running() {
        state.elapsed += dt;
        state.character.update_timers(dt);

        update_character(state, dt);
        update_hazards(state, dt);

        let rule = state.tuning.edge_rule;
        if state.is_running() && rule.intersects(&state.character.rect(), state.arena.target()) {
            state.complete();
        }
    }

    state.effects.update(dt);

    let mut transition = None;
    if let Some(pending) = state.pending_transition().filter(|_| counting_down) {
        state.transition_timer -= dt;
        if state.transition_timer <= 0.0 {
            state.transition_fired = true;
            transition = Some(pending);
            log::info!("Level transition: {:?}", pending);
        }
    }

    FrameResult {
        running: state.is_running(),
        reschedule: !state.transition_fired,
        transition,
    }
}

fn update_character(state: &mut GameState, dt: f32) {
    let direction = state.keys.direction();
    let outcome = state.character.try_move(
        direction,
        state.tuning.character_speed,
        dt,
        &state.arena,
        state.hazards.iter().map(|h| h.rect()),
        state.tuning.edge_rule,
    );

    match outcome {
        MoveOutcome::Moved(travelled) => state.distance += travelled,
        MoveOutcome::Hit => state.hit(),
        MoveOutcome::Idle | MoveOutcome::Blocked => {}
    }
}

fn update_hazards(state: &mut GameState, dt: f32) {
    let rule = state.tuning.edge_rule;
    for i in 0..state.hazards.len() {
        if !state.is_running() {
            break;
        }

        let target = state.character.pos;
        state.hazards[i].advance(target, &state.arena, dt);

        if !state.character.is_recovering()
            && rule.intersects(&state.character.rect(), &state.hazards[i].rect())
        {
            state.hit();
        }
    }
}
