//! Fixed timestep simulation tick
//!
//! Advances aiming, ball travel, pin collisions and the two-roll turn cycle
//! by exactly one step.

use super::collision::circle_rect_overlap;
use super::state::{GameEvent, GameState, RollPhase, Roll};
use crate::consts::*;
use crate::{aim_left_limit, aim_right_limit};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Aim left (held)
    pub left: bool,
    /// Aim right (held)
    pub right: bool,
    /// Start a roll (one-shot, edge-triggered)
    pub roll: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == RollPhase::Aiming {
        aim(state, input);
    }

    // A roll started above also moves on this same tick
    if state.phase == RollPhase::Rolling {
        advance_roll(state);
    }
}

fn aim(state: &mut GameState, input: &TickInput) {
    let ball = &mut state.ball;
    if input.left {
        ball.pos.x -= AIM_STEP;
    }
    if input.right {
        ball.pos.x += AIM_STEP;
    }
    ball.pos.x = ball.pos.x.clamp(aim_left_limit(), aim_right_limit());

    if input.roll {
        ball.reset_y();
        let x = ball.pos.x as i32;
        state.phase = RollPhase::Rolling;
        state.show_score = false;
        state.push_event(GameEvent::RollStarted { roll: state.roll, x });
    }
}

fn advance_roll(state: &mut GameState) {
    state.ball.pos.y -= ROLL_STEP;

    let ball = state.ball;
    let mut knocked = Vec::new();
    for (index, pin) in state.pins.iter_mut().enumerate() {
        if !pin.knocked_down && circle_rect_overlap(ball.pos, ball.radius, &pin.rect()) {
            pin.knocked_down = true;
            knocked.push(index);
        }
    }
    for index in knocked {
        state.push_event(GameEvent::PinKnocked { index });
    }

    if state.ball.pos.y <= TOP_THRESHOLD {
        finish_roll(state);
    }
}

/// Score the roll and move the turn cycle forward
fn finish_roll(state: &mut GameState) {
    // Counts every pin down in the rack, not just the ones this roll felled
    state.score = state.knocked_count() as u32;
    state.show_score = true;
    state.phase = RollPhase::Aiming;
    state.push_event(GameEvent::RollScored {
        roll: state.roll,
        score: state.score,
    });

    match state.roll {
        Roll::First => {
            state.ball.reset_y();
        }
        Roll::Second => {
            state.reset_pins();
            state.ball.reset();
            state.turn += 1;
            state.push_event(GameEvent::TurnReset);
        }
    }
    state.roll = state.roll.next();
}
