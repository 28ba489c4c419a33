//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::PinRect;
use super::layout::init_pins;
use crate::consts::*;

/// Current phase of a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollPhase {
    /// Ball at the lane bottom, player moving it sideways
    #[default]
    Aiming,
    /// Ball travelling up the lane
    Rolling,
}

/// Which roll of the current turn is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Roll {
    #[default]
    First,
    Second,
}

impl Roll {
    /// 0 for the first roll, 1 for the second
    pub fn index(self) -> u8 {
        match self {
            Roll::First => 0,
            Roll::Second => 1,
        }
    }

    /// Roll that follows this one
    pub fn next(self) -> Self {
        match self {
            Roll::First => Roll::Second,
            Roll::Second => Roll::First,
        }
    }
}

/// Notable things that happened during a tick
///
/// Drained by the frontend for logging; has no effect on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player committed a roll from horizontal position `x`
    RollStarted { roll: Roll, x: i32 },
    /// Ball overlapped a standing pin
    PinKnocked { index: usize },
    /// Ball reached the top of the lane
    RollScored { roll: Roll, score: u32 },
    /// Second roll finished, rack and ball restored
    TurnReset,
}

/// A single pin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Top-left corner of the hit box
    pub position: Vec2,
    pub knocked_down: bool,
}

impl Pin {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            knocked_down: false,
        }
    }

    /// Collision rectangle for this pin
    pub fn rect(&self) -> PinRect {
        PinRect::for_pin(self.position)
    }
}

/// The bowling ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Self::start_position(),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Lane bottom, centred
    pub fn start_position() -> Vec2 {
        Vec2::new(SCREEN_WIDTH / 2.0, BALL_START_Y)
    }

    /// Put the ball back at the lane bottom, keeping the current aim
    pub fn reset_y(&mut self) {
        self.pos.y = BALL_START_Y;
    }

    /// Put the ball back at the lane bottom, centred
    pub fn reset(&mut self) {
        self.pos = Self::start_position();
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub phase: RollPhase,
    /// Roll within the current turn
    pub roll: Roll,
    /// Pins in layout order
    pub pins: Vec<Pin>,
    /// Knocked-down pins counted at the end of the latest roll
    pub score: u32,
    /// Whether the latest roll's score should be displayed
    pub show_score: bool,
    /// Completed turns
    pub turn: u32,
    /// Events produced since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: full rack, ball centred at the lane bottom, first roll
    pub fn new() -> Self {
        Self {
            ball: Ball::default(),
            phase: RollPhase::Aiming,
            roll: Roll::First,
            pins: init_pins(),
            score: 0,
            show_score: false,
            turn: 0,
            events: Vec::new(),
        }
    }

    /// Replace the rack with a full set of standing pins
    pub fn reset_pins(&mut self) {
        self.pins = init_pins();
    }

    pub fn is_rolling(&self) -> bool {
        self.phase == RollPhase::Rolling
    }

    pub fn standing_count(&self) -> usize {
        self.pins.iter().filter(|p| !p.knocked_down).count()
    }

    pub fn knocked_count(&self) -> usize {
        self.pins.iter().filter(|p| p.knocked_down).count()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
