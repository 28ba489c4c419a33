//! HUD text layout
//!
//! Builds the text overlay for a frame without touching the graphics
//! context, so what gets shown can be checked in tests.

use crate::Settings;
use crate::consts::SCREEN_WIDTH;
use crate::sim::GameState;

/// Font size for every HUD line
pub const HUD_FONT_SIZE: f32 = 20.0;

/// How a HUD line should be coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudTone {
    Normal,
    /// Latest roll's score
    Highlight,
    /// Diagnostics (FPS)
    Dim,
}

/// A single line of HUD text, positioned by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub tone: HudTone,
}

impl HudLine {
    fn new(text: impl Into<String>, x: f32, y: f32, tone: HudTone) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            tone,
        }
    }
}

pub const INSTRUCTIONS: &str = "LEFT/RIGHT to aim | [ENTER] to roll";

/// Lay out the HUD for the current state
pub fn hud_lines(state: &GameState, settings: &Settings, fps: Option<i32>) -> Vec<HudLine> {
    let mut lines = Vec::with_capacity(5);

    if settings.show_instructions {
        lines.push(HudLine::new(INSTRUCTIONS, 10.0, 10.0, HudTone::Normal));
    }

    if settings.show_pins_remaining {
        lines.push(HudLine::new(
            format!("Pins remaining: {}", state.standing_count()),
            10.0,
            40.0,
            HudTone::Normal,
        ));
    }

    if state.show_score {
        lines.push(HudLine::new(
            format!("Score this roll: {}", state.score),
            10.0,
            70.0,
            HudTone::Highlight,
        ));
    }

    if settings.show_turn_indicator {
        lines.push(HudLine::new(
            format!("Turn {} - Roll {}", state.turn + 1, state.roll.index() + 1),
            SCREEN_WIDTH - 180.0,
            10.0,
            HudTone::Normal,
        ));
    }

    if let (true, Some(fps)) = (settings.show_fps, fps) {
        lines.push(HudLine::new(
            format!("{} FPS", fps),
            SCREEN_WIDTH - 180.0,
            40.0,
            HudTone::Dim,
        ));
    }

    lines
}
