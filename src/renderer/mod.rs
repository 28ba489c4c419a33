//! macroquad rendering module
//!
//! Immediate-mode drawing of the lane, ball, standing pins and HUD. Reads the
//! simulation state, never mutates it.

pub mod hud;

use macroquad::color::{self, Color};
use macroquad::shapes::{draw_circle, draw_rectangle};
use macroquad::text::draw_text;
use macroquad::window::clear_background;

pub use hud::{HudLine, HudTone, hud_lines};

use crate::Settings;
use crate::consts::*;
use crate::sim::GameState;

/// Colours used for one frame
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub lane: Color,
    pub ball: Color,
    pub pin: Color,
    pub text: Color,
    pub highlight: Color,
    pub dim: Color,
}

impl Palette {
    pub fn standard() -> Self {
        Self {
            background: color::BLACK,
            lane: color::DARKGRAY,
            ball: color::RED,
            pin: color::WHITE,
            text: color::LIGHTGRAY,
            highlight: color::YELLOW,
            dim: color::GRAY,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            background: color::BLACK,
            lane: Color::from_rgba(40, 40, 90, 255),
            ball: color::ORANGE,
            pin: color::WHITE,
            text: color::WHITE,
            highlight: color::YELLOW,
            dim: color::WHITE,
        }
    }

    pub fn for_settings(settings: &Settings) -> Self {
        if settings.high_contrast {
            Self::high_contrast()
        } else {
            Self::standard()
        }
    }

    fn tone(&self, tone: HudTone) -> Color {
        match tone {
            HudTone::Normal => self.text,
            HudTone::Highlight => self.highlight,
            HudTone::Dim => self.dim,
        }
    }
}

/// Draw one complete frame
pub fn draw_frame(state: &GameState, settings: &Settings, fps: Option<i32>) {
    let palette = Palette::for_settings(settings);

    clear_background(palette.background);

    // Lane
    draw_rectangle(LANE_X, LANE_Y, LANE_WIDTH, LANE_HEIGHT, palette.lane);

    // Ball
    draw_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius, palette.ball);

    // Pins
    for pin in state.pins.iter().filter(|p| !p.knocked_down) {
        draw_rectangle(pin.position.x, pin.position.y, PIN_WIDTH, PIN_HEIGHT, palette.pin);
    }

    // HUD (macroquad positions text by baseline)
    for line in hud_lines(state, settings, fps) {
        draw_text(
            &line.text,
            line.x,
            line.y + HUD_BASELINE,
            hud::HUD_FONT_SIZE,
            palette.tone(line.tone),
        );
    }
}

/// Offset from a line's top edge to its baseline
const HUD_BASELINE: f32 = hud::HUD_FONT_SIZE * 0.8;
