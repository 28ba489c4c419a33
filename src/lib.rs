//! Bowling Lane - a minimal arcade bowling game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aiming, rolling, pin collisions, turn cycle)
//! - `renderer`: macroquad drawing of lane, ball, pins and HUD
//! - `settings`: Display preferences persisted as JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one original frame at 60 FPS)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Horizontal aim step per tick while a direction is held
    pub const AIM_STEP: f32 = 5.0;
    /// Vertical travel per tick while rolling (upward)
    pub const ROLL_STEP: f32 = 5.0;
    /// Ball start height (lane bottom)
    pub const BALL_START_Y: f32 = SCREEN_HEIGHT - 50.0;
    /// A roll ends once the ball reaches this height
    pub const TOP_THRESHOLD: f32 = 100.0;

    /// Pin hit box
    pub const PIN_WIDTH: f32 = 10.0;
    pub const PIN_HEIGHT: f32 = 30.0;
    /// Horizontal distance between pin origins in a row
    pub const PIN_SPACING_X: f32 = PIN_WIDTH + 20.0;
    /// Vertical distance between rows
    pub const PIN_SPACING_Y: f32 = PIN_HEIGHT + 10.0;
    /// Top of the first (widest) row
    pub const PIN_START_Y: f32 = 120.0;
    /// Pins per row, front of the rack last
    pub const PIN_ROWS: [usize; 4] = [4, 3, 2, 1];

    /// Lane backdrop
    pub const LANE_X: f32 = SCREEN_WIDTH / 4.0;
    pub const LANE_Y: f32 = 80.0;
    pub const LANE_WIDTH: f32 = SCREEN_WIDTH / 2.0;
    pub const LANE_HEIGHT: f32 = SCREEN_HEIGHT - 100.0;
}

/// Leftmost ball centre reachable while aiming
#[inline]
pub fn aim_left_limit() -> f32 {
    consts::SCREEN_WIDTH / 4.0 + consts::BALL_RADIUS
}

/// Rightmost ball centre reachable while aiming
#[inline]
pub fn aim_right_limit() -> f32 {
    consts::SCREEN_WIDTH * 3.0 / 4.0 - consts::BALL_RADIUS
}

/// Total number of pins in a full rack
#[inline]
pub fn pin_count() -> usize {
    consts::PIN_ROWS.iter().sum()
}
