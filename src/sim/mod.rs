//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (pins by layout index)
//! - No rendering, logging or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{PinRect, circle_rect_overlap};
pub use layout::init_pins;
pub use state::{Ball, GameEvent, GameState, Pin, Roll, RollPhase};
pub use tick::{TickInput, tick};
