//! Pin rack layout
//!
//! Rows are laid out top to bottom with 4, 3, 2 and 1 pins, each row centred
//! on the lane so the rack forms a triangle pointing at the bowler.

use glam::Vec2;

use super::state::Pin;
use crate::consts::*;

/// Build a full rack of standing pins in layout order
pub fn init_pins() -> Vec<Pin> {
    let center_x = SCREEN_WIDTH / 2.0;
    let mut pins = Vec::with_capacity(crate::pin_count());

    for (row, &count) in PIN_ROWS.iter().enumerate() {
        let row_start_x = center_x - (count as f32 - 1.0) * PIN_SPACING_X / 2.0;
        let y = PIN_START_Y + row as f32 * PIN_SPACING_Y;

        for i in 0..count {
            pins.push(Pin::new(Vec2::new(row_start_x + i as f32 * PIN_SPACING_X, y)));
        }
    }

    pins
}
