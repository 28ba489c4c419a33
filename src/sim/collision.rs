//! Collision detection between the ball and pin hit boxes
//!
//! The ball is a circle, every pin is an axis-aligned rectangle. Contact is
//! inclusive: a circle that exactly touches an edge or corner counts as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PIN_HEIGHT, PIN_WIDTH};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinRect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl PinRect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Standard pin hit box anchored at its top-left corner
    pub fn for_pin(top_left: Vec2) -> Self {
        Self::new(top_left, Vec2::new(PIN_WIDTH, PIN_HEIGHT))
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Point on (or inside) the rectangle closest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max())
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle centre onto the rectangle and compares the squared
/// distance to that point against the squared radius. A centre inside the
/// rectangle clamps to itself and always hits.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &PinRect) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_squared() <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin_at(x: f32, y: f32) -> PinRect {
        PinRect::for_pin(Vec2::new(x, y))
    }

    #[test]
    fn test_pin_rect_geometry() {
        let rect = pin_at(100.0, 200.0);
        assert_eq!(rect.max(), Vec2::new(110.0, 230.0));
        assert_eq!(rect.closest_point(Vec2::new(105.0, 215.0)), Vec2::new(105.0, 215.0));
        assert_eq!(rect.closest_point(Vec2::new(0.0, 500.0)), Vec2::new(100.0, 230.0));
    }

    #[test]
    fn test_centre_inside_rect() {
        let rect = pin_at(100.0, 200.0);
        assert!(circle_rect_overlap(Vec2::new(105.0, 215.0), 15.0, &rect));
    }

    #[test]
    fn test_side_contact_is_inclusive() {
        let rect = pin_at(100.0, 200.0);
        // Exactly one radius left of the left edge
        assert!(circle_rect_overlap(Vec2::new(85.0, 215.0), 15.0, &rect));
        // Half a pixel further is a miss
        assert!(!circle_rect_overlap(Vec2::new(84.5, 215.0), 15.0, &rect));
        // Below the bottom edge
        assert!(circle_rect_overlap(Vec2::new(105.0, 245.0), 15.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(105.0, 246.0), 15.0, &rect));
    }

    #[test]
    fn test_corner_uses_euclidean_distance() {
        let rect = pin_at(100.0, 200.0);
        // 9-12-15 triangle off the bottom-right corner (110, 230)
        assert!(circle_rect_overlap(Vec2::new(119.0, 242.0), 15.0, &rect));
        // Inside the bounding square of the corner but outside the radius
        assert!(!circle_rect_overlap(Vec2::new(121.0, 242.0), 15.0, &rect));
    }

    #[test]
    fn test_far_miss() {
        let rect = pin_at(100.0, 200.0);
        assert!(!circle_rect_overlap(Vec2::new(400.0, 550.0), 15.0, &rect));
    }
}
