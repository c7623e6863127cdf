//! Beam frame geometry - maps between world space and the beam's 1D coordinate

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// 2D world-space vector
pub type Vec2 = Vector2<f64>;

/// The beam's coordinate frame for one simulation step
///
/// An oriented 1D coordinate system over `[0, length]` embedded in 2D space.
/// The host recomputes this from its transform at the start of every step;
/// the engine never caches it between steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamFrame {
    /// World position of beam coordinate 0
    pub origin: Vec2,
    /// Unit vector along the beam (local "right")
    pub axis: Vec2,
    /// Unit vector normal to the beam (local "up")
    pub up: Vec2,
    /// Beam length (meters)
    pub length: f64,
    /// Beam depth perpendicular to the axis (meters), the lever arm for
    /// surface friction couples is half of this
    pub thickness: f64,
}

impl BeamFrame {
    /// Create a frame from origin, unit axes and dimensions
    pub fn new(origin: Vec2, axis: Vec2, up: Vec2, length: f64, thickness: f64) -> Self {
        Self {
            origin,
            axis,
            up,
            length,
            thickness,
        }
    }

    /// Create a horizontal frame with the usual axes (+X along, +Y up)
    pub fn horizontal(origin: Vec2, length: f64, thickness: f64) -> Self {
        Self::new(origin, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), length, thickness)
    }

    /// Project a world-space point onto the beam axis
    ///
    /// Returns the beam coordinate in meters; points on the beam land in
    /// `[0, length]`.
    pub fn to_1d(&self, point: Vec2) -> f64 {
        (point - self.origin).dot(&self.axis)
    }

    /// Map a beam coordinate back to world space (on the beam centerline)
    pub fn to_world(&self, x: f64) -> Vec2 {
        self.origin + self.axis * x
    }

    /// Signed offset of a world-space point from the beam axis, along "up"
    pub fn offset_from_axis(&self, point: Vec2) -> f64 {
        (point - self.origin).dot(&self.up)
    }

    /// Check whether the frame spans a usable coordinate range
    pub fn is_degenerate(&self) -> bool {
        self.length <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_1d_roundtrip() {
        let frame = BeamFrame::horizontal(Vec2::new(2.0, 1.0), 10.0, 0.5);
        let world = frame.to_world(3.5);
        assert!((frame.to_1d(world) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_rotated_frame_projection() {
        // Beam rotated 90 degrees: axis = +Y, up = -X
        let frame = BeamFrame::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            4.0,
            0.2,
        );
        assert!((frame.to_1d(Vec2::new(0.0, 2.0)) - 2.0).abs() < 1e-12);
        assert!((frame.offset_from_axis(Vec2::new(-0.3, 2.0)) - 0.3).abs() < 1e-12);
    }
}
