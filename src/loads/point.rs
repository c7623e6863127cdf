//! Concentrated loads at a single beam coordinate

use serde::{Deserialize, Serialize};

/// A concentrated force applied at one coordinate along the beam
///
/// The limiting case of a zero-width distributed load. Shear and moment use
/// the exact step-function form; pressure approximates the Dirac impulse as a
/// pulse one sample wide so a single sampling loop can draw discrete and
/// distributed loads together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointForce {
    /// Application coordinate along the beam
    pub point: f64,
    /// Force magnitude (positive along the beam's "up" axis)
    pub force: f64,
}

impl PointForce {
    /// Create a new point force
    pub fn new(point: f64, force: f64) -> Self {
        Self { point, force }
    }

    /// Lower end of the extent (degenerate: same as the upper end)
    pub fn lower_edge(&self) -> f64 {
        self.point
    }

    /// Upper end of the extent
    pub fn upper_edge(&self) -> f64 {
        self.point
    }

    /// Pulse approximation of the impulse: `force / resolution` within half a
    /// sample spacing of the application point, zero elsewhere
    pub fn pressure_at(&self, x: f64, resolution: f64) -> f64 {
        if (x - self.point).abs() <= resolution / 2.0 {
            self.force / resolution
        } else {
            0.0
        }
    }

    /// Shear contribution: `-force` strictly right of the application point
    pub fn shear_at(&self, x: f64) -> f64 {
        if x > self.point {
            -self.force
        } else {
            0.0
        }
    }

    /// Moment contribution: `-force * (x - point)` strictly right of the
    /// application point
    pub fn moment_at(&self, x: f64) -> f64 {
        if x > self.point {
            -self.force * (x - self.point)
        } else {
            0.0
        }
    }
}

/// A concentrated pure moment applied at one coordinate along the beam
///
/// Contributes no pressure and no shear; the moment value appears strictly
/// right of the application point and persists to the end of the beam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointMoment {
    /// Application coordinate along the beam
    pub point: f64,
    /// Moment magnitude
    pub moment: f64,
}

impl PointMoment {
    /// Create a new point moment
    pub fn new(point: f64, moment: f64) -> Self {
        Self { point, moment }
    }

    /// Lower end of the extent (degenerate: same as the upper end)
    pub fn lower_edge(&self) -> f64 {
        self.point
    }

    /// Upper end of the extent
    pub fn upper_edge(&self) -> f64 {
        self.point
    }

    /// Pure moments carry no pressure
    pub fn pressure_at(&self, _x: f64, _resolution: f64) -> f64 {
        0.0
    }

    /// Pure moments carry no shear
    pub fn shear_at(&self, _x: f64) -> f64 {
        0.0
    }

    /// Moment contribution: the full value strictly right of the application
    /// point
    pub fn moment_at(&self, x: f64) -> f64 {
        if x > self.point {
            self.moment
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_force_step_property() {
        let load = PointForce::new(3.0, 10.0);
        assert_eq!(load.shear_at(3.0), 0.0);
        assert_eq!(load.moment_at(3.0), 0.0);
        assert_relative_eq!(load.shear_at(3.5), -10.0, epsilon = 1e-12);
        assert_relative_eq!(load.moment_at(5.0), -20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_force_pressure_pulse() {
        let load = PointForce::new(2.0, 6.0);
        let resolution = 0.5;
        assert_relative_eq!(load.pressure_at(2.0, resolution), 12.0, epsilon = 1e-12);
        assert_relative_eq!(load.pressure_at(2.25, resolution), 12.0, epsilon = 1e-12);
        assert_eq!(load.pressure_at(2.26, resolution), 0.0);
        assert_eq!(load.pressure_at(0.0, resolution), 0.0);
    }

    #[test]
    fn test_point_moment_is_pure() {
        let load = PointMoment::new(1.0, 4.0);
        assert_eq!(load.pressure_at(1.0, 0.1), 0.0);
        assert_eq!(load.shear_at(5.0), 0.0);
        assert_eq!(load.moment_at(1.0), 0.0);
        assert_relative_eq!(load.moment_at(1.1), 4.0, epsilon = 1e-12);
        assert_relative_eq!(load.moment_at(100.0), 4.0, epsilon = 1e-12);
    }
}
