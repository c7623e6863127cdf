//! Diagram sampling - superposition of all active loads on a fixed grid

use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{BeamFrame, Vec2};
use crate::loads::Load;

/// Visual divisor applied to pressure values when placing world-space points
pub const PRESSURE_SCALE: f64 = 10.0;
/// Visual divisor applied to shear values when placing world-space points
pub const SHEAR_SCALE: f64 = 10.0;
/// Visual divisor applied to moment values when placing world-space points
pub const MOMENT_SCALE: f64 = 50.0;

/// Configuration for the diagram sampler
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of equally spaced sample points per diagram (at least 2)
    samples: usize,
}

impl SamplerConfig {
    /// Create a configuration with the given sample count
    ///
    /// Rejects counts below 2: sample coordinates are spaced by
    /// `length / (samples - 1)`.
    pub fn new(samples: usize) -> DiagramResult<Self> {
        if samples < 2 {
            return Err(DiagramError::TooFewSamples(samples));
        }
        Ok(Self { samples })
    }

    /// Number of sample points per diagram
    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { samples: 20 }
    }
}

/// The three reaction diagrams sampled over one step
///
/// Entry `i` of each sequence is evaluated at `coordinates[i]`, the sum over
/// all active loads of the respective evaluator at that coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagrams {
    /// Sample coordinates along the beam, `length * i / (samples - 1)`
    pub coordinates: Vec<f64>,
    /// Distributed force per unit length at each coordinate
    pub pressure: Vec<f64>,
    /// Internal shear force at each coordinate
    pub shear: Vec<f64>,
    /// Internal bending moment at each coordinate
    pub moment: Vec<f64>,
}

impl Diagrams {
    /// All-zero diagrams for a step with no valid coordinate mapping
    pub fn zeroed(samples: usize) -> Self {
        Self {
            coordinates: vec![0.0; samples],
            pressure: vec![0.0; samples],
            shear: vec![0.0; samples],
            moment: vec![0.0; samples],
        }
    }

    /// Number of sample points
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the diagrams hold no samples
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Place the diagrams in world space for the renderer
    ///
    /// Each point is `origin + axis * x + up * value / scale`, one polyline
    /// per diagram. The per-diagram divisors keep the three curves at a
    /// consistent visual magnitude and must not change between steps.
    pub fn to_world_points(&self, frame: &BeamFrame) -> DiagramPoints {
        let place = |values: &[f64], scale: f64| -> Vec<Vec2> {
            self.coordinates
                .iter()
                .zip(values)
                .map(|(&x, &v)| frame.to_world(x) + frame.up * (v / scale))
                .collect()
        };
        DiagramPoints {
            pressure: place(&self.pressure, PRESSURE_SCALE),
            shear: place(&self.shear, SHEAR_SCALE),
            moment: place(&self.moment, MOMENT_SCALE),
        }
    }
}

/// World-space polylines for the three diagrams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramPoints {
    /// Pressure polyline
    pub pressure: Vec<Vec2>,
    /// Shear polyline
    pub shear: Vec<Vec2>,
    /// Moment polyline
    pub moment: Vec<Vec2>,
}

/// Sample the superposition of all active loads
///
/// Evaluates each load's three evaluators at `samples` equally spaced
/// coordinates over `[0, length]` and sums the contributions. The sample
/// spacing doubles as the pulse width for point-load pressure.
pub fn sample(loads: &[Load], length: f64, config: &SamplerConfig) -> Diagrams {
    let n = config.samples();
    let resolution = length / (n - 1) as f64;

    let mut diagrams = Diagrams {
        coordinates: Vec::with_capacity(n),
        pressure: vec![0.0; n],
        shear: vec![0.0; n],
        moment: vec![0.0; n],
    };
    for i in 0..n {
        diagrams
            .coordinates
            .push(length * i as f64 / (n - 1) as f64);
    }

    for load in loads {
        for i in 0..n {
            let x = diagrams.coordinates[i];
            diagrams.pressure[i] += load.pressure_at(x, resolution);
            diagrams.shear[i] += load.shear_at(x);
            diagrams.moment[i] += load.moment_at(x);
        }
    }
    diagrams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{PointForce, PolynomialForce};
    use approx::assert_relative_eq;

    #[test]
    fn test_config_rejects_too_few_samples() {
        assert!(matches!(
            SamplerConfig::new(1),
            Err(DiagramError::TooFewSamples(1))
        ));
        assert!(matches!(
            SamplerConfig::new(0),
            Err(DiagramError::TooFewSamples(0))
        ));
        assert_eq!(SamplerConfig::new(2).unwrap().samples(), 2);
        assert_eq!(SamplerConfig::default().samples(), 20);
    }

    #[test]
    fn test_sample_grid_spans_beam() {
        let config = SamplerConfig::new(5).unwrap();
        let diagrams = sample(&[], 8.0, &config);
        assert_eq!(diagrams.len(), 5);
        assert_relative_eq!(diagrams.coordinates[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(diagrams.coordinates[2], 4.0, epsilon = 1e-12);
        assert_relative_eq!(diagrams.coordinates[4], 8.0, epsilon = 1e-12);
        assert!(diagrams.pressure.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_two_sample_minimum() {
        let config = SamplerConfig::new(2).unwrap();
        let loads: [Load; 1] = [PolynomialForce::uniform(0.0, 4.0, 1.0).into()];
        let diagrams = sample(&loads, 4.0, &config);
        assert_relative_eq!(diagrams.shear[1], -4.0, epsilon = 1e-10);
        assert_relative_eq!(diagrams.moment[1], -8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_superposition_linearity() {
        let config = SamplerConfig::new(11).unwrap();
        let length = 10.0;
        let set_a: Vec<Load> = vec![PointForce::new(2.5, 5.0).into()];
        let set_b: Vec<Load> = vec![PolynomialForce::uniform(4.0, 9.0, -2.0).into()];
        let union: Vec<Load> = set_a.iter().chain(set_b.iter()).cloned().collect();

        let da = sample(&set_a, length, &config);
        let db = sample(&set_b, length, &config);
        let du = sample(&union, length, &config);
        for i in 0..config.samples() {
            assert_relative_eq!(du.pressure[i], da.pressure[i] + db.pressure[i], epsilon = 1e-10);
            assert_relative_eq!(du.shear[i], da.shear[i] + db.shear[i], epsilon = 1e-10);
            assert_relative_eq!(du.moment[i], da.moment[i] + db.moment[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_world_points_follow_up_axis() {
        let frame = BeamFrame::horizontal(Vec2::new(1.0, 0.0), 10.0, 0.4);
        let config = SamplerConfig::new(3).unwrap();
        let loads: [Load; 1] = [PolynomialForce::uniform(0.0, 10.0, 2.0).into()];
        let points = sample(&loads, frame.length, &config).to_world_points(&frame);
        // Mid-span shear is -10; the polyline dips by 10 / SHEAR_SCALE.
        assert_relative_eq!(points.shear[1].x, 6.0, epsilon = 1e-10);
        assert_relative_eq!(points.shear[1].y, -10.0 / SHEAR_SCALE, epsilon = 1e-10);
    }
}
