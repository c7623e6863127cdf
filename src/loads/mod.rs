//! Load primitives and their shared evaluation contract

mod point;
mod polynomial;

pub use point::{PointForce, PointMoment};
pub use polynomial::{PolynomialForce, PolynomialMoment};

use serde::{Deserialize, Serialize};

/// An active load on the beam for the current step
///
/// A closed set of four primitives sharing one evaluation contract: an extent
/// along the beam and three evaluators (pressure, shear, moment) that are pure
/// and safe to call at arbitrary coordinates. All variants are immutable value
/// objects; the active set is rebuilt from scratch every step.
///
/// Sign convention: a positive (upward) pressure drives shear in the negative
/// direction, and moment is the running integral of shear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Load {
    /// A concentrated force at a single coordinate
    PointForce(PointForce),
    /// A concentrated pure moment at a single coordinate
    PointMoment(PointMoment),
    /// A piecewise-polynomial distributed force
    PolynomialForce(PolynomialForce),
    /// A piecewise-polynomial distributed pure moment
    PolynomialMoment(PolynomialMoment),
}

impl Load {
    /// Lower end of the load's extent (equals `upper_edge` for point loads)
    pub fn lower_edge(&self) -> f64 {
        match self {
            Load::PointForce(f) => f.lower_edge(),
            Load::PointMoment(m) => m.lower_edge(),
            Load::PolynomialForce(f) => f.lower_edge(),
            Load::PolynomialMoment(m) => m.lower_edge(),
        }
    }

    /// Upper end of the load's extent
    pub fn upper_edge(&self) -> f64 {
        match self {
            Load::PointForce(f) => f.upper_edge(),
            Load::PointMoment(m) => m.upper_edge(),
            Load::PolynomialForce(f) => f.upper_edge(),
            Load::PolynomialMoment(m) => m.upper_edge(),
        }
    }

    /// Distributed force per unit length at `x`
    ///
    /// `resolution` is the sample spacing; point loads approximate their Dirac
    /// impulse as a finite pulse of height `force / resolution`.
    pub fn pressure_at(&self, x: f64, resolution: f64) -> f64 {
        match self {
            Load::PointForce(f) => f.pressure_at(x, resolution),
            Load::PointMoment(m) => m.pressure_at(x, resolution),
            Load::PolynomialForce(f) => f.pressure_at(x),
            Load::PolynomialMoment(m) => m.pressure_at(x),
        }
    }

    /// Internal shear force contribution just right of `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        match self {
            Load::PointForce(f) => f.shear_at(x),
            Load::PointMoment(m) => m.shear_at(x),
            Load::PolynomialForce(f) => f.shear_at(x),
            Load::PolynomialMoment(m) => m.shear_at(x),
        }
    }

    /// Internal bending moment contribution at `x`
    pub fn moment_at(&self, x: f64) -> f64 {
        match self {
            Load::PointForce(f) => f.moment_at(x),
            Load::PointMoment(m) => m.moment_at(x),
            Load::PolynomialForce(f) => f.moment_at(x),
            Load::PolynomialMoment(m) => m.moment_at(x),
        }
    }
}

impl From<PointForce> for Load {
    fn from(load: PointForce) -> Self {
        Load::PointForce(load)
    }
}

impl From<PointMoment> for Load {
    fn from(load: PointMoment) -> Self {
        Load::PointMoment(load)
    }
}

impl From<PolynomialForce> for Load {
    fn from(load: PolynomialForce) -> Self {
        Load::PolynomialForce(load)
    }
}

impl From<PolynomialMoment> for Load {
    fn from(load: PolynomialMoment) -> Self {
        Load::PolynomialMoment(load)
    }
}
