//! Beam Diagrams - real-time reaction diagrams for a contact-loaded 2D beam
//!
//! This library computes internal structural reaction diagrams - distributed
//! pressure, shear force and bending moment - along a one-dimensional beam,
//! from a time-varying set of external loads derived from physics-engine
//! contacts and self-weight. It drives a real-time visualization of beam
//! loading, supporting:
//! - Analytic load primitives (point forces/moments, polynomial distributed
//!   forces/moments) with closed-form integration
//! - A contact classifier that pairs co-located contacts from the same body
//!   into distributed edge loads
//! - Per-step superposition sampling onto a fixed grid, placed in world
//!   space for the renderer
//!
//! ## Example
//! ```rust
//! use beam_diagrams::prelude::*;
//!
//! // Beam frame and inertial data, recomputed by the host each step
//! let frame = BeamFrame::horizontal(Vec2::new(0.0, 0.0), 10.0, 0.4);
//! let inertia = BodyInertia::new(5.0, 1.0, Vec2::new(0.0, -9.8));
//!
//! // Contacts reported by the physics engine for this step
//! let contacts = [Contact::normal_only(
//!     Vec2::new(4.0, 0.2),
//!     Vec2::new(0.0, 1.0),
//!     2.0,
//!     1,
//! )];
//!
//! let engine = DiagramEngine::default();
//! let output = engine
//!     .step(&StepInput {
//!         frame,
//!         inertia,
//!         contacts: &contacts,
//!         dt: 1.0 / 50.0,
//!     })
//!     .unwrap();
//!
//! // Three diagrams on a 20-point grid, plus the classified load set
//! assert_eq!(output.diagrams.len(), 20);
//! assert_eq!(output.loads.len(), 3);
//!
//! // World-space polylines for the renderer
//! let points = output.diagrams.to_world_points(&frame);
//! assert_eq!(points.moment.len(), 20);
//! ```

pub mod classify;
pub mod contact;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod loads;
pub mod sampler;

// Re-export common types
pub mod prelude {
    pub use crate::classify::{classify_contacts, self_weight};
    pub use crate::contact::{ColliderId, Contact};
    pub use crate::engine::{BodyInertia, DiagramEngine, StepInput, StepOutput};
    pub use crate::error::{DiagramError, DiagramResult};
    pub use crate::geometry::{BeamFrame, Vec2};
    pub use crate::loads::{Load, PointForce, PointMoment, PolynomialForce, PolynomialMoment};
    pub use crate::sampler::{sample, DiagramPoints, Diagrams, SamplerConfig};
}
