//! Raw contact records reported by the physics engine

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Identifier of a contacting body (collider)
pub type ColliderId = u64;

/// A single contact point reported by the physics engine for one step
///
/// Impulses are accumulated over the physics step; the classifier divides by
/// the step duration to recover forces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Contact {
    /// Contact position in world space
    pub position: Vec2,
    /// Contact normal (unit vector)
    pub normal: Vec2,
    /// Accumulated impulse along the normal (non-negative)
    pub normal_impulse: f64,
    /// Accumulated friction impulse along the surface
    pub tangent_impulse: f64,
    /// The body on the other side of the contact
    pub body: ColliderId,
}

impl Contact {
    /// Create a new contact record
    pub fn new(
        position: Vec2,
        normal: Vec2,
        normal_impulse: f64,
        tangent_impulse: f64,
        body: ColliderId,
    ) -> Self {
        Self {
            position,
            normal,
            normal_impulse,
            tangent_impulse,
            body,
        }
    }

    /// Create a frictionless contact (no tangential impulse)
    pub fn normal_only(position: Vec2, normal: Vec2, normal_impulse: f64, body: ColliderId) -> Self {
        Self::new(position, normal, normal_impulse, 0.0, body)
    }
}
