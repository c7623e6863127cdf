//! Per-step orchestration: contacts in, diagrams out

use log::warn;
use serde::{Deserialize, Serialize};

use crate::classify::{classify_contacts, self_weight};
use crate::contact::Contact;
use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{BeamFrame, Vec2};
use crate::loads::Load;
use crate::sampler::{sample, Diagrams, SamplerConfig};

/// Inertial data of the beam body, used to synthesize self-weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyInertia {
    /// Body mass (kg)
    pub mass: f64,
    /// Per-body gravity multiplier from the physics engine
    pub gravity_scale: f64,
    /// World gravity vector
    pub gravity: Vec2,
}

impl BodyInertia {
    /// Create inertial data for the beam body
    pub fn new(mass: f64, gravity_scale: f64, gravity: Vec2) -> Self {
        Self {
            mass,
            gravity_scale,
            gravity,
        }
    }
}

/// Everything the host supplies for one simulation step
#[derive(Debug, Clone, Copy)]
pub struct StepInput<'a> {
    /// Beam frame recomputed from the host transform this step
    pub frame: BeamFrame,
    /// Inertial data for self-weight
    pub inertia: BodyInertia,
    /// Contacts reported by the physics engine this step
    pub contacts: &'a [Contact],
    /// Physics step duration (seconds), converts impulses to forces
    pub dt: f64,
}

/// The step's results: the classified load set and the sampled diagrams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutput {
    /// Active loads for this step (self-weight plus classified contacts),
    /// exposed for inspection; discarded at the next step
    pub loads: Vec<Load>,
    /// Sampled pressure, shear and moment diagrams
    pub diagrams: Diagrams,
}

/// The beam diagram engine
///
/// Stateless between steps apart from its validated configuration: the load
/// list and all output arrays are rebuilt from scratch on every call to
/// [`step`](DiagramEngine::step).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagramEngine {
    config: SamplerConfig,
}

impl DiagramEngine {
    /// Create an engine with the given sampler configuration
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// The engine's sampler configuration
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Run one simulation step
    ///
    /// Classifies the contacts into load primitives, appends self-weight and
    /// samples the superposed diagrams. A zero-length beam yields a zeroed
    /// output rather than an error, so one bad step never halts the loop; a
    /// non-positive step duration is a caller bug and is rejected.
    pub fn step(&self, input: &StepInput) -> DiagramResult<StepOutput> {
        if input.dt <= 0.0 {
            return Err(DiagramError::InvalidStepDuration(input.dt));
        }

        if input.frame.is_degenerate() {
            warn!("beam has zero length, skipping sampling this step");
            return Ok(StepOutput {
                loads: Vec::new(),
                diagrams: Diagrams::zeroed(self.config.samples()),
            });
        }

        let mut loads = classify_contacts(&input.frame, input.contacts, input.dt);
        if let Some(weight) = self_weight(&input.frame, &input.inertia) {
            loads.push(weight);
        }

        let diagrams = sample(&loads, input.frame.length, &self.config);
        Ok(StepOutput { loads, diagrams })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_input(contacts: &[Contact]) -> StepInput {
        StepInput {
            frame: BeamFrame::horizontal(Vec2::new(0.0, 0.0), 10.0, 0.4),
            inertia: BodyInertia::new(5.0, 1.0, Vec2::new(0.0, -9.8)),
            contacts,
            dt: 0.02,
        }
    }

    #[test]
    fn test_zero_contacts_yields_self_weight_only() {
        let engine = DiagramEngine::default();
        let output = engine.step(&test_input(&[])).unwrap();
        assert_eq!(output.loads.len(), 1);
        assert_relative_eq!(output.diagrams.pressure[0], -4.9, epsilon = 1e-10);
        assert_relative_eq!(output.diagrams.shear[19], 49.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_length_beam_skips_sampling() {
        let engine = DiagramEngine::default();
        let mut input = test_input(&[]);
        input.frame.length = 0.0;
        let output = engine.step(&input).unwrap();
        assert!(output.loads.is_empty());
        assert_eq!(output.diagrams.len(), 20);
        assert!(output.diagrams.shear.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_non_positive_dt_rejected() {
        let engine = DiagramEngine::default();
        let mut input = test_input(&[]);
        input.dt = 0.0;
        assert!(matches!(
            engine.step(&input),
            Err(DiagramError::InvalidStepDuration(_))
        ));
    }
}
