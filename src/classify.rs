//! Conversion of raw contact events into load primitives

use std::collections::HashSet;

use log::{debug, warn};

use crate::contact::{ColliderId, Contact};
use crate::engine::BodyInertia;
use crate::geometry::BeamFrame;
use crate::loads::{Load, PointForce, PointMoment, PolynomialForce, PolynomialMoment};

/// Two contacts closer than this along the beam cannot form an edge load
const MIN_EDGE_SPAN: f64 = 1e-10;

/// Convert the step's contact set into load primitives
///
/// Contacts sharing a contacting body are paired into a distributed edge
/// load; everything else becomes a point force plus a friction point moment.
/// Pairing is greedy in input order and a body is paired at most once, so a
/// body reporting three or more contact points keeps only its first two as an
/// edge and the rest fall back to point loads. `dt` is the physics step
/// duration used to convert impulses to forces.
pub fn classify_contacts(frame: &BeamFrame, contacts: &[Contact], dt: f64) -> Vec<Load> {
    let (pairs, singles) = group_by_body(contacts);

    let mut loads = Vec::new();
    for (i, j) in &pairs {
        push_edge_loads(frame, &contacts[*i], &contacts[*j], dt, &mut loads);
    }
    for i in &singles {
        push_point_loads(frame, &contacts[*i], dt, &mut loads);
    }

    debug!(
        "classified {} contacts into {} loads ({} bodies paired)",
        contacts.len(),
        loads.len(),
        pairs.len()
    );
    loads
}

/// Group contacts into edge pairs and leftover singletons
///
/// Greedy in input order; each body pairs at most once.
fn group_by_body(contacts: &[Contact]) -> (Vec<(usize, usize)>, Vec<usize>) {
    let mut used = vec![false; contacts.len()];
    let mut paired_bodies: HashSet<ColliderId> = HashSet::new();
    let mut pairs = Vec::new();
    let mut singles = Vec::new();

    for i in 0..contacts.len() {
        if used[i] {
            continue;
        }

        if !paired_bodies.contains(&contacts[i].body) {
            let partner = (i + 1..contacts.len())
                .find(|&j| !used[j] && contacts[j].body == contacts[i].body);
            if let Some(j) = partner {
                used[i] = true;
                used[j] = true;
                paired_bodies.insert(contacts[i].body);
                pairs.push((i, j));
                continue;
            }
        }

        used[i] = true;
        singles.push(i);
    }

    (pairs, singles)
}

/// Uniform self-weight load over the full beam span
///
/// Returns `None` for a zero-length beam, where no coordinate mapping exists.
pub fn self_weight(frame: &BeamFrame, inertia: &BodyInertia) -> Option<Load> {
    if frame.is_degenerate() {
        return None;
    }
    let weight = inertia.mass * inertia.gravity_scale * inertia.gravity.dot(&frame.up);
    Some(PolynomialForce::uniform(0.0, frame.length, weight / frame.length).into())
}

/// Component of the contact's normal force along the beam's "up" axis
fn perpendicular_force(frame: &BeamFrame, contact: &Contact, dt: f64) -> f64 {
    let sign = if contact.normal.dot(&frame.up) > 0.0 {
        1.0
    } else {
        -1.0
    };
    sign * contact.normal_impulse / dt
}

/// Emit the point force / friction couple pair for an unpaired contact
fn push_point_loads(frame: &BeamFrame, contact: &Contact, dt: f64, loads: &mut Vec<Load>) {
    let x = frame.to_1d(contact.position);
    let parallel = contact.tangent_impulse / dt;
    loads.push(PointForce::new(x, perpendicular_force(frame, contact, dt)).into());
    loads.push(PointMoment::new(x, parallel * frame.thickness / 2.0).into());
}

/// Emit the distributed loads for a paired edge contact
///
/// The endpoint with the smaller beam coordinate becomes the lower edge, so
/// the result does not depend on contact order. Normal forces form a linearly
/// varying pressure whose endpoint triangles each integrate to the endpoint
/// force; friction is spread uniformly and accumulates as a moment ramp.
fn push_edge_loads(frame: &BeamFrame, a: &Contact, b: &Contact, dt: f64, loads: &mut Vec<Load>) {
    let xa = frame.to_1d(a.position);
    let xb = frame.to_1d(b.position);
    let (lower, lower_x, upper, upper_x) = if xa <= xb {
        (a, xa, b, xb)
    } else {
        (b, xb, a, xa)
    };

    let span = upper_x - lower_x;
    if span < MIN_EDGE_SPAN {
        // Both endpoints project to the same coordinate: a coincident point
        // pair, not an edge.
        warn!("degenerate edge from body {} at x = {lower_x}", a.body);
        push_point_loads(frame, a, dt, loads);
        push_point_loads(frame, b, dt, loads);
        return;
    }

    let pressure_lower = perpendicular_force(frame, lower, dt) / (span / 2.0);
    let pressure_upper = perpendicular_force(frame, upper, dt) / (span / 2.0);
    loads.push(PolynomialForce::linear(lower_x, upper_x, pressure_lower, pressure_upper).into());

    let parallel = (lower.tangent_impulse + upper.tangent_impulse) / dt;
    loads.push(PolynomialMoment::ramp(lower_x, upper_x, parallel / span * frame.thickness / 2.0).into());
}
