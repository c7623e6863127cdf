//! Beam Diagrams Example - Crate Resting on a Plank

use beam_diagrams::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Beam Diagrams Example: Crate on a Plank ===\n");

    // A 10 m plank, 0.4 m deep, lying along +X
    let frame = BeamFrame::horizontal(Vec2::new(0.0, 0.0), 10.0, 0.4);
    let inertia = BodyInertia::new(5.0, 1.0, Vec2::new(0.0, -9.8));
    let dt = 1.0 / 50.0;

    // A crate (body 1) rests on the plank with two contact points - these
    // pair into a single distributed edge load. A ball (body 2) presses down
    // at one point with some friction.
    let crate_weight_impulse = 3.0 * 9.8 * dt; // 3 kg crate
    let contacts = [
        Contact::normal_only(
            Vec2::new(2.0, 0.2),
            Vec2::new(0.0, -1.0),
            crate_weight_impulse / 2.0,
            1,
        ),
        Contact::normal_only(
            Vec2::new(3.0, 0.2),
            Vec2::new(0.0, -1.0),
            crate_weight_impulse / 2.0,
            1,
        ),
        Contact::new(
            Vec2::new(7.5, 0.2),
            Vec2::new(0.0, -1.0),
            2.0 * 9.8 * dt,
            0.4 * dt,
            2,
        ),
    ];

    let engine = DiagramEngine::default();
    let output = engine
        .step(&StepInput {
            frame,
            inertia,
            contacts: &contacts,
            dt,
        })
        .expect("Step failed");

    println!("Active loads:");
    for load in &output.loads {
        match load {
            Load::PointForce(f) => {
                println!("  PointForce      at x={:.2}m, F={:.2}N", f.point, f.force)
            }
            Load::PointMoment(m) => {
                println!("  PointMoment     at x={:.2}m, M={:.3}N*m", m.point, m.moment)
            }
            Load::PolynomialForce(f) => println!(
                "  PolynomialForce over [{:.2}, {:.2}]m, total F={:.2}N",
                f.lower_edge, f.upper_edge, f.total_force()
            ),
            Load::PolynomialMoment(m) => println!(
                "  PolynomialMoment over [{:.2}, {:.2}]m",
                m.lower_edge, m.upper_edge
            ),
        }
    }

    println!("\nDiagrams ({} samples):", output.diagrams.len());
    println!("{:>8} {:>12} {:>12} {:>12}", "x [m]", "p [N/m]", "V [N]", "M [N*m]");
    for i in 0..output.diagrams.len() {
        println!(
            "{:>8.2} {:>12.3} {:>12.3} {:>12.3}",
            output.diagrams.coordinates[i],
            output.diagrams.pressure[i],
            output.diagrams.shear[i],
            output.diagrams.moment[i],
        );
    }

    let points = output.diagrams.to_world_points(&frame);
    println!(
        "\nMoment polyline endpoint in world space: ({:.3}, {:.3})",
        points.moment[points.moment.len() - 1].x,
        points.moment[points.moment.len() - 1].y,
    );

    let json = serde_json::to_string_pretty(&output.loads).expect("Serialization failed");
    println!("\nLoad set as JSON:\n{json}");

    println!("\n=== Step Complete ===");
}
