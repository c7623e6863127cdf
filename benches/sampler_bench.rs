//! Benchmarks for the per-step classify + sample pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use beam_diagrams::prelude::*;

fn make_contacts(bodies: usize, per_body: usize) -> Vec<Contact> {
    let mut contacts = Vec::with_capacity(bodies * per_body);
    for body in 0..bodies {
        for k in 0..per_body {
            let x = (body * per_body + k) as f64 * 0.07 % 10.0;
            contacts.push(Contact::new(
                Vec2::new(x, 0.2),
                Vec2::new(0.0, -1.0),
                0.5 + 0.1 * k as f64,
                0.05,
                body as u64,
            ));
        }
    }
    contacts
}

fn bench_step(c: &mut Criterion, name: &str, contacts: &[Contact], samples: usize) {
    let frame = BeamFrame::horizontal(Vec2::new(0.0, 0.0), 10.0, 0.4);
    let inertia = BodyInertia::new(5.0, 1.0, Vec2::new(0.0, -9.8));
    let engine = DiagramEngine::new(SamplerConfig::new(samples).unwrap());

    c.bench_function(name, |b| {
        b.iter(|| {
            let output = engine
                .step(&StepInput {
                    frame,
                    inertia,
                    contacts: black_box(contacts),
                    dt: 1.0 / 50.0,
                })
                .unwrap();
            black_box(output);
        })
    });
}

fn benchmark_sparse_contacts(c: &mut Criterion) {
    let contacts = make_contacts(4, 1);
    bench_step(c, "step_4_point_contacts_20_samples", &contacts, 20);
}

fn benchmark_paired_contacts(c: &mut Criterion) {
    let contacts = make_contacts(8, 2);
    bench_step(c, "step_8_edge_bodies_20_samples", &contacts, 20);
}

fn benchmark_dense_sampling(c: &mut Criterion) {
    let contacts = make_contacts(16, 2);
    bench_step(c, "step_16_edge_bodies_200_samples", &contacts, 200);
}

criterion_group!(
    benches,
    benchmark_sparse_contacts,
    benchmark_paired_contacts,
    benchmark_dense_sampling,
);

criterion_main!(benches);
