use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use glam::DVec2;
use moonsim::prelude::*;
use rand::prelude::*;

fn random_scenario(rng: &mut StdRng, len: usize) -> Scenario {
    (0..len).fold(Scenario::new(), |scenario, i| {
        scenario.with_body(BodyDescriptor {
            name: format!("body {i}"),
            position: DVec2::new(rng.gen_range(0.0..900.0), rng.gen_range(0.0..650.0)),
            radius: rng.gen_range(1.0..30.0),
            color: [255; 3],
            mass: rng.gen_range(1e20..1e25),
            velocity: DVec2::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)),
        })
    })
}

fn bench_force(c: &mut Criterion) {
    let force = PairwiseForce::default();
    let bodies = Scenario::earth_luna().instance();

    c.bench_function("pairwise force", |bencher| {
        bencher.iter(|| force.force(&bodies[1], &bodies[0]))
    });
}

fn bench_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("step");

    for len in [2, 8, 32] {
        for update_order in [UpdateOrder::Snapshot, UpdateOrder::InPlace] {
            let params = SimulationParams::default().with_update_order(update_order);
            let scenario = random_scenario(&mut rng, len);
            let mut simulation = Simulation::new(&scenario, params).unwrap();

            group.bench_function(BenchmarkId::new(format!("{update_order:?}"), len), |bencher| {
                bencher.iter(|| simulation.step())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_force, bench_step);
criterion_main!(benches);
