use criterion::{black_box, criterion_group, criterion_main, Criterion};
use physics::PhysicsSim;

fn bench_next_timestep(c: &mut Criterion) {
    let mut sim = PhysicsSim::default();
    c.bench_function("quad_timestep", |b| {
        b.iter(|| {
            if sim.next_timestep(black_box(&[400.0, 405.0, 398.0, 402.0])) {
                sim.reset();
            }
        });
    });
}

criterion_group!(benches, bench_next_timestep);
criterion_main!(benches);
