use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rl::{TakeoffTask, TaskConfig};

fn bench_task_step(c: &mut Criterion) {
    let mut task = TakeoffTask::new(&TaskConfig::default()).unwrap();
    task.reset();
    c.bench_function("takeoff_step", |b| {
        b.iter(|| {
            let (obs, reward, done) = task.step(black_box(&[400.0; 4]));
            if done {
                task.reset();
            }
            black_box((obs, reward))
        });
    });
}

criterion_group!(benches, bench_task_step);
criterion_main!(benches);
