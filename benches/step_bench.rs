use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gravity_sandbox::{SandboxWorld, ScenarioKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_frame_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_step");

    for kind in [ScenarioKind::Chain, ScenarioKind::Tower, ScenarioKind::Chaos] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let mut world = SandboxWorld::new();
            world
                .load_scenario_with_rng(kind, &mut StdRng::seed_from_u64(11))
                .expect("built-in scenario loads");
            b.iter(|| world.step(black_box(1.0 / 60.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame_step);
criterion_main!(benches);
