mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fire_spread::fixtures::random_forest;
use fire_spread::prelude::{schedule_spread, SpreadConfig};

const TREE_COUNTS: [usize; 4] = [100, 300, 1000, 3000];
const RADII: [f32; 3] = [5.0, 15.0, 40.0];

fn scheduler_tree_count_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler/tree_count");
    let config = SpreadConfig::default().with_max_time(f32::INFINITY);

    for &count in &TREE_COUNTS {
        // Keep density constant: 300 trees per 100x100.
        let extent = 100.0 * (count as f32 / 300.0).sqrt();
        let entities = random_forest(count, extent, 0xF12E ^ count as u64);
        group.throughput(common::elements_throughput(count));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let schedule = schedule_spread(&entities, "Tree_1", &config).expect("valid");
                black_box(schedule.len());
            });
        });
    }

    group.finish();
}

fn scheduler_radius_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler/radius");
    let entities = random_forest(1000, 180.0, 0xBEEF);
    group.throughput(common::elements_throughput(entities.len()));

    for &radius in &RADII {
        let config = SpreadConfig::new(1.9, radius).with_max_time(f32::INFINITY);
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let schedule = schedule_spread(&entities, "Tree_1", &config).expect("valid");
                black_box(schedule.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = scheduler_tree_count_benches, scheduler_radius_benches
}
criterion_main!(benches);
