use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use firstfit::config::FFConfig;
use firstfit::opt::ff_optimizer::FFOptimizer;
use firstfit::opt::search::search;
use maskpack::entities::{Container, Instance, Item, Layout};
use maskpack::geometry::{BinaryMask, rotate_and_trim};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, rotation_bench, search_bench, solve_bench);

const GRID_SIZE: usize = 256;
const SHIFT_STEPS: [usize; 3] = [2, 5, 10];

/// Container in the shape of a filled disc, centred in a square grid
fn disc_container(size: usize) -> Container {
    let mut mask = BinaryMask::empty(size, size);
    let (c, radius) = (size as f32 / 2.0, size as f32 / 2.0 - 1.0);
    for r in 0..size {
        for col in 0..size {
            let (dy, dx) = (r as f32 + 0.5 - c, col as f32 + 0.5 - c);
            if dx * dx + dy * dy <= radius * radius {
                mask.set(r, col, true);
            }
        }
    }
    Container::new(mask)
}

fn random_items(rng: &mut SmallRng, n: usize) -> Vec<Item> {
    (0..n)
        .map(|id| {
            let (h, w) = (rng.random_range(10..40), rng.random_range(10..40));
            Item::new(id, BinaryMask::filled(h, w))
        })
        .collect()
}

/// Benchmark the rotation of a single item mask for all angles of the default grid
fn rotation_bench(c: &mut Criterion) {
    let config = FFConfig::default();
    let mask = BinaryMask::filled(64, 32);
    let n_angles = config.angles().count();

    let mut group = c.benchmark_group("rotate_and_trim");
    group.throughput(criterion::Throughput::Elements(n_angles as u64));
    group.bench_function("64x32", |b| {
        b.iter(|| {
            config
                .angles()
                .filter_map(|a| rotate_and_trim(&mask, a))
                .count()
        })
    });
    group.finish();
}

/// Benchmark how many candidates a single search can test every second, for different shift steps.
/// The layout already holds a couple of items, so that the first candidates are rejected.
fn search_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let container = disc_container(GRID_SIZE);
    let items = random_items(&mut rng, 8);
    let probe = Item::new(items.len(), BinaryMask::filled(48, 48));

    let mut group = c.benchmark_group("search");
    for shift_step in SHIFT_STEPS {
        let config = FFConfig {
            shift_step,
            ..FFConfig::default()
        };
        let mut optimizer = FFOptimizer::new(
            Instance::new(container.clone(), items.clone()),
            config,
        );
        optimizer.solve();
        let layout: Layout = optimizer.layout.clone();

        let mut n_candidates = 0;
        search(&layout, &probe, &config, None, &mut n_candidates);
        group.throughput(criterion::Throughput::Elements(n_candidates as u64));

        group.bench_function(BenchmarkId::from_parameter(shift_step), |b| {
            b.iter(|| {
                let mut counter = 0;
                search(&layout, &probe, &config, None, &mut counter)
            })
        });
    }
    group.finish();
}

/// Benchmark a complete first-fit run on a random instance
fn solve_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let instance = Instance::new(disc_container(GRID_SIZE), random_items(&mut rng, 12));

    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    for shift_step in SHIFT_STEPS {
        let config = FFConfig {
            shift_step,
            ..FFConfig::default()
        };
        let mut optimizer = FFOptimizer::new(instance.clone(), config);
        group.bench_function(BenchmarkId::from_parameter(shift_step), |b| {
            b.iter(|| optimizer.solve())
        });
    }
    group.finish();
}
