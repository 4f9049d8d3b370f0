use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_astar::{CostModel, PathFinder, SearchConfig};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_blocked(n: usize, density: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0);
    let last = n as i32 - 1;
    (0..n as i32)
        .flat_map(|x| (0..n as i32).map(move |y| Point::new(x, y)))
        .filter(|p| *p != Point::new(0, 0) && *p != Point::new(last, last))
        .filter(|_| rng.gen_bool(density))
        .collect()
}

fn search(n: usize, blocked: &[Point], config: &SearchConfig) -> Vec<Point> {
    let goal = Point::new(n as i32 - 1, n as i32 - 1);
    let mut finder = PathFinder::with_config(
        n,
        n,
        Point::new(0, 0),
        goal,
        blocked.iter().copied(),
        config.clone(),
    )
    .unwrap();
    finder.run();
    finder.path()
}

fn random_grid_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("random grid");
    for n in [32, 128, 256] {
        let blocked = random_blocked(n, 0.25);
        for (name, cost_model) in [
            ("separated", CostModel::Separated),
            ("accumulated", CostModel::Accumulated),
        ] {
            let config = SearchConfig {
                cost_model,
                ..SearchConfig::default()
            };
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter(|| black_box(search(n, &blocked, &config)))
            });
        }
    }
    group.finish();
}

fn unreachable_bench(c: &mut Criterion) {
    const N: usize = 128;
    // Wall across the whole grid so the goal cannot be reached
    let wall = (0..N as i32).map(|y| Point::new(N as i32 / 2, y)).collect::<Vec<_>>();
    let mut group = c.benchmark_group("unreachable goal");
    for check_components in [false, true] {
        let config = SearchConfig {
            check_components,
            ..SearchConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new("check components", check_components),
            &check_components,
            |b, _| b.iter(|| black_box(search(N, &wall, &config))),
        );
    }
    group.finish();
}

criterion_group!(benches, random_grid_bench, unreachable_bench);
criterion_main!(benches);
