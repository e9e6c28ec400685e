use std::hint::black_box;

use clearsweep_core::*;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const TIERS: [(&str, GameConfig, Coord2); 3] = [
    ("beginner", GameConfig::beginner(), (4, 4)),
    ("intermediate", GameConfig::intermediate(), (8, 8)),
    ("expert", GameConfig::expert(), (8, 15)),
];

fn bench_is_solvable(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_solvable");

    for (name, config, start) in TIERS {
        let mut rng = SmallRng::seed_from_u64(0xdecaf);
        let grid = place_mines(config, start, &mut rng);
        group.bench_function(name, |b| {
            b.iter(|| black_box(analyze(black_box(&grid), start)))
        });
    }

    group.finish();
}

fn bench_find_hint(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_hint");

    for (name, config, start) in TIERS {
        let mut grid = GuaranteedBoardGenerator::new(7, start).generate(config);
        flood_fill(&mut grid, start);
        group.bench_function(name, |b| b.iter(|| black_box(find_hint(black_box(&grid)))));
    }

    group.finish();
}

criterion_group!(benches, bench_is_solvable, bench_find_hint);
criterion_main!(benches);
