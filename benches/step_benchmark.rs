use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gol_bench::data::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut group = c.benchmark_group("step");
    for k in [2u32, 4, 6, 8, 10] {
        let size = 1usize << k;
        let grid = Grid::random(size, size, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| grid.step())
        });
    }
    group.finish();
}

fn bench_all_dead(c: &mut Criterion) {
    let grid = Grid::dead(256, 256).unwrap();
    c.bench_function("step_256x256_dead", |b| b.iter(|| black_box(&grid).step()));
}

criterion_group!(benches, bench_step, bench_all_dead);
criterion_main!(benches);
