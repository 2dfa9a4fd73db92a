use criterion::{criterion_group, criterion_main, Criterion};
use labyrinth::{
    config::{CellSize, DEFAULT_WALL_THICKNESS},
    generators,
    grid::Grid,
    units::{ColumnsCount, RowsCount},
    walls,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| {
            let mut g = Grid::new(RowsCount(32), ColumnsCount(32)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng)
        })
    });
}

fn bench_recursive_backtracker_maze_256(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(256);
    c.bench_function("recursive_backtracker_maze_256", move |b| {
        b.iter(|| {
            let mut g = Grid::new(RowsCount(256), ColumnsCount(256)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng)
        })
    });
}

fn bench_closed_walls_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(7);
    let mut g = Grid::new(RowsCount(32), ColumnsCount(32)).unwrap();
    let _ = generators::recursive_backtracker(&mut g, &mut rng);
    let cell_size = CellSize::new(10.0, 10.0).unwrap();

    c.bench_function("closed_walls_32", move |b| {
        b.iter(|| walls::closed_walls(&g, cell_size, DEFAULT_WALL_THICKNESS))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_256,
    bench_closed_walls_32
);
criterion_main!(benches);
