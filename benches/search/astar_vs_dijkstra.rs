use path_core::{
    grid::{Grid, GridCell},
    search::PathFinder,
    util::math::manhattan,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn gen_rand_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);

    let mut grid = Grid::random(size, size, 0.2, &mut rng).expect("grid fits in memory");
    grid.set_blocked(GridCell::new(0, 0), false);
    grid.set_blocked(GridCell::new(size - 1, size - 1), false);
    grid
}

fn criterion_benchmark(c: &mut Criterion) {
    let grids: Vec<Grid> = [32, 128, 512].iter().map(|i| gen_rand_grid(*i)).collect();

    let mut group = c.benchmark_group("astar_vs_dijkstra");
    for grid in grids {
        let g = grid.to_graph();
        let src = GridCell::new(0, 0);
        let dst = GridCell::new(grid.width() - 1, grid.height() - 1);

        group.bench_with_input(BenchmarkId::new("Dijkstra", grid.width()), &g, |b, g| {
            let mut finder = PathFinder::new(g);
            b.iter(|| {
                finder.dijkstra(&src, &dst).ok();
            });
        });
        group.bench_with_input(BenchmarkId::new("AStar", grid.width()), &g, |b, g| {
            let mut finder = PathFinder::new(g);
            b.iter(|| {
                finder.astar(&src, &dst, manhattan).ok();
            });
        });
    }
    group.finish();
}
