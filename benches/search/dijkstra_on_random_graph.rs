use path_core::{search::dijkstra::Dijkstra, util::test_graphs::random_graph};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("dijkstra_on_random_graph");
    for number_nodes in [1000, 50_000, 100_000] {
        // 2.5 edges per node on average
        let number_edges = (number_nodes as f32 * 2.5) as usize;
        let g = random_graph(number_nodes, number_edges, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(number_nodes), &g, |b, g| {
            let src = rng.gen_range(0..number_nodes);
            let dst = rng.gen_range(0..number_nodes);
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.search(&src, &dst).ok());
            })
        });
    }
    group.finish();
}
