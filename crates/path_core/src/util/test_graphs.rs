use rand::Rng;

use crate::{
    constants::Weight,
    error::Result,
    graph::WeightedGraph,
    grid::{Grid, GridCell},
};

pub const WALLED_GRID_START: GridCell = GridCell { x: 0, y: 0 };
pub const WALLED_GRID_GOAL: GridCell = GridCell { x: 0, y: 4 };

fn connect(g: &mut WeightedGraph<&'static str>, a: &'static str, b: &'static str, weight: Weight) {
    let a = g.add_vertex(a);
    let b = g.add_vertex(b);
    g.push_edge(a, b, weight);
    g.push_edge(b, a, weight);
}

fn connect_directed(
    g: &mut WeightedGraph<&'static str>,
    a: &'static str,
    b: &'static str,
    weight: Weight,
) {
    let a = g.add_vertex(a);
    let b = g.add_vertex(b);
    g.push_edge(a, b, weight);
}

/// Undirected graph where the direct route A -> B -> E (7) loses against
/// A -> C -> D -> F -> E (6).
///
/// ```text
///   A --4-- B
///   |        \
///   2         3
///   |          \
///   C --2-- D --3-- E
///    \      |      /
///     4     1     1
///      \    |    /
///       `-- F --'
/// ```
pub fn scenario_graph() -> WeightedGraph<&'static str> {
    let mut g = WeightedGraph::new();

    connect(&mut g, "A", "B", 4.0);
    connect(&mut g, "A", "C", 2.0);
    connect(&mut g, "B", "E", 3.0);
    connect(&mut g, "C", "D", 2.0);
    connect(&mut g, "C", "F", 4.0);
    connect(&mut g, "D", "E", 3.0);
    connect(&mut g, "D", "F", 1.0);
    connect(&mut g, "E", "F", 1.0);

    g
}

pub fn generate_complex_graph() -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new();

    connect(&mut graph, "A", "B", 3.0);
    connect(&mut graph, "A", "C", 5.0);
    connect(&mut graph, "A", "K", 3.0);

    connect(&mut graph, "B", "D", 5.0);
    connect(&mut graph, "B", "C", 3.0);

    connect(&mut graph, "C", "D", 2.0);
    connect(&mut graph, "C", "J", 2.0);

    connect(&mut graph, "D", "J", 4.0);
    connect(&mut graph, "D", "E", 7.0);

    connect(&mut graph, "E", "J", 3.0);
    connect(&mut graph, "E", "F", 6.0);

    connect(&mut graph, "F", "H", 2.0);
    connect(&mut graph, "F", "G", 4.0);

    connect(&mut graph, "G", "H", 3.0);
    connect(&mut graph, "G", "I", 5.0);

    connect(&mut graph, "H", "I", 3.0);
    connect(&mut graph, "H", "J", 2.0);

    connect(&mut graph, "I", "J", 4.0);
    connect(&mut graph, "I", "K", 6.0);

    connect(&mut graph, "J", "K", 3.0);

    graph
}

pub fn generate_simple_graph() -> WeightedGraph<&'static str> {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let mut g = WeightedGraph::new();

    connect_directed(&mut g, "A", "C", 1.0);
    connect_directed(&mut g, "A", "D", 1.0);
    connect_directed(&mut g, "E", "A", 1.0);
    connect(&mut g, "C", "B", 1.0);
    connect(&mut g, "C", "D", 1.0);

    g
}

/// 5x5 grid with a wall across row 2 that leaves only the rightmost
/// column open:
///
/// ```text
/// S....
/// .....
/// ####.
/// .....
/// G....
/// ```
pub fn walled_grid() -> Result<Grid> {
    let mut grid = Grid::new(5, 5)?;
    for x in 0..4 {
        grid.set_blocked(GridCell::new(x, 2), true);
    }
    Ok(grid)
}

/// Random directed graph on `0..num_vertices` with weights in `1..100`
pub fn random_graph<R: Rng>(num_vertices: usize, num_edges: usize, rng: &mut R) -> WeightedGraph<usize> {
    let mut g = WeightedGraph::with_capacity(num_vertices);

    for i in 0..num_vertices {
        g.add_vertex(i);
    }
    if num_vertices == 0 {
        return g;
    }

    for _ in 0..num_edges {
        let source = g.add_vertex(rng.gen_range(0..num_vertices));
        let target = g.add_vertex(rng.gen_range(0..num_vertices));
        let weight = rng.gen_range(1..100) as Weight;
        g.push_edge(source, target, weight);
    }

    g
}
