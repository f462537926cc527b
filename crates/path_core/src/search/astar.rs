//! Implementation of the A* search algorithm.
use crate::{
    constants::Weight,
    error::Result,
    graph::{Vertex, WeightedGraph},
    search_params::SearchParams,
    statistics::SearchStats,
};

use super::{path_finder::PathFinder, SearchOutcome};

pub struct AStar<'a, V> {
    pub stats: SearchStats,
    params: SearchParams,
    g: &'a WeightedGraph<V>,
}

impl<'a, V: Vertex> AStar<'a, V> {
    pub fn new(g: &'a WeightedGraph<V>) -> Self {
        Self::with_params(g, SearchParams::default())
    }

    pub fn with_params(g: &'a WeightedGraph<V>, params: SearchParams) -> Self {
        AStar {
            g,
            params,
            stats: SearchStats::default(),
        }
    }

    /// `heuristic(vertex, target)` must not overestimate the remaining
    /// distance, otherwise the returned path may not be the shortest.
    pub fn search(
        &mut self,
        source: &V,
        target: &V,
        heuristic: impl Fn(&V, &V) -> Weight,
    ) -> Result<SearchOutcome<V>> {
        let mut finder = PathFinder::with_params(self.g, self.params);
        let outcome = finder.astar(source, target, heuristic);
        self.stats = finder.stats;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        grid::{Grid, GridCell},
        search::{assert_no_path, assert_path, dijkstra::Dijkstra},
        util::math::{euclidean, manhattan, zero},
    };

    use super::*;

    fn null_heuristic(_: &usize, _: &usize) -> Weight {
        0.0
    }

    #[test]
    fn simple_path() {
        //      7 -> 8 -> 9
        //      |         |
        // 0 -> 5 -> 6 -  |
        // |         |  \ |
        // 1 -> 2 -> 3 -> 4
        let mut g = WeightedGraph::new();

        for i in 0..10usize {
            g.add_vertex(i);
        }

        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        g.add_edge(3, 4, 20.0).unwrap();
        g.add_edge(0, 5, 5.0).unwrap();
        g.add_edge(5, 6, 1.0).unwrap();
        g.add_edge(6, 4, 20.0).unwrap();
        g.add_edge(6, 3, 20.0).unwrap();
        g.add_edge(5, 7, 5.0).unwrap();
        g.add_edge(7, 8, 1.0).unwrap();
        g.add_edge(8, 9, 1.0).unwrap();
        g.add_edge(9, 4, 1.0).unwrap();

        let mut astar = AStar::new(&g);

        assert_no_path(astar.search(&4, &0, null_heuristic)); // Cannot be reached
        assert_path(
            vec![0, 5, 7, 8, 9, 4],
            13.0,
            astar.search(&0, &4, null_heuristic),
        );
        assert_path(vec![6, 3], 20.0, astar.search(&6, &3, null_heuristic));
        assert_path(vec![4], 0.0, astar.search(&4, &4, null_heuristic));
        assert_path(
            vec![1, 2, 3, 4],
            22.0,
            astar.search(&1, &4, null_heuristic),
        );
    }

    #[test]
    fn go_around_on_grid() {
        // S # .
        // . # .
        // . . G
        let grid = Grid::from_rows(&[".#.", ".#.", "..."]).unwrap();
        let g = grid.to_graph();
        let (s, t) = (GridCell::new(0, 0), GridCell::new(2, 0));

        let mut astar = AStar::new(&g);
        let mut dijkstra = Dijkstra::new(&g);

        let heuristics: [fn(&GridCell, &GridCell) -> Weight; 3] = [zero, manhattan, euclidean];
        for h in heuristics {
            let outcome = astar.search(&s, &t, h);
            assert_eq!(outcome, dijkstra.search(&s, &t));
            assert_eq!(outcome.unwrap().weight(), Some(6.0));
        }
    }

    #[test]
    fn overestimating_heuristic_may_miss_shortest_path() {
        // s -1-> a -1-> t    s -3-> t
        let mut g = WeightedGraph::new();
        g.add_edge("s", "a", 1.0).unwrap();
        g.add_edge("a", "t", 1.0).unwrap();
        g.add_edge("s", "t", 3.0).unwrap();

        let mut astar = AStar::new(&g);
        let inflated = |v: &&str, _: &&str| if *v == "a" { 100.0 } else { 0.0 };

        assert_path(vec!["s", "t"], 3.0, astar.search(&"s", &"t", inflated));
        assert_path(vec!["s", "a", "t"], 2.0, astar.search(&"s", &"t", zero));
    }
}
