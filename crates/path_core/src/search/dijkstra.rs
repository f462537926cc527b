use crate::{
    error::Result,
    graph::{Vertex, WeightedGraph},
    search_params::SearchParams,
    statistics::SearchStats,
};

use super::{path_finder::PathFinder, SearchOutcome};

pub struct Dijkstra<'a, V> {
    pub stats: SearchStats,
    params: SearchParams,
    g: &'a WeightedGraph<V>,
}

impl<'a, V: Vertex> Dijkstra<'a, V> {
    pub fn new(graph: &'a WeightedGraph<V>) -> Self {
        Self::with_params(graph, SearchParams::default())
    }

    pub fn with_params(graph: &'a WeightedGraph<V>, params: SearchParams) -> Self {
        Dijkstra {
            g: graph,
            params,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: &V, target: &V) -> Result<SearchOutcome<V>> {
        let mut finder = PathFinder::with_params(self.g, self.params);
        let outcome = finder.dijkstra(source, target);
        self.stats = finder.stats;
        outcome
    }
}
