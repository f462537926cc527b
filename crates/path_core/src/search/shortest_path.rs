use rustc_hash::FxHashMap;

use crate::{
    constants::Weight,
    graph::{NodeIndex, Vertex, WeightedGraph},
};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath<V> {
    pub nodes: Vec<V>,
    pub weight: Weight,
}

impl<V> ShortestPath<V> {
    pub fn new(nodes: Vec<V>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Result of a full single-source expansion, see
/// [`PathFinder::shortest_path_tree`].
///
/// [`PathFinder::shortest_path_tree`]: super::path_finder::PathFinder::shortest_path_tree
pub struct ShortestPathTree<'a, V> {
    g: &'a WeightedGraph<V>,
    source: NodeIndex,
    node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
}

impl<'a, V: Vertex> ShortestPathTree<'a, V> {
    pub(crate) fn new(
        g: &'a WeightedGraph<V>,
        source: NodeIndex,
        node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
    ) -> Self {
        Self {
            g,
            source,
            node_data,
        }
    }

    pub fn source(&self) -> &V {
        self.g.vertex_at(self.source)
    }

    /// Distance from the source, `None` if `vertex` is unreachable.
    pub fn distance(&self, vertex: &V) -> Option<Weight> {
        let node_idx = self.g.node_index(vertex)?;
        self.node_data.get(&node_idx).map(|(weight, _)| *weight)
    }

    pub fn path_to(&self, vertex: &V) -> Option<ShortestPath<V>> {
        let node_idx = self.g.node_index(vertex)?;
        super::reconstruct_path(self.g, node_idx, &self.node_data)
    }

    /// All reachable vertices with their distance, source included
    pub fn reachable(&self) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.node_data
            .iter()
            .map(move |(node_idx, (weight, _))| (self.g.vertex_at(*node_idx), *weight))
    }

    pub fn num_reachable(&self) -> usize {
        self.node_data.len()
    }
}
