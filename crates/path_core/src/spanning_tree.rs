//! Minimum spanning forest with Kruskal's algorithm.
//!
//! Edge directions are ignored, so an undirected graph stored as two
//! directed edges per connection yields one tree edge per connection.
use log::debug;

use crate::{
    constants::Weight,
    graph::{Vertex, WeightedGraph},
};

/// Disjoint sets over `0..n` with path compression and union by rank
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Point everything on the way directly at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they already were
    /// the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

/// Edges of a minimum spanning forest, ordered by weight. Among equal
/// weights, the source vertex's registration order and then the adjacency
/// order decide.
pub fn minimum_spanning_forest<V: Vertex>(g: &WeightedGraph<V>) -> Vec<TreeEdge<V>> {
    let mut edges: Vec<_> = g
        .vertices()
        .filter_map(|v| g.node_index(v))
        .flat_map(|node_idx| g.neighbors_outgoing(node_idx))
        .collect();
    // Stable, keeps insertion order among ties
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = UnionFind::new(g.num_vertices());
    let mut forest = Vec::with_capacity(g.num_vertices().saturating_sub(1));

    for edge in edges {
        if forest.len() + 1 == g.num_vertices() {
            break;
        }
        if sets.union(edge.source.index(), edge.target.index()) {
            forest.push(TreeEdge {
                from: g.vertex_at(edge.source).clone(),
                to: g.vertex_at(edge.target).clone(),
                weight: edge.weight,
            });
        }
    }

    debug!(
        "Spanning forest with {} edges over {} vertices",
        forest.len(),
        g.num_vertices()
    );
    forest
}

pub fn total_weight<V>(forest: &[TreeEdge<V>]) -> Weight {
    forest.iter().map(|edge| edge.weight).sum()
}
