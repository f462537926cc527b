use rustc_hash::FxHashMap;

use crate::{
    constants::Weight,
    graph::{NodeIndex, Vertex, WeightedGraph},
};

use self::shortest_path::ShortestPath;

pub mod astar;
pub mod dijkstra;
pub mod path_finder;
pub mod shortest_path;

pub use path_finder::{find_shortest_path, PathFinder};

/// How a search ended. Running out of candidates is an ordinary outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<V> {
    Found(ShortestPath<V>),
    /// Every vertex reachable from the start was settled without meeting the goal
    Unreachable,
    /// The configured timeout elapsed first
    TimedOut,
    /// The configured settle limit was hit first
    LimitReached,
}

impl<V> SearchOutcome<V> {
    pub fn path(&self) -> Option<&ShortestPath<V>> {
        match self {
            SearchOutcome::Found(sp) => Some(sp),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<ShortestPath<V>> {
        match self {
            SearchOutcome::Found(sp) => Some(sp),
            _ => None,
        }
    }

    pub fn weight(&self) -> Option<Weight> {
        self.path().map(|sp| sp.weight)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchOutcome::Unreachable)
    }
}

/// Walks the predecessor links from `target` back to the vertex without a
/// predecessor (the source).
pub(crate) fn reconstruct_path<V: Vertex>(
    g: &WeightedGraph<V>,
    target: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<ShortestPath<V>> {
    let (weight, mut previous_node) = *node_data.get(&target)?;
    let mut path = vec![g.vertex_at(target).clone()];

    while let Some(prev_node) = previous_node {
        path.push(g.vertex_at(prev_node).clone());
        previous_node = node_data.get(&prev_node)?.1;
    }
    path.reverse();

    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path<V: Vertex>(outcome: crate::error::Result<SearchOutcome<V>>) {
    assert_eq!(Ok(SearchOutcome::Unreachable), outcome);
}

#[cfg(test)]
pub(crate) fn assert_path<V: Vertex>(
    expected_path: Vec<V>,
    expected_weight: Weight,
    outcome: crate::error::Result<SearchOutcome<V>>,
) {
    assert_eq!(
        Ok(SearchOutcome::Found(ShortestPath::new(
            expected_path,
            expected_weight
        ))),
        outcome
    );
}
