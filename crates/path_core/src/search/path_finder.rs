//! Dijkstra and A* as one algorithm.
//!
//! Plain Dijkstra is A* with the zero heuristic. The queue is keyed by
//! `distance + heuristic(vertex, goal)`; lowered distances are pushed again
//! and the superseded entries are dropped when they come out of the queue
//! for an already settled vertex.
//!
//! The returned path is optimal for non-negative weights and, with A*, for
//! an admissible and consistent heuristic. Checking the heuristic is up to
//! the caller: an overestimating heuristic can yield a longer path without
//! any indication.
use std::time::Instant;

use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    constants::Weight,
    error::{Error, Result},
    graph::{NodeIndex, Vertex, WeightedGraph},
    priority_queue::PriorityQueue,
    search_params::SearchParams,
    statistics::SearchStats,
    util::math,
};

use super::{
    shortest_path::{ShortestPath, ShortestPathTree},
    SearchOutcome,
};

/// Per-query bookkeeping. `node_data` maps every discovered vertex to its
/// tentative distance and predecessor; missing entries are at infinity.
struct SearchState {
    node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
    settled: FxHashSet<NodeIndex>,
}

impl SearchState {
    fn new(source: NodeIndex) -> Self {
        let mut node_data = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        Self {
            node_data,
            settled: FxHashSet::default(),
        }
    }

    fn distance(&self, node_idx: NodeIndex) -> Weight {
        self.node_data
            .get(&node_idx)
            .map_or(Weight::INFINITY, |(weight, _)| *weight)
    }

    fn is_settled(&self, node_idx: NodeIndex) -> bool {
        self.settled.contains(&node_idx)
    }
}

enum Termination {
    Reached,
    Exhausted,
    TimedOut,
    LimitReached,
}

pub struct PathFinder<'a, V> {
    pub stats: SearchStats,
    params: SearchParams,
    g: &'a WeightedGraph<V>,
}

impl<'a, V: Vertex> PathFinder<'a, V> {
    pub fn new(g: &'a WeightedGraph<V>) -> Self {
        Self::with_params(g, SearchParams::default())
    }

    pub fn with_params(g: &'a WeightedGraph<V>, params: SearchParams) -> Self {
        PathFinder {
            stats: SearchStats::default(),
            params,
            g,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn dijkstra(&mut self, start: &V, goal: &V) -> Result<SearchOutcome<V>> {
        self.find_shortest_path(start, goal, math::zero::<V>)
    }

    pub fn astar<H>(&mut self, start: &V, goal: &V, heuristic: H) -> Result<SearchOutcome<V>>
    where
        H: Fn(&V, &V) -> Weight,
    {
        self.find_shortest_path(start, goal, heuristic)
    }

    /// Shortest path from `start` to `goal`, guided by `heuristic(vertex, goal)`.
    ///
    /// Fails only if `start` is not part of the graph. A `goal` that is not
    /// part of the graph is [`SearchOutcome::Unreachable`].
    pub fn find_shortest_path<H>(
        &mut self,
        start: &V,
        goal: &V,
        heuristic: H,
    ) -> Result<SearchOutcome<V>>
    where
        H: Fn(&V, &V) -> Weight,
    {
        let source = self
            .g
            .node_index(start)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", start)))?;

        info!("BEGIN SEARCH from {:?} to {:?}", start, goal);
        self.stats.init();

        let Some(target) = self.g.node_index(goal) else {
            self.stats.finish();
            info!("No path found: goal {:?} is not part of the graph", goal);
            return Ok(SearchOutcome::Unreachable);
        };

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(SearchOutcome::Found(ShortestPath::new(
                vec![start.clone()],
                0.0,
            )));
        }

        let g = self.g;
        let params = self.params;
        let estimate = |node_idx: NodeIndex| heuristic(g.vertex_at(node_idx), goal);
        let (termination, state) = self.run(source, Some(target), estimate, params);
        self.stats.finish();

        let outcome = match termination {
            Termination::Reached => super::reconstruct_path(g, target, &state.node_data)
                .map_or(SearchOutcome::Unreachable, SearchOutcome::Found),
            Termination::Exhausted => SearchOutcome::Unreachable,
            Termination::TimedOut => SearchOutcome::TimedOut,
            Termination::LimitReached => SearchOutcome::LimitReached,
        };

        match &outcome {
            SearchOutcome::Found(sp) => {
                debug!("Path found: {:?}", sp);
                info!("{}, weight: {}", self.stats, sp.weight);
            }
            SearchOutcome::Unreachable => info!("No path found: {}", self.stats),
            SearchOutcome::TimedOut => warn!("Search timed out: {}", self.stats),
            SearchOutcome::LimitReached => warn!("Settle limit reached: {}", self.stats),
        }

        Ok(outcome)
    }

    /// Settles every vertex reachable from `start`. Search limits do not
    /// apply here.
    pub fn shortest_path_tree(&mut self, start: &V) -> Result<ShortestPathTree<'a, V>> {
        let source = self
            .g
            .node_index(start)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", start)))?;

        info!("BEGIN FULL EXPANSION from {:?}", start);
        self.stats.init();

        let (_, state) = self.run(source, None, |_| 0.0, SearchParams::default());
        self.stats.finish();
        info!("{}", self.stats);

        Ok(ShortestPathTree::new(self.g, source, state.node_data))
    }

    fn run<E>(
        &mut self,
        source: NodeIndex,
        target: Option<NodeIndex>,
        estimate: E,
        params: SearchParams,
    ) -> (Termination, SearchState)
    where
        E: Fn(NodeIndex) -> Weight,
    {
        // A deadline beyond what `Instant` can represent is no deadline
        let deadline = params
            .timeout
            .and_then(|timeout| Instant::now().checked_add(timeout));

        let mut state = SearchState::new(source);
        let mut queue = PriorityQueue::new();
        queue.enqueue(source, 0.0);

        let termination = loop {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break Termination::TimedOut;
            }

            let Some((node_idx, _)) = queue.pop() else {
                break Termination::Exhausted;
            };

            // Superseded entry for a vertex settled through a shorter path
            if state.is_settled(node_idx) {
                self.stats.stale_entries += 1;
                continue;
            }

            if params
                .max_nodes_settled
                .is_some_and(|limit| self.stats.nodes_settled >= limit)
            {
                break Termination::LimitReached;
            }

            state.settled.insert(node_idx);
            self.stats.nodes_settled += 1;

            if Some(node_idx) == target {
                break Termination::Reached;
            }

            let distance = state.distance(node_idx);
            for edge in self.g.neighbors_outgoing(node_idx) {
                if state.is_settled(edge.target) {
                    continue;
                }

                let candidate = distance + edge.weight;
                if candidate < state.distance(edge.target) {
                    state
                        .node_data
                        .insert(edge.target, (candidate, Some(node_idx)));
                    self.stats.edges_relaxed += 1;
                    queue.enqueue(edge.target, candidate + estimate(edge.target));
                }
            }
        };

        (termination, state)
    }
}

/// One-shot form of [`PathFinder::find_shortest_path`].
pub fn find_shortest_path<V, H>(
    g: &WeightedGraph<V>,
    start: &V,
    goal: &V,
    heuristic: H,
) -> Result<SearchOutcome<V>>
where
    V: Vertex,
    H: Fn(&V, &V) -> Weight,
{
    PathFinder::new(g).find_shortest_path(start, goal, heuristic)
}
