use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::{Vertex, WeightedGraph};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    /// Dequeued entries dropped because their vertex was already settled
    pub stale_entries: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.stale_entries = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} stale entries, {} edges relaxed in {:?}",
            self.nodes_settled, self.stale_entries, self.edges_relaxed, self.duration
        )
    }
}

pub fn average_out_degree<V: Vertex>(g: &WeightedGraph<V>) -> f64 {
    if g.num_vertices() == 0 {
        return 0.0;
    }
    g.num_edges() as f64 / g.num_vertices() as f64
}

pub fn max_out_degree<V: Vertex>(g: &WeightedGraph<V>) -> usize {
    g.vertices().map(|v| g.out_degree(v)).max().unwrap_or(0)
}
