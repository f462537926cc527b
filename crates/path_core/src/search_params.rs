//! Parameters bounding a single search

use std::time::Duration;

/// Optional limits for a search. Both are checked once per dequeued entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub(crate) timeout: Option<Duration>,
    pub(crate) max_nodes_settled: Option<usize>,
}

impl SearchParams {
    pub fn new() -> Self {
        Default::default()
    }

    /// Give up with [`SearchOutcome::TimedOut`] once `timeout` has elapsed.
    ///
    /// [`SearchOutcome::TimedOut`]: crate::search::SearchOutcome::TimedOut
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Give up with [`SearchOutcome::LimitReached`] after settling `limit`
    /// vertices without reaching the goal.
    ///
    /// [`SearchOutcome::LimitReached`]: crate::search::SearchOutcome::LimitReached
    pub fn max_nodes_settled(mut self, limit: usize) -> Self {
        self.max_nodes_settled = Some(limit);
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.timeout.is_some() || self.max_nodes_settled.is_some()
    }
}
