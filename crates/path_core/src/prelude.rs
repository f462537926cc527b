//! Re-exports of the most commonly used items in `path_core`.
pub use crate::constants::Weight;
pub use crate::error::Error;
pub use crate::graph::{Vertex, WeightedGraph};
pub use crate::grid::{Grid, GridCell};
pub use crate::priority_queue::PriorityQueue;
pub use crate::search::shortest_path::ShortestPath;
pub use crate::search::{find_shortest_path, PathFinder, SearchOutcome};
pub use crate::search_params::SearchParams;
pub use crate::statistics::SearchStats;
pub use crate::util::math::{euclidean, manhattan, zero};

pub use crate::edge;
