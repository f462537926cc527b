//! Crate to compute shortest paths on weighted graphs with Dijkstra and A*.
//!
//! # Basic usage
//! ```
//! use path_core::prelude::*;
//!
//! // Build an undirected graph
//! let mut g = WeightedGraph::new();
//! g.add_undirected_edge("A", "B", 4.0)?;
//! g.add_undirected_edge("A", "C", 2.0)?;
//! g.add_undirected_edge("C", "B", 1.0)?;
//!
//! // Plain Dijkstra
//! let mut finder = PathFinder::new(&g);
//! let outcome = finder.dijkstra(&"A", &"B")?;
//!
//! assert_eq!(outcome.path().map(|sp| sp.nodes.clone()), Some(vec!["A", "C", "B"]));
//! assert_eq!(outcome.weight(), Some(3.0));
//! # Ok::<(), path_core::error::Error>(())
//! ```
//!
//! A* on a grid with the Manhattan heuristic:
//! ```
//! use path_core::prelude::*;
//!
//! let grid = Grid::from_rows(&["..#", "..#", "..."])?;
//! let g = grid.to_graph();
//!
//! let outcome = PathFinder::new(&g).astar(&GridCell::new(0, 0), &GridCell::new(2, 2), manhattan)?;
//! assert_eq!(outcome.weight(), Some(4.0));
//! # Ok::<(), path_core::error::Error>(())
//! ```
pub mod constants;
pub mod error;
pub mod graph;
pub mod grid;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod search_params;
pub mod spanning_tree;
pub mod statistics;
pub mod util;

pub use error::{Error, Result};
