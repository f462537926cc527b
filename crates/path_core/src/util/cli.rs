use std::{ffi::OsString, path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};

use crate::search_params::SearchParams;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    input: Source,

    /// Abort the search after this many milliseconds
    #[arg(long, value_name = "ms")]
    timeout: Option<u64>,

    /// Abort the search after settling this many vertices
    #[arg(long, value_name = "n")]
    max_settled: Option<usize>,
}

#[derive(Subcommand)]
enum Source {
    /// Route between two vertices of a CSV edge list (header: source,target,weight)
    Csv {
        /// Path to the .csv file
        edges: PathBuf,
        start: String,
        goal: String,

        /// Insert every edge in both directions
        #[arg(short, long)]
        undirected: bool,
    },
    /// Route across a random obstacle grid from the top left to the bottom right corner
    Grid {
        #[arg(long, default_value_t = 20)]
        width: usize,

        #[arg(long, default_value_t = 20)]
        height: usize,

        /// Probability of a cell being blocked
        #[arg(long, default_value_t = 0.25)]
        obstacles: f64,

        /// Seed for the grid generator, random if not set
        #[arg(long)]
        seed: Option<u64>,

        /// Run plain Dijkstra instead of A* with the Manhattan heuristic
        #[arg(long)]
        dijkstra: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Csv {
        edges: PathBuf,
        start: String,
        goal: String,
        directed: bool,
    },
    Grid {
        width: usize,
        height: usize,
        obstacle_ratio: f64,
        seed: Option<u64>,
        use_heuristic: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub input: Input,
    pub params: SearchParams,
}

impl Cli {
    fn into_cfg(self) -> Cfg {
        let mut params = SearchParams::new();

        if let Some(ms) = self.timeout {
            params = params.timeout(Duration::from_millis(ms));
        }
        if let Some(limit) = self.max_settled {
            params = params.max_nodes_settled(limit);
        }

        let input = match self.input {
            Source::Csv {
                edges,
                start,
                goal,
                undirected,
            } => Input::Csv {
                edges,
                start,
                goal,
                directed: !undirected,
            },
            Source::Grid {
                width,
                height,
                obstacles,
                seed,
                dijkstra,
            } => Input::Grid {
                width,
                height,
                obstacle_ratio: obstacles,
                seed,
                use_heuristic: !dijkstra,
            },
        };

        Cfg { input, params }
    }
}

/// Parses the process arguments, exits on error
pub fn parse() -> Cfg {
    Cli::parse().into_cfg()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cli::into_cfg)
}
