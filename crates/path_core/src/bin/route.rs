use std::fmt::Debug;

use anyhow::{ensure, Context};
use log::info;
use path_core::prelude::*;
use path_core::util::cli::{self, Input};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    match cfg.input {
        Input::Csv {
            edges,
            start,
            goal,
            directed,
        } => {
            let g = WeightedGraph::from_csv(&edges, directed)?;

            let mut finder = PathFinder::with_params(&g, cfg.params);
            let outcome = finder
                .dijkstra(&start, &goal)
                .with_context(|| format!("Cannot route from {}", start))?;

            report(&outcome, &finder.stats);
        }
        Input::Grid {
            width,
            height,
            obstacle_ratio,
            seed,
            use_heuristic,
        } => {
            ensure!(width > 0 && height > 0, "Grid needs at least one cell");

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let start = GridCell::new(0, 0);
            let goal = GridCell::new(width - 1, height - 1);

            let mut grid = Grid::random(width, height, obstacle_ratio, &mut rng)?;
            grid.set_blocked(start, false);
            grid.set_blocked(goal, false);
            info!("Grid:\n{}", grid);

            let g = grid.to_graph();
            let mut finder = PathFinder::with_params(&g, cfg.params);
            let outcome = if use_heuristic {
                finder.astar(&start, &goal, manhattan)?
            } else {
                finder.dijkstra(&start, &goal)?
            };

            report(&outcome, &finder.stats);
        }
    }

    Ok(())
}

fn report<V: Debug>(outcome: &SearchOutcome<V>, stats: &SearchStats) {
    match outcome {
        SearchOutcome::Found(sp) => {
            for node in &sp.nodes {
                println!("{:?}", node);
            }
            println!("Costs: {}", sp.weight);
        }
        SearchOutcome::Unreachable => println!("No path found"),
        SearchOutcome::TimedOut => println!("Search timed out"),
        SearchOutcome::LimitReached => println!("Settle limit reached"),
    }
    println!("{}", stats);
}
