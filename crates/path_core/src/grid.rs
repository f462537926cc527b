//! 2D occupancy grids.
//!
//! A [`Grid`] is a rectangle of walkable and blocked cells. Moves go to the
//! four direct neighbours (up, right, down, left) at cost 1, so
//! [`manhattan`](crate::util::math::manhattan) is an admissible heuristic.
use std::fmt;

use log::debug;
use rand::Rng;

use crate::{
    constants::Weight,
    error::{Error, Result},
    graph::WeightedGraph,
};

pub const STEP_COST: Weight = 1.0;

/// Up, right, down, left
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCell {
    pub x: usize,
    pub y: usize,
}

impl GridCell {
    pub fn new(x: usize, y: usize) -> Self {
        GridCell { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    // Row-major, true = blocked
    blocked: Vec<bool>,
}

impl Grid {
    /// Fully walkable grid. Fails if `width * height` does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Grid {
            width,
            height,
            blocked: vec![false; cell_count(width, height)?],
        })
    }

    /// Parses rows of `.`/`0` (walkable) and `#`/`1` (blocked). Whitespace
    /// inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let mut blocked = Vec::new();
        let mut width = None;

        for (y, row) in rows.iter().enumerate() {
            let mut row_width = 0;
            for c in row.as_ref().chars().filter(|c| !c.is_whitespace()) {
                let cell = match c {
                    '.' | '0' => false,
                    '#' | '1' => true,
                    other => {
                        return Err(Error::MalformedGrid(format!(
                            "unexpected character {:?} in row {}",
                            other, y
                        )))
                    }
                };
                blocked.push(cell);
                row_width += 1;
            }

            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(Error::MalformedGrid(format!(
                        "row {} has {} cells, expected {}",
                        y, row_width, w
                    )))
                }
                Some(_) => {}
            }
        }

        match width {
            Some(width) if width > 0 => Ok(Grid {
                width,
                height: rows.len(),
                blocked,
            }),
            _ => Err(Error::MalformedGrid("grid has no cells".to_string())),
        }
    }

    /// Blocks every cell independently with probability `obstacle_ratio`
    /// (clamped to `[0, 1]`).
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        obstacle_ratio: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let p = if obstacle_ratio.is_nan() {
            0.0
        } else {
            obstacle_ratio.clamp(0.0, 1.0)
        };
        let blocked = (0..cell_count(width, height)?)
            .map(|_| rng.gen_bool(p))
            .collect();

        Ok(Grid {
            width,
            height,
            blocked,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Cells outside the grid are not walkable
    pub fn is_walkable(&self, cell: GridCell) -> bool {
        self.contains(cell) && !self.blocked[cell.y * self.width + cell.x]
    }

    /// Returns `false` if `cell` lies outside the grid.
    pub fn set_blocked(&mut self, cell: GridCell, blocked: bool) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.blocked[cell.y * self.width + cell.x] = blocked;
        true
    }

    /// Walkable cells in row-major order
    pub fn walkable_cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| GridCell::new(x, y)))
            .filter(move |cell| self.is_walkable(*cell))
    }

    /// Walkable direct neighbours in the order up, right, down, left
    pub fn neighbors(&self, cell: GridCell) -> impl Iterator<Item = GridCell> + '_ {
        DIRECTIONS.iter().filter_map(move |(dx, dy)| {
            let x = cell.x.checked_add_signed(*dx)?;
            let y = cell.y.checked_add_signed(*dy)?;
            let next = GridCell::new(x, y);
            self.is_walkable(next).then_some(next)
        })
    }

    /// Graph over all walkable cells with a [`STEP_COST`] edge in each
    /// direction between walkable neighbours.
    pub fn to_graph(&self) -> WeightedGraph<GridCell> {
        let mut g = WeightedGraph::with_capacity(self.width * self.height);

        for cell in self.walkable_cells() {
            g.add_vertex(cell);
        }
        for cell in self.walkable_cells() {
            let source = g.add_vertex(cell);
            for next in self.neighbors(cell) {
                let target = g.add_vertex(next);
                g.push_edge(source, target, STEP_COST);
            }
        }

        debug!("Grid {}x{} -> {}", self.width, self.height, g);
        g
    }
}

fn cell_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| {
        Error::MalformedGrid(format!("{}x{} cells do not fit in memory", width, height))
    })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.blocked.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|b| if *b { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        search::{PathFinder, SearchOutcome},
        util::{
            math::manhattan,
            test_graphs::{walled_grid, WALLED_GRID_GOAL, WALLED_GRID_START},
        },
    };

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn parse_rows() {
        let grid = Grid::from_rows(&["0 1 0", ". # ."]).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_walkable(GridCell::new(0, 0)));
        assert!(!grid.is_walkable(GridCell::new(1, 0)));
        assert!(!grid.is_walkable(GridCell::new(1, 1)));
        assert!(!grid.is_walkable(GridCell::new(3, 0)));
        assert_eq!(grid.to_string(), ".#.\n.#.\n");
    }

    #[test]
    fn malformed_rows() {
        assert!(matches!(
            Grid::from_rows(&["...", ".."]),
            Err(Error::MalformedGrid(_))
        ));
        assert!(matches!(
            Grid::from_rows(&["..x"]),
            Err(Error::MalformedGrid(_))
        ));
        assert!(matches!(
            Grid::from_rows::<&str>(&[]),
            Err(Error::MalformedGrid(_))
        ));
    }

    #[test]
    fn neighbors_skip_walls_and_borders() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_blocked(GridCell::new(1, 0), true);
        assert!(!grid.set_blocked(GridCell::new(5, 5), true));

        let center: Vec<_> = grid.neighbors(GridCell::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![GridCell::new(2, 1), GridCell::new(1, 2), GridCell::new(0, 1)]
        );

        let corner: Vec<_> = grid.neighbors(GridCell::new(0, 0)).collect();
        assert_eq!(corner, vec![GridCell::new(0, 1)]);
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(Error::MalformedGrid(_))
        ));
        assert!(matches!(
            Grid::random(2, usize::MAX, 0.5, &mut rng),
            Err(Error::MalformedGrid(_))
        ));
        assert_eq!(Grid::new(0, 3).unwrap().walkable_cells().count(), 0);
    }

    #[test]
    fn to_graph_on_open_grid() {
        let g = Grid::new(2, 2).unwrap().to_graph();

        assert_eq!(g.num_vertices(), 4);
        // Each of the 4 inner borders in both directions
        assert_eq!(g.num_edges(), 8);
    }

    #[test]
    fn route_around_wall() {
        init_log();
        let grid = walled_grid().unwrap();
        let g = grid.to_graph();
        let mut finder = PathFinder::new(&g);

        let dijkstra = finder
            .dijkstra(&WALLED_GRID_START, &WALLED_GRID_GOAL)
            .unwrap()
            .into_path()
            .unwrap();
        let astar = finder
            .astar(&WALLED_GRID_START, &WALLED_GRID_GOAL, manhattan)
            .unwrap()
            .into_path()
            .unwrap();

        // Over to the gap at x = 4 and back
        assert_eq!(dijkstra.weight, 12.0);
        assert_eq!(astar.weight, dijkstra.weight);
        assert_eq!(astar.hops(), 12);
        assert!(astar.nodes.contains(&GridCell::new(4, 2)));
        assert!(astar.nodes.iter().all(|cell| grid.is_walkable(*cell)));
    }

    #[test]
    fn original_demo_grid() {
        let grid = Grid::from_rows(&[
            "0 0 0 0 0",
            "0 1 1 1 0",
            "0 0 0 0 0",
            "0 1 0 1 0",
            "0 0 0 0 0",
        ])
        .unwrap();
        let g = grid.to_graph();

        let sp = PathFinder::new(&g)
            .astar(&GridCell::new(0, 0), &GridCell::new(4, 4), manhattan)
            .unwrap();
        assert_eq!(sp.weight(), Some(8.0));
    }

    #[test]
    fn blocked_start_is_unknown() {
        let grid = walled_grid().unwrap();
        let g = grid.to_graph();

        assert!(PathFinder::new(&g)
            .dijkstra(&GridCell::new(0, 2), &WALLED_GRID_GOAL)
            .is_err());
    }

    #[test]
    fn astar_settles_fewer_nodes_on_open_grid() {
        let g = Grid::new(10, 10).unwrap().to_graph();
        let (start, goal) = (GridCell::new(0, 5), GridCell::new(9, 5));

        let mut dijkstra = PathFinder::new(&g);
        let mut astar = PathFinder::new(&g);
        let a = dijkstra.dijkstra(&start, &goal).unwrap();
        let b = astar.astar(&start, &goal, manhattan).unwrap();

        assert_eq!(a.weight(), Some(9.0));
        assert_eq!(b.weight(), Some(9.0));
        assert!(astar.stats.nodes_settled < dijkstra.stats.nodes_settled);
    }

    #[test]
    fn astar_matches_dijkstra_on_random_grids() {
        init_log();
        let (start, goal) = (GridCell::new(0, 0), GridCell::new(9, 9));
        let mut found = 0;

        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::random(10, 10, 0.2, &mut rng).unwrap();
            grid.set_blocked(start, false);
            grid.set_blocked(goal, false);

            let g = grid.to_graph();
            let mut finder = PathFinder::new(&g);
            let dijkstra = finder.dijkstra(&start, &goal).unwrap();
            let astar = finder.astar(&start, &goal, manhattan).unwrap();

            match (&dijkstra, &astar) {
                (SearchOutcome::Found(d), SearchOutcome::Found(a)) => {
                    assert_eq!(d.weight, a.weight, "seed {}\n{}", seed, grid);
                    assert_eq!(a.hops() as Weight, a.weight);
                    found += 1;
                }
                (SearchOutcome::Unreachable, SearchOutcome::Unreachable) => {}
                _ => panic!("seed {}: {:?} vs {:?}\n{}", seed, dijkstra, astar, grid),
            }
        }

        // Enough grids with an actual route to compare
        assert!(found >= 20, "only {} of 40 grids were solvable", found);
    }
}
