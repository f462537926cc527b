use crate::{constants::Weight, grid::GridCell};

/// Heuristic of plain Dijkstra
pub fn zero<V>(_: &V, _: &V) -> Weight {
    0.0
}

/// Admissible on 4-connected grids with unit step cost
pub fn manhattan(src: &GridCell, dst: &GridCell) -> Weight {
    (src.x.abs_diff(dst.x) + src.y.abs_diff(dst.y)) as Weight
}

pub fn euclidean(src: &GridCell, dst: &GridCell) -> Weight {
    let dx = src.x.abs_diff(dst.x) as Weight;
    let dy = src.y.abs_diff(dst.y) as Weight;
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn grid_distances() {
        let a = GridCell::new(0, 0);
        let b = GridCell::new(3, 4);

        assert_eq!(zero(&a, &b), 0.0);
        assert_eq!(manhattan(&a, &b), 7.0);
        assert_eq!(manhattan(&b, &a), 7.0);
        assert_abs_diff_eq!(euclidean(&a, &b), 5.0, epsilon = 1e-12);
        // Never above manhattan
        assert!(euclidean(&a, &b) <= manhattan(&a, &b));
    }
}
