use crate::grid::Point;

/// Manhattan (L1) distance between two grid points.
///
/// Admissible and consistent for 4-directional movement at unit cost,
/// which is what the search relies on for optimality.
#[inline]
pub fn manhattan(a: Point, b: Point) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn manhattan_sums_axis_deltas() {
        let a = Point { row: 1, col: 2 };
        let b = Point { row: 4, col: 0 };

        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }
}
