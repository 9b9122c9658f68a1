use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An integer lattice coordinate. Both components are nonnegative column/row
/// indices into the character grid.
///
/// Ordering is row-major: the point nearer the top of the grid sorts first,
/// and ties are broken by column. This is what the extractor's driver loop
/// means by "vertex with minimum key" (topmost, then leftmost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub column: usize,
    pub row: usize,
}

impl Point {
    pub fn new(column: usize, row: usize) -> Self {
        Point { column, row }
    }

    /// Signed displacement `self - other`, usable for the turn predicates in
    /// the planar extractor.
    pub(crate) fn direction_from(self, other: Point) -> (isize, isize) {
        (
            self.column as isize - other.column as isize,
            self.row as isize - other.row as isize,
        )
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}
