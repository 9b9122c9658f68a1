//! The data model shared by the grid parser and the planar extractor: the
//! vocabulary of anchors, segments and the `ParseResult` that the grid
//! parser hands downstream.

use crate::point::Point;
use fnv::{FnvHashMap, FnvHashSet};
use serde::{Deserialize, Serialize};

/// The visual shape recorded at a point where segments meet or bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKind {
    /// `+` — a generic joint, any number of incident segments.
    Multi,
    /// `/` — a diagonal tick running bottom-left to top-right.
    FirstDiagonal,
    /// `\` — a diagonal tick running top-left to bottom-right.
    SecondDiagonal,
}

/// Whether a segment runs along a row or a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    Horizontal,
    Vertical,
}

/// Solid (`-`, `|`) vs. dashed (`=`, `:`) line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawStyle {
    Solid,
    Dashed,
}

/// A maximal straight run of line characters in a single row or column.
///
/// `start <= end` componentwise: for `Horizontal` both points share `row`
/// and `start.column <= end.column`; for `Vertical` both share `column` and
/// `start.row <= end.row`. Construction panics in debug builds if either
/// invariant is violated — the builder in [`crate::segment_builder`] is the
/// only code that should ever build one directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub kind: SegmentKind,
    pub draw: DrawStyle,
}

impl Segment {
    pub fn new(start: Point, end: Point, kind: SegmentKind, draw: DrawStyle) -> Self {
        match kind {
            SegmentKind::Horizontal => {
                debug_assert_eq!(start.row, end.row, "horizontal segment must stay on one row");
                debug_assert!(start.column <= end.column, "segment endpoints must be ordered");
            }
            SegmentKind::Vertical => {
                debug_assert_eq!(start.column, end.column, "vertical segment must stay on one column");
                debug_assert!(start.row <= end.row, "segment endpoints must be ordered");
            }
        }
        Segment { start, end, kind, draw }
    }

    /// The points this segment covers, in order from `start` to `end`.
    pub fn cells(&self) -> Vec<Point> {
        match self.kind {
            SegmentKind::Horizontal => (self.start.column..=self.end.column)
                .map(|c| Point::new(c, self.start.row))
                .collect(),
            SegmentKind::Vertical => (self.start.row..=self.end.row)
                .map(|r| Point::new(self.start.column, r))
                .collect(),
        }
    }
}

/// Everything the grid parser produces from one pass over a text grid.
///
/// The three collections are pairwise independent except that a bullet
/// point always also installs a `Multi` anchor at the same point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub anchors: FnvHashMap<Point, AnchorKind>,
    pub bullets: FnvHashSet<Point>,
    pub segments: FnvHashSet<Segment>,
}

impl ParseResult {
    pub fn new() -> Self {
        ParseResult::default()
    }
}
