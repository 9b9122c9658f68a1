//! Parses ASCII box-and-line diagrams into a structured geometric
//! description: horizontal/vertical segments with draw style, anchor
//! points, bullets, and the minimal cycles and filaments of the planar
//! graph the segments imply.
//!
//! The core is two passes:
//!
//! 1. [`parser::parse_text_lines`] walks the grid once, column-synchronous,
//!    producing a [`model::ParseResult`].
//! 2. [`extractor::extract_all_primitives`] takes the planar graph built
//!    from those segments and partitions it into cycles and filaments.
//!
//! Both are pure, synchronous, and single-threaded: neither touches I/O,
//! and both are safe to call concurrently on disjoint inputs.

pub mod classify;
pub mod error;
pub mod extractor;
pub mod fileoperation;
pub mod graph;
pub mod model;
pub mod parser;
pub mod point;
pub mod segment_builder;

pub use extractor::{extract_all_primitives, PlanarVertex, Walk};
pub use graph::Graph;
pub use model::{AnchorKind, DrawStyle, ParseResult, Segment, SegmentKind};
pub use parser::parse_text_lines;
pub use point::Point;

/// Builds the planar graph implied by a [`ParseResult`]'s segments.
///
/// A segment's own endpoints are the last *line* character in its run —
/// the anchor one cell beyond them (if any) is the actual joint. So each
/// end of a segment is extended outward by one cell: if that cell holds an
/// anchor, the anchor is the graph vertex; otherwise the segment's own
/// endpoint is a dangling vertex (an open line end with nothing attached).
///
/// This glue lives in the library root rather than inside `graph.rs`
/// because `graph.rs` is the generic graph model (usable for any vertex
/// type); this function is specific to the `Point`/`Segment` data model
/// and to the job of turning parsed segments into graph structure, which
/// sits outside both the grid parser and the extractor proper.
pub fn graph_from_segments(result: &ParseResult) -> Graph<Point> {
    let mut graph = Graph::new();

    let extend = |p: Point, probe: Option<Point>| -> Point {
        match probe {
            Some(probe) if result.anchors.contains_key(&probe) => probe,
            _ => p,
        }
    };
    let left = |p: Point| if p.column == 0 { None } else { Some(Point::new(p.column - 1, p.row)) };
    let right = |p: Point| Some(Point::new(p.column + 1, p.row));
    let above = |p: Point| if p.row == 0 { None } else { Some(Point::new(p.column, p.row - 1)) };
    let below = |p: Point| Some(Point::new(p.column, p.row + 1));

    for segment in &result.segments {
        let (a, b) = match segment.kind {
            SegmentKind::Horizontal => (extend(segment.start, left(segment.start)), extend(segment.end, right(segment.end))),
            SegmentKind::Vertical => (extend(segment.start, above(segment.start)), extend(segment.end, below(segment.end))),
        };
        graph.add_vertex(a, ());
        graph.add_vertex(b, ());
        graph.connect(a, b, ());
    }

    graph
}
