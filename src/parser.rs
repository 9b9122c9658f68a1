//! The grid parser. A single top-to-bottom, left-to-right pass over the
//! input lines, driving the horizontal accumulator (one per row) and the
//! vertical accumulators (one per column, carried across rows).

use crate::classify::{classify, CharClass};
use crate::model::{ParseResult, SegmentKind};
use crate::point::Point;
use crate::segment_builder::RunAccumulator;

/// Parses a grid of text lines into anchors, bullets and segments.
///
/// Lines shorter than the grid's width are treated as padded with blanks;
/// no character outside the recognized set contributes anything beyond
/// terminating whatever run was open in its cell.
pub fn parse_text_lines<S: AsRef<str>>(lines: &[S]) -> ParseResult {
    let width = lines.iter().map(|l| l.as_ref().chars().count()).max().unwrap_or(0);
    let mut result = ParseResult::new();
    let mut vertical: Vec<RunAccumulator> = vec![RunAccumulator::new(); width];

    for (row, line) in lines.iter().enumerate() {
        let mut horizontal = RunAccumulator::new();
        let mut chars: Vec<char> = line.as_ref().chars().collect();
        chars.resize(width, ' ');

        for (column, ch) in chars.into_iter().enumerate() {
            let p = Point::new(column, row);
            match classify(ch) {
                CharClass::Bullet => {
                    if let Some(seg) = horizontal.close(SegmentKind::Horizontal) {
                        result.segments.insert(seg);
                    }
                    if let Some(seg) = vertical[column].close(SegmentKind::Vertical) {
                        result.segments.insert(seg);
                    }
                    result.anchors.insert(p, crate::model::AnchorKind::Multi);
                    result.bullets.insert(p);
                }
                CharClass::Horizontal { dashed } => {
                    horizontal.extend(p);
                    if dashed {
                        horizontal.mark_dashed();
                    }
                    if let Some(seg) = vertical[column].close(SegmentKind::Vertical) {
                        result.segments.insert(seg);
                    }
                }
                CharClass::Vertical { dashed } => {
                    if let Some(seg) = horizontal.close(SegmentKind::Horizontal) {
                        result.segments.insert(seg);
                    }
                    vertical[column].extend(p);
                    if dashed {
                        vertical[column].mark_dashed();
                    }
                }
                CharClass::Anchor(kind) => {
                    if let Some(seg) = horizontal.close(SegmentKind::Horizontal) {
                        result.segments.insert(seg);
                    }
                    if let Some(seg) = vertical[column].close(SegmentKind::Vertical) {
                        result.segments.insert(seg);
                    }
                    result.anchors.insert(p, kind);
                }
                CharClass::Blank => {
                    if let Some(seg) = horizontal.close(SegmentKind::Horizontal) {
                        result.segments.insert(seg);
                    }
                    if let Some(seg) = vertical[column].close(SegmentKind::Vertical) {
                        result.segments.insert(seg);
                    }
                }
            }
        }

        // The row ends; nothing remains to its right, so the horizontal
        // accumulator closes implicitly.
        if let Some(seg) = horizontal.close(SegmentKind::Horizontal) {
            log::trace!("closing horizontal run at end of row {row}");
            result.segments.insert(seg);
        }
    }

    for mut acc in vertical {
        if let Some(seg) = acc.close(SegmentKind::Vertical) {
            result.segments.insert(seg);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnchorKind, DrawStyle, Segment, SegmentKind};

    fn seg(sc: usize, sr: usize, ec: usize, er: usize, kind: SegmentKind, draw: DrawStyle) -> Segment {
        Segment::new(Point::new(sc, sr), Point::new(ec, er), kind, draw)
    }

    #[test]
    fn single_horizontal_segment() {
        let result = parse_text_lines(&["---"]);
        assert_eq!(result.segments.len(), 1);
        assert!(result.segments.contains(&seg(0, 0, 2, 0, SegmentKind::Horizontal, DrawStyle::Solid)));
        assert!(result.anchors.is_empty());
        assert!(result.bullets.is_empty());
    }

    #[test]
    fn dashed_vertical_run() {
        let result = parse_text_lines(&[":", ":", ":"]);
        assert_eq!(result.segments.len(), 1);
        assert!(result.segments.contains(&seg(0, 0, 0, 2, SegmentKind::Vertical, DrawStyle::Dashed)));
    }

    #[test]
    fn anchor_splits_run() {
        let result = parse_text_lines(&["-+-"]);
        assert_eq!(result.segments.len(), 2);
        assert!(result.segments.contains(&seg(0, 0, 0, 0, SegmentKind::Horizontal, DrawStyle::Solid)));
        assert!(result.segments.contains(&seg(2, 0, 2, 0, SegmentKind::Horizontal, DrawStyle::Solid)));
        assert_eq!(result.anchors.get(&Point::new(1, 0)), Some(&AnchorKind::Multi));
    }

    #[test]
    fn bullet_yields_no_segments() {
        let result = parse_text_lines(&["*"]);
        assert!(result.segments.is_empty());
        assert_eq!(result.bullets, [Point::new(0, 0)].into_iter().collect());
        assert_eq!(result.anchors.get(&Point::new(0, 0)), Some(&AnchorKind::Multi));
    }

    #[test]
    fn l_joint() {
        let result = parse_text_lines(&["+-", "| "]);
        assert_eq!(result.segments.len(), 2);
        assert!(result.segments.contains(&seg(1, 0, 1, 0, SegmentKind::Horizontal, DrawStyle::Solid)));
        assert!(result.segments.contains(&seg(0, 1, 0, 1, SegmentKind::Vertical, DrawStyle::Solid)));
        assert_eq!(result.anchors.get(&Point::new(0, 0)), Some(&AnchorKind::Multi));
    }

    #[test]
    fn adjacent_runs_with_single_blank_gap_are_distinct() {
        let result = parse_text_lines(&["- -"]);
        assert_eq!(result.segments.len(), 2);
    }

    #[test]
    fn no_cell_feeds_both_a_horizontal_and_a_vertical_segment() {
        let result = parse_text_lines(&["-+-", " | ", " | "]);
        let mut covered = std::collections::HashSet::new();
        for seg in &result.segments {
            for cell in seg.cells() {
                assert!(covered.insert(cell), "cell {:?} covered by two segments", cell);
            }
        }
    }

    #[test]
    fn idempotent_on_reconstructed_grid() {
        let original = parse_text_lines(&["+--+", "|  |", "+--+"]);
        let lines = crate::fileoperation::render_lines(&original);
        let reparsed = parse_text_lines(&lines);
        assert_eq!(original.segments, reparsed.segments);
        assert_eq!(original.bullets, reparsed.bullets);
        assert_eq!(original.anchors.len(), reparsed.anchors.len());
        for (p, k) in &original.anchors {
            assert_eq!(reparsed.anchors.get(p), Some(k));
        }
    }
}
