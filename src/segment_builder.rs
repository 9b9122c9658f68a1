//! Accumulators that turn a run of same-class characters into
//! a [`Segment`]. The horizontal accumulator lives for one row; the
//! vertical accumulator is carried across rows, one per column, by
//! [`crate::parser`].

use crate::model::{DrawStyle, Segment, SegmentKind};
use crate::point::Point;

/// Accumulates an in-progress run. Generic over [`SegmentKind`] so the same
/// combine logic backs both the horizontal and vertical accumulators — the
/// only difference between them is *when* the caller drives `extend`.
#[derive(Debug, Clone, Default)]
pub struct RunAccumulator {
    run: Option<(Point, Point, DrawStyle)>,
}

impl RunAccumulator {
    pub fn new() -> Self {
        RunAccumulator { run: None }
    }

    /// Extends the run to `p`. The first call on an empty accumulator opens
    /// the run at `p`; every later call preserves the original start and
    /// moves the end to `p`.
    pub fn extend(&mut self, p: Point) {
        match &mut self.run {
            None => self.run = Some((p, p, DrawStyle::Solid)),
            Some((_, end, _)) => *end = p,
        }
    }

    /// Marks the in-progress run dashed. Idempotent, and a no-op on an
    /// empty accumulator.
    pub fn mark_dashed(&mut self) {
        if let Some((_, _, draw)) = &mut self.run {
            *draw = DrawStyle::Dashed;
        }
    }

    /// Emits the in-progress run as a [`Segment`] and clears the
    /// accumulator. No-op if nothing is in progress.
    pub fn close(&mut self, kind: SegmentKind) -> Option<Segment> {
        self.run
            .take()
            .map(|(start, end, draw)| Segment::new(start, end, kind, draw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_run_is_legal() {
        let mut acc = RunAccumulator::new();
        acc.extend(Point::new(3, 1));
        let seg = acc.close(SegmentKind::Horizontal).unwrap();
        assert_eq!(seg.start, seg.end);
    }

    #[test]
    fn close_on_empty_is_noop() {
        let mut acc = RunAccumulator::new();
        assert!(acc.close(SegmentKind::Horizontal).is_none());
    }

    #[test]
    fn dashed_marks_whole_run() {
        let mut acc = RunAccumulator::new();
        acc.extend(Point::new(0, 0));
        acc.extend(Point::new(1, 0));
        acc.mark_dashed();
        acc.extend(Point::new(2, 0));
        let seg = acc.close(SegmentKind::Horizontal).unwrap();
        assert_eq!(seg.draw, DrawStyle::Dashed);
        assert_eq!(seg.start, Point::new(0, 0));
        assert_eq!(seg.end, Point::new(2, 0));
    }
}
