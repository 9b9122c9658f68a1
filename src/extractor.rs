//! The planar minimal-cycle extractor. Given a planar graph whose vertices
//! carry 2D position, partitions it into minimal interior cycles and
//! dangling filaments.
//!
//! This is the largest and least mechanical part of the engine: tracing a
//! face of a planar graph means always taking the tightest turn available
//! at each vertex, which in turn means comparing incident edges by angle
//! around the current vertex. [`PlanarVertex`] packages that comparison as
//! a capability rather than a trait bound on a geometry type, so the
//! extractor itself never touches coordinates directly.

use crate::graph::Graph;
use crate::point::Point;
use fnv::FnvHashSet;
use std::hash::Hash;

/// The geometric capability the extractor needs from a vertex type: given
/// where you're standing (`current`), where you came from (`previous`, if
/// anywhere), and who you're connected to (`neighbors`), name the neighbor
/// reached by the tightest right turn (`clockwise_most`) or the tightest
/// left turn (`counter_clockwise_most`).
///
/// When `previous` is `None` there is no incoming direction to turn
/// against; both methods fall back to the minimum neighbor under `V`'s
/// total order, which keeps the extractor fully deterministic without
/// inventing a direction out of nothing (see DESIGN.md for the full
/// reasoning behind this choice).
pub trait PlanarVertex: Ord + Copy + Eq + Hash + std::fmt::Debug {
    fn clockwise_most(current: Self, previous: Option<Self>, neighbors: &FnvHashSet<Self>) -> Option<Self>;
    fn counter_clockwise_most(current: Self, previous: Option<Self>, neighbors: &FnvHashSet<Self>) -> Option<Self>;
}

fn dot_perp(u: (isize, isize), v: (isize, isize)) -> isize {
    u.0 * v.1 - u.1 * v.0
}

#[derive(Clone, Copy)]
enum Turn {
    Clockwise,
    CounterClockwise,
}

fn angular_pick(current: Point, previous: Option<Point>, neighbors: &FnvHashSet<Point>, turn: Turn) -> Option<Point> {
    if neighbors.is_empty() {
        return None;
    }
    let previous = match previous {
        Some(p) => p,
        // No incoming direction: break the tie the same way ties among
        // candidates are broken below, by total order.
        None => return neighbors.iter().copied().min(),
    };

    let mut sorted: Vec<Point> = neighbors.iter().copied().collect();
    sorted.sort();

    let d_curr = current.direction_from(previous);
    let mut v_next = *sorted.iter().find(|&&v| v != previous).unwrap_or(&sorted[0]);
    let mut d_next = v_next.direction_from(current);
    let mut convex = dot_perp(d_next, d_curr) <= 0;

    for v_adj in sorted {
        let d_adj = v_adj.direction_from(current);
        let a = dot_perp(d_curr, d_adj);
        let b = dot_perp(d_next, d_adj);
        let (pa, pb) = match turn {
            Turn::Clockwise => (a < 0, b < 0),
            Turn::CounterClockwise => (a > 0, b > 0),
        };
        let replace = if convex { pa && pb } else { pa || pb };
        if replace {
            v_next = v_adj;
            d_next = d_adj;
            convex = dot_perp(d_next, d_curr) <= 0;
        }
    }

    Some(v_next)
}

impl PlanarVertex for Point {
    fn clockwise_most(current: Self, previous: Option<Self>, neighbors: &FnvHashSet<Self>) -> Option<Self> {
        angular_pick(current, previous, neighbors, Turn::Clockwise)
    }

    fn counter_clockwise_most(current: Self, previous: Option<Self>, neighbors: &FnvHashSet<Self>) -> Option<Self> {
        angular_pick(current, previous, neighbors, Turn::CounterClockwise)
    }
}

/// A cycle or filament: an ordered walk of vertices. For a cycle, the walk
/// is implicitly closed (its last vertex connects back to its first); the
/// vector does not repeat the first vertex at the end.
pub type Walk<V> = Vec<V>;

/// Partitions `graph` into minimal interior cycles and dangling filaments.
/// Consumes the graph: extraction shrinks it monotonically, and nothing
/// downstream needs the leftover empty shell.
pub fn extract_all_primitives<V, EI>(mut graph: Graph<V, (), EI>) -> (Vec<Walk<V>>, Vec<Walk<V>>)
where
    V: PlanarVertex,
{
    let mut found_cycles = Vec::new();
    let mut found_filaments = Vec::new();

    while let Some(v) = graph.min_vertex() {
        let d = graph.degree(v);
        if d == 0 {
            graph.remove_vertex(v);
        } else if d == 1 {
            let filament = extract_filament(&mut graph, v, v);
            found_filaments.push(filament);
        } else {
            extract_cycle(&mut graph, v, &mut found_cycles, &mut found_filaments);
        }
    }

    (found_cycles, found_filaments)
}

/// Peels a chain off the graph, starting at `from`.
///
/// If `degree(from) >= 3`, `from` is a branch point with a side chain
/// hanging off it toward `to`: the edge `(from, to)` is cut first, `from`
/// is recorded but left in the graph (its other edges are untouched), and
/// the walk continues outward from `to`. Otherwise `from` is a true leaf
/// (or being peeled as one) and the walk starts at `from` itself.
///
/// Either way, the walk then follows single-neighbor vertices outward,
/// removing each as it's consumed, until it reaches a dead end (degree 0)
/// or rejoins a branch point (degree >= 2), which is recorded but not
/// removed.
fn extract_filament<V, EI>(graph: &mut Graph<V, (), EI>, from: V, to: V) -> Walk<V>
where
    V: PlanarVertex,
{
    let mut history = Vec::new();
    let mut current = from;

    if graph.degree(from) >= 3 {
        graph.remove_edge(from, to);
        history.push(from);
        current = to;
    }

    loop {
        let deg = graph.degree(current);
        if deg == 0 {
            history.push(current);
            graph.remove_vertex(current);
            log::trace!("filament dead-ends at {current:?}");
            break;
        } else if deg == 1 {
            let next = *graph.neighbors(current).iter().next().expect("degree 1 implies a neighbor");
            history.push(current);
            graph.remove_edge(current, next);
            graph.remove_vertex(current);
            current = next;
        } else {
            history.push(current);
            break;
        }
    }

    history
}

/// The outcome of tracing a walk from `root` without touching the graph:
/// either it closes back to `root` (a minimal cycle) or it dead-ends /
/// re-enters itself first (a filament).
enum Trace<V> {
    Closed(Walk<V>),
    Open(Walk<V>),
}

/// `v`'s neighbors, minus any edge already claimed by a ring further up the
/// call stack — except the edge back to `root`, which is exactly the move
/// that closes the walk. A ring mid-unwind hasn't physically removed its
/// edges yet (a wall shared with an adjacent face is still needed to trace
/// that face), so without this filter a nested walk could wander back into
/// the very ring that's tracing it.
fn reachable_neighbors<V, EI>(graph: &Graph<V, (), EI>, v: V, root: V, claimed: &FnvHashSet<(V, V)>) -> FnvHashSet<V>
where
    V: PlanarVertex,
{
    graph
        .neighbors(v)
        .into_iter()
        .filter(|&n| n == root || !claimed.contains(&crate::graph::canonical(v, n)))
        .collect()
}

/// Traces a walk starting at `root` with a forced first step to `start`,
/// continuing via the tightest left turn at each vertex thereafter. Never
/// mutates the graph: both the driver's own cycle search and
/// [`finalize_cycle`]'s check of a ring vertex's extra branch use this to
/// decide what they're looking at before committing to an action.
fn trace_walk<V, EI>(graph: &Graph<V, (), EI>, root: V, start: V, claimed: &FnvHashSet<(V, V)>) -> Trace<V>
where
    V: PlanarVertex,
{
    let mut history = vec![root];
    let mut visited: FnvHashSet<V> = FnvHashSet::default();
    visited.insert(root);
    let mut prev = root;
    let mut curr = start;

    loop {
        if curr == root {
            return Trace::Closed(history);
        }
        if visited.contains(&curr) {
            // Walked back into an interior vertex without returning to
            // root: this arm can't close. `curr` is already a neighbor of
            // history's last vertex (that's how we got here); appending it
            // lets finalize_filament's own edge accounting pick up that
            // last edge along with the rest.
            history.push(curr);
            return Trace::Open(history);
        }
        visited.insert(curr);
        history.push(curr);

        let neighbors = reachable_neighbors(graph, curr, root, claimed);
        if neighbors.len() <= 1 {
            // The only reachable neighbor (if any) is `prev`: a true dead
            // end, not a turn to compute.
            return Trace::Open(history);
        }

        match V::counter_clockwise_most(curr, Some(prev), &neighbors) {
            None => return Trace::Open(history),
            Some(next) => {
                prev = curr;
                curr = next;
            }
        }
    }
}

/// Traces the minimal cycle reachable from `root`, which must have degree
/// >= 2. If the walk dead-ends or re-enters itself before closing, the
/// partial walk is instead reported as a filament.
fn extract_cycle<V, EI>(
    graph: &mut Graph<V, (), EI>,
    root: V,
    found_cycles: &mut Vec<Walk<V>>,
    found_filaments: &mut Vec<Walk<V>>,
) where
    V: PlanarVertex,
{
    let root_neighbors = graph.neighbors(root);
    let start = match V::clockwise_most(root, None, &root_neighbors) {
        Some(s) => s,
        None => return,
    };

    let mut claimed = FnvHashSet::default();
    match trace_walk(graph, root, start, &claimed) {
        Trace::Closed(history) => finalize_cycle(graph, history, found_cycles, found_filaments, &mut claimed),
        Trace::Open(history) => finalize_filament(graph, history, found_filaments),
    }
}

/// Reports a walk that failed to close as a cycle as a filament instead:
/// the consecutive pairs in `history` are exactly the edges this walk
/// traversed, so those are cut, and any vertex left at degree 0 (nothing
/// else attached to it) is removed. A vertex with edges remaining outside
/// this walk is kept — it's a branch point the driver loop will revisit.
fn finalize_filament<V, EI>(graph: &mut Graph<V, (), EI>, history: Walk<V>, found_filaments: &mut Vec<Walk<V>>)
where
    V: PlanarVertex,
{
    for w in history.windows(2) {
        graph.remove_edge(w[0], w[1]);
    }
    for &v in &history {
        if graph.degree(v) == 0 {
            graph.remove_vertex(v);
        }
    }
    found_filaments.push(history);
}

/// `history` is the closed ring `[root, v1, ..., vk]` (the walk back to
/// `root` is implicit). Records the cycle, then peels off any side
/// branches still hanging on ring vertices (a ring vertex with degree > 2
/// has an attachment beyond the ring) before removing the ring's own
/// edges.
///
/// A branch off a ring vertex isn't necessarily a dangling tail — two boxes
/// sharing a wall look, from either box's own ring, exactly like a branch
/// until that branch's own walk is traced and turns out to close into a
/// second minimal cycle. So each branch is first tried with [`trace_walk`]
/// and only reported through [`extract_filament`] if it doesn't close.
///
/// `claimed` carries the edges of every ring still being unwound higher up
/// the call stack (this one's own edges are added to it before the branches
/// are examined), so a nested branch can't wander back across a wall its
/// own enclosing ring hasn't physically removed yet.
fn finalize_cycle<V, EI>(
    graph: &mut Graph<V, (), EI>,
    history: Walk<V>,
    found_cycles: &mut Vec<Walk<V>>,
    found_filaments: &mut Vec<Walk<V>>,
    claimed: &mut FnvHashSet<(V, V)>,
) where
    V: PlanarVertex,
{
    let n = history.len();
    let ring_neighbors_of = |i: usize| -> (V, V) {
        let prev = history[(i + n - 1) % n];
        let next = history[(i + 1) % n];
        (prev, next)
    };

    for i in 0..n {
        let a = history[i];
        let b = history[(i + 1) % n];
        claimed.insert(crate::graph::canonical(a, b));
    }

    for (i, &v) in history.iter().enumerate() {
        let (ring_prev, ring_next) = ring_neighbors_of(i);
        loop {
            let extra = graph.neighbors(v).into_iter().find(|n| {
                *n != ring_prev && *n != ring_next && !claimed.contains(&crate::graph::canonical(v, *n))
            });
            match extra {
                Some(extra_v) => match trace_walk(graph, v, extra_v, claimed) {
                    Trace::Closed(sub_history) => {
                        finalize_cycle(graph, sub_history, found_cycles, found_filaments, claimed);
                    }
                    Trace::Open(_) => {
                        let filament = extract_filament(graph, v, extra_v);
                        found_filaments.push(filament);
                    }
                },
                None => break,
            }
        }
    }

    for i in 0..n {
        let a = history[i];
        let b = history[(i + 1) % n];
        graph.remove_edge(a, b);
    }
    for &v in &history {
        if graph.degree(v) == 0 {
            graph.remove_vertex(v);
        }
    }

    found_cycles.push(history);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn square() -> Graph<Point> {
        let mut g = Graph::new();
        let tl = Point::new(0, 0);
        let tr = Point::new(2, 0);
        let br = Point::new(2, 2);
        let bl = Point::new(0, 2);
        for v in [tl, tr, br, bl] {
            g.add_vertex(v, ());
        }
        g.connect(tl, tr, ());
        g.connect(tr, br, ());
        g.connect(br, bl, ());
        g.connect(bl, tl, ());
        g
    }

    #[test]
    fn single_square_yields_one_cycle_no_filaments() {
        let (cycles, filaments) = extract_all_primitives(square());
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 4);
        assert!(filaments.is_empty());
    }

    #[test]
    fn square_with_tail_yields_cycle_and_filament() {
        let mut g = square();
        let br = Point::new(2, 2);
        let tail = Point::new(4, 2);
        g.add_vertex(tail, ());
        g.connect(br, tail, ());

        let (cycles, filaments) = extract_all_primitives(g);
        assert_eq!(cycles.len(), 1);
        assert_eq!(filaments.len(), 1);
        let filament = &filaments[0];
        assert_eq!(filament.len(), 2);
        assert!(filament.contains(&br));
        assert!(filament.contains(&tail));
    }

    #[test]
    fn lone_vertex_is_isolated_and_untracked() {
        let mut g: Graph<Point> = Graph::new();
        g.add_vertex(Point::new(0, 0), ());
        let (cycles, filaments) = extract_all_primitives(g);
        assert!(cycles.is_empty());
        assert!(filaments.is_empty());
    }

    #[test]
    fn simple_path_is_one_filament() {
        let mut g: Graph<Point> = Graph::new();
        let a = Point::new(0, 0);
        let b = Point::new(2, 0);
        let c = Point::new(4, 0);
        for v in [a, b, c] {
            g.add_vertex(v, ());
        }
        g.connect(a, b, ());
        g.connect(b, c, ());

        let (cycles, filaments) = extract_all_primitives(g);
        assert!(cycles.is_empty());
        assert_eq!(filaments.len(), 1);
        assert_eq!(filaments[0].len(), 3);
    }

    #[test]
    fn open_v_shape_splits_into_two_filaments_sharing_the_root() {
        // A degree-2 root with two dead-end arms can't close into a cycle:
        // extract_cycle only walks one arm before dead-ending, so the other
        // arm is picked up separately by the driver loop afterward. Both
        // filaments end up sharing the root vertex, which is legal (only
        // edges, not vertices, are required to land on exactly one walk).
        let mut g: Graph<Point> = Graph::new();
        let root = Point::new(0, 0);
        let x = Point::new(0, 1);
        let y = Point::new(2, 1);
        for v in [root, x, y] {
            g.add_vertex(v, ());
        }
        g.connect(root, x, ());
        g.connect(root, y, ());

        let (cycles, filaments) = extract_all_primitives(g);
        assert!(cycles.is_empty());
        assert_eq!(filaments.len(), 2);
        let edges_covered: usize = filaments.iter().map(|f| f.len() - 1).sum();
        assert_eq!(edges_covered, 2);
        assert!(filaments.iter().any(|f| f.contains(&x)));
        assert!(filaments.iter().any(|f| f.contains(&y)));
    }

    #[test]
    fn every_edge_is_conserved_across_cycle_and_filaments() {
        let mut g = square();
        let br = Point::new(2, 2);
        let tail = Point::new(4, 2);
        g.add_vertex(tail, ());
        g.connect(br, tail, ());

        let edge_count_before = 5; // 4 ring edges + 1 tail edge
        let (cycles, filaments) = extract_all_primitives(g);

        let mut accounted = 0;
        for cycle in &cycles {
            accounted += cycle.len(); // ring of n vertices has n edges
        }
        for filament in &filaments {
            accounted += filament.len() - 1;
        }
        assert_eq!(accounted, edge_count_before);
    }
}
