//! An undirected planar graph keyed by a totally-ordered vertex type, with
//! an adjacency index maintained in lockstep with the edge map.

use fnv::{FnvHashMap, FnvHashSet};
use std::hash::Hash;

/// Canonicalizes an undirected edge key: `(min(a, b), max(a, b))`.
pub fn canonical<V: Ord + Copy>(a: V, b: V) -> (V, V) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A vertex's degree and neighbor set, derived from and kept in lockstep
/// with [`Graph::edges`].
#[derive(Debug, Clone, Default)]
pub struct AdjacencyEntry<V> {
    pub degree: usize,
    pub neighbors: FnvHashSet<V>,
}

/// An undirected planar graph. `VI` is per-vertex info, `EI` per-edge info;
/// both default to `()` since the core algorithm only needs structure.
#[derive(Debug, Clone)]
pub struct Graph<V, VI = (), EI = ()> {
    vertices: FnvHashMap<V, VI>,
    edges: FnvHashMap<(V, V), EI>,
    adjacency: FnvHashMap<V, AdjacencyEntry<V>>,
}

impl<V, VI, EI> Default for Graph<V, VI, EI>
where
    V: Eq + Hash,
{
    fn default() -> Self {
        Graph {
            vertices: FnvHashMap::default(),
            edges: FnvHashMap::default(),
            adjacency: FnvHashMap::default(),
        }
    }
}

impl<V, VI, EI> Graph<V, VI, EI>
where
    V: Ord + Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn add_vertex(&mut self, v: V, info: VI) {
        self.vertices.insert(v, info);
        self.adjacency.entry(v).or_insert_with(AdjacencyEntry::default);
    }

    /// Connects `a` and `b` under their canonical key, updating both
    /// endpoints' adjacency entries. Both vertices must already have been
    /// added; connecting an edge whose endpoints don't exist yet is a
    /// caller bug, not something this type guards against.
    pub fn connect(&mut self, a: V, b: V, info: EI) {
        let key = canonical(a, b);
        if self.edges.insert(key, info).is_none() {
            self.bump_adjacency(a, b);
            self.bump_adjacency(b, a);
        }
    }

    fn bump_adjacency(&mut self, owner: V, other: V) {
        let entry = self.adjacency.entry(owner).or_insert_with(AdjacencyEntry::default);
        if entry.neighbors.insert(other) {
            entry.degree += 1;
        }
    }

    pub fn remove_edge(&mut self, a: V, b: V) -> Option<EI> {
        let key = canonical(a, b);
        let removed = self.edges.remove(&key);
        if removed.is_some() {
            self.drop_adjacency(a, b);
            self.drop_adjacency(b, a);
        }
        removed
    }

    fn drop_adjacency(&mut self, owner: V, other: V) {
        if let Some(entry) = self.adjacency.get_mut(&owner) {
            if entry.neighbors.remove(&other) {
                entry.degree = entry.degree.saturating_sub(1);
            }
        }
    }

    /// Removes a vertex from `vertices` (and clears its own now-empty
    /// adjacency entry). Callers are expected to have already removed
    /// every incident edge, leaving degree 0.
    pub fn remove_vertex(&mut self, v: V) -> Option<VI> {
        self.adjacency.remove(&v);
        self.vertices.remove(&v)
    }

    pub fn degree(&self, v: V) -> usize {
        self.adjacency.get(&v).map(|e| e.degree).unwrap_or(0)
    }

    pub fn neighbors(&self, v: V) -> FnvHashSet<V> {
        self.adjacency.get(&v).map(|e| e.neighbors.clone()).unwrap_or_default()
    }

    pub fn contains_vertex(&self, v: V) -> bool {
        self.vertices.contains_key(&v)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex with minimum key under `V`'s total order, used by the
    /// extractor's driver loop. `None` iff the graph has no vertices.
    pub fn min_vertex(&self) -> Option<V> {
        self.vertices.keys().copied().min()
    }

    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.keys().copied()
    }

    pub fn edge_keys(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.edges.keys().copied()
    }
}

impl<V, EI> Graph<V, (), EI>
where
    V: Ord + Copy + Eq + Hash,
    EI: Clone,
{
    /// Componentwise union of two graphs: vertices and edges are merged,
    /// with `other`'s entries winning on key collision.
    pub fn union(mut self, other: Graph<V, (), EI>) -> Self {
        for v in other.vertices() {
            self.add_vertex(v, ());
        }
        for (a, b) in other.edge_keys() {
            if let Some(info) = other.edges.get(&(a, b)).cloned() {
                self.connect(a, b, info);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn connect_updates_both_endpoints() {
        let mut g: Graph<Point> = Graph::new();
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        g.add_vertex(a, ());
        g.add_vertex(b, ());
        g.connect(a, b, ());
        assert_eq!(g.degree(a), 1);
        assert_eq!(g.degree(b), 1);
        assert!(g.neighbors(a).contains(&b));
    }

    #[test]
    fn missing_vertex_has_zero_degree() {
        let g: Graph<Point> = Graph::new();
        assert_eq!(g.degree(Point::new(9, 9)), 0);
    }

    #[test]
    fn remove_edge_drops_degree_on_both_sides() {
        let mut g: Graph<Point> = Graph::new();
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        g.add_vertex(a, ());
        g.add_vertex(b, ());
        g.connect(a, b, ());
        g.remove_edge(a, b);
        assert_eq!(g.degree(a), 0);
        assert_eq!(g.degree(b), 0);
    }

    #[test]
    fn canonical_key_is_order_independent() {
        let a = Point::new(2, 0);
        let b = Point::new(0, 0);
        assert_eq!(canonical(a, b), canonical(b, a));
    }

    #[test]
    fn min_vertex_picks_row_major_minimum() {
        let mut g: Graph<Point> = Graph::new();
        g.add_vertex(Point::new(5, 0), ());
        g.add_vertex(Point::new(0, 1), ());
        g.add_vertex(Point::new(0, 0), ());
        assert_eq!(g.min_vertex(), Some(Point::new(0, 0)));
    }
}
