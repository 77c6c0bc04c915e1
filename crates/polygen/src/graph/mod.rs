//! Edge-set utilities for cycles over vertex indices.
//!
//! Purpose
//! - Canonical unordered edges, a degree-≤2 adjacency table, the
//!   single-connected-cycle check the repair engine uses as its 2-opt
//!   tie-break, and cycle reconstruction for the final vertex order.
//!
//! Why indices
//! - The graph identifies vertices by their position in the sampled point
//!   array, not by coordinates; coinciding points stay distinct vertices.
//!   Neighbor sets never exceed two entries in well-formed input, so a
//!   fixed-size inline slot per vertex replaces any hashed container.

use std::collections::BTreeSet;

/// Unordered pair of distinct vertex indices, stored smaller-first so set
/// membership and equality are order-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    /// Canonicalize `(i, j)`. Panics when `i == j`: a self-loop is a
    /// programming error, never valid input.
    pub fn new(i: usize, j: usize) -> Self {
        assert!(i != j, "edge cannot start and end at the same vertex");
        if i < j {
            Self { lo: i, hi: j }
        } else {
            Self { lo: j, hi: i }
        }
    }

    #[inline]
    pub fn lo(self) -> usize {
        self.lo
    }

    #[inline]
    pub fn hi(self) -> usize {
        self.hi
    }

    #[inline]
    pub fn endpoints(self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    #[inline]
    pub fn touches(self, v: usize) -> bool {
        self.lo == v || self.hi == v
    }

    #[inline]
    pub fn shares_endpoint(self, other: Edge) -> bool {
        self.touches(other.lo) || self.touches(other.hi)
    }
}

/// Inline neighbor slot: at most two adjacent vertices per vertex in a
/// union of simple cycles. A third insertion flags overflow instead of
/// growing.
#[derive(Clone, Copy, Debug, Default)]
struct Neighbors {
    items: [usize; 2],
    len: u8,
}

impl Neighbors {
    #[inline]
    fn push(&mut self, v: usize) -> bool {
        if usize::from(self.len) < 2 {
            self.items[usize::from(self.len)] = v;
            self.len += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn pair(&self) -> (usize, usize) {
        debug_assert_eq!(self.len, 2);
        (self.items[0], self.items[1])
    }

    /// Remove and return the first remaining neighbor.
    #[inline]
    fn take_first(&mut self) -> usize {
        debug_assert!(self.len > 0);
        let v = self.items[0];
        self.items[0] = self.items[1];
        self.len -= 1;
        v
    }

    /// Drop `v` from the slot if present.
    #[inline]
    fn remove(&mut self, v: usize) {
        if self.len == 2 && self.items[1] == v {
            self.len = 1;
        } else if self.len >= 1 && self.items[0] == v {
            self.take_first();
        }
    }
}

/// Vertex-id-indexed neighbor table derived from an edge collection.
struct Adjacency {
    slots: Vec<Neighbors>,
    /// Vertex ids referenced by at least one edge, in first-seen order.
    touched: Vec<usize>,
    /// Some vertex exceeded two neighbors.
    overflow: bool,
}

impl Adjacency {
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().collect();
        let size = edges.iter().map(|e| e.hi() + 1).max().unwrap_or(0);
        let mut adj = Self {
            slots: vec![Neighbors::default(); size],
            touched: Vec::new(),
            overflow: false,
        };
        for edge in edges {
            let (a, b) = edge.endpoints();
            for v in [a, b] {
                if adj.slots[v].len == 0 {
                    adj.touched.push(v);
                }
            }
            adj.overflow |= !adj.slots[a].push(b);
            adj.overflow |= !adj.slots[b].push(a);
        }
        adj
    }

    fn every_degree_is_two(&self) -> bool {
        !self.overflow && self.touched.iter().all(|&v| self.slots[v].len == 2)
    }
}

/// Does the edge collection form exactly one cycle spanning every vertex
/// it references?
///
/// Every referenced vertex must have exactly two neighbors; a walk from an
/// arbitrary start then consumes both incident edges per visited vertex and
/// advances to an unvisited endpoint until it closes. The walk covers the
/// whole vertex set iff the graph is a single cycle, regardless of the
/// starting vertex.
pub fn is_single_cycle<I>(edges: I) -> bool
where
    I: IntoIterator<Item = Edge>,
{
    let mut adj = Adjacency::from_edges(edges);
    if adj.touched.is_empty() || !adj.every_degree_is_two() {
        return false;
    }
    let total = adj.touched.len();
    let mut visited = vec![false; adj.slots.len()];
    let mut seen = 0usize;
    let mut current = adj.touched[0];
    loop {
        if !visited[current] {
            visited[current] = true;
            seen += 1;
        }
        let (a, b) = adj.slots[current].pair();
        adj.slots[current].len = 0;
        if visited[a] && visited[b] {
            break;
        }
        current = if visited[b] { a } else { b };
    }
    seen == total
}

/// Reconstruct the ordered vertex sequence of a single cycle.
///
/// Precondition: `is_single_cycle(edges)` holds; malformed input panics
/// (programmer error, not a runtime condition). Starts at the smallest
/// vertex index so the result is deterministic.
pub fn reconstruct_cycle<I>(edges: I) -> Vec<usize>
where
    I: IntoIterator<Item = Edge>,
{
    let edges: BTreeSet<Edge> = edges.into_iter().collect();
    let mut adj = Adjacency::from_edges(edges.iter().copied());
    assert!(adj.every_degree_is_two(), "the edges do not form a cycle");
    debug_assert!(
        is_single_cycle(edges.iter().copied()),
        "the edges form more than one cycle"
    );

    // BTreeSet order puts the smallest vertex in front of `touched`.
    let first = adj.touched[0];
    let mut cycle = vec![first];
    let mut last = first;
    loop {
        let next = adj.slots[last].take_first();
        // Drop the back-reference so the walk cannot turn around.
        adj.slots[next].remove(last);
        if next == first {
            break;
        }
        cycle.push(next);
        last = next;
    }
    cycle
}
