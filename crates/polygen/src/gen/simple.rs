//! General simple polygons via 2-opt crossing repair.
//!
//! Start from the trivial (almost certainly self-intersecting) tour over
//! the sampled points and repair it: repeatedly pull an edge off the
//! worklist, find a crossing partner, and reconnect the four endpoints the
//! way that keeps the tour one cycle. Auer & Held, "RPG — Heuristics for
//! the Generation of Random Polygons", 1996. Faster methods exist; this
//! one is simple and fast enough for realistic vertex counts.

use std::collections::BTreeSet;

use nalgebra::Vector2;
use rand::Rng;

use crate::geom::segments_cross;
use crate::graph::{is_single_cycle, reconstruct_cycle, Edge};

use super::{normalize, validate_num_points, GeneratorError};

/// Worklist-iteration cap per call. The repair loop empirically resolves
/// in a small multiple of `n`; the quadratic slack only guards against
/// unforeseen floating-point edge cases.
fn max_repair_iterations(num_points: usize) -> usize {
    num_points.saturating_mul(num_points).saturating_mul(1000)
}

/// Generate a random simple polygon with `num_points` vertices, fit to the
/// unit box and ordered counter-clockwise.
pub fn random_polygon<R: Rng + ?Sized>(
    num_points: usize,
    rng: &mut R,
) -> Result<Vec<Vector2<f64>>, GeneratorError> {
    validate_num_points(num_points)?;

    let points: Vec<Vector2<f64>> = (0..num_points)
        .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let accepted = untangle(&points)?;
    let cycle = reconstruct_cycle(accepted);
    let polygon: Vec<Vector2<f64>> = cycle.into_iter().map(|v| points[v]).collect();
    Ok(normalize(polygon))
}

/// Repair the trivial tour over `points` until no two edges cross.
///
/// Two worklists: `pending` holds edges not yet verified, `accepted` holds
/// edges verified pairwise non-crossing so far. Accepting an edge is not
/// final — a later 2-opt move can reintroduce a crossing, which demotes
/// the accepted edge back to `pending`.
fn untangle(points: &[Vector2<f64>]) -> Result<BTreeSet<Edge>, GeneratorError> {
    let num_points = points.len();
    let mut pending: BTreeSet<Edge> = (0..num_points)
        .map(|i| Edge::new(i, (i + 1) % num_points))
        .collect();
    let mut accepted: BTreeSet<Edge> = BTreeSet::new();

    let max_iterations = max_repair_iterations(num_points);
    let mut iterations = 0usize;

    while let Some(edge) = pending.pop_first() {
        iterations += 1;
        if iterations > max_iterations {
            return Err(GeneratorError::RepairDidNotConverge { iterations });
        }

        let Some(crossing) = first_crossing(edge, &pending, points) else {
            accepted.insert(edge);
            continue;
        };
        pending.remove(&crossing);

        let (a, b) = edge.endpoints();
        let (c, d) = crossing.endpoints();

        // Two non-crossing reconnections of the four endpoints exist; only
        // one keeps the tour a single cycle, the other splits it in two.
        let swap = [Edge::new(c, a), Edge::new(d, b)];
        let hypothetical = pending
            .iter()
            .chain(accepted.iter())
            .copied()
            .chain(swap.iter().copied());
        let new_edges = if is_single_cycle(hypothetical) {
            swap
        } else {
            [Edge::new(c, b), Edge::new(d, a)]
        };

        for new_edge in new_edges {
            pending.insert(new_edge);
            // A fresh edge can invalidate earlier acceptances; demote any
            // accepted edge it crosses.
            let invalidated = all_crossings(new_edge, &accepted, points);
            for old in invalidated {
                accepted.remove(&old);
                pending.insert(old);
            }
        }
    }

    Ok(accepted)
}

/// First edge in `candidates` (excluding endpoint-sharing ones) whose
/// segment crosses `edge`.
fn first_crossing(
    edge: Edge,
    candidates: &BTreeSet<Edge>,
    points: &[Vector2<f64>],
) -> Option<Edge> {
    crossings(edge, candidates, points).next()
}

/// Every edge in `candidates` (excluding endpoint-sharing ones) whose
/// segment crosses `edge`.
fn all_crossings(edge: Edge, candidates: &BTreeSet<Edge>, points: &[Vector2<f64>]) -> Vec<Edge> {
    crossings(edge, candidates, points).collect()
}

fn crossings<'a>(
    edge: Edge,
    candidates: &'a BTreeSet<Edge>,
    points: &'a [Vector2<f64>],
) -> impl Iterator<Item = Edge> + 'a {
    let (a, b) = edge.endpoints();
    candidates.iter().copied().filter(move |&other| {
        !other.shares_endpoint(edge)
            && segments_cross(
                points[a],
                points[b],
                points[other.lo()],
                points[other.hi()],
            )
    })
}
