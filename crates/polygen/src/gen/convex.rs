//! Convex polygons via the vector-sum construction.
//!
//! Partition the sorted x-coordinates (and y-coordinates) into two chains
//! sharing both endpoints; consecutive differences along each chain, with
//! the second chain's differences sign-flipped, sum to zero per axis.
//! Shuffling the y-components against the x-components and sorting the
//! resulting vectors by angle lays them head-to-tail into a convex
//! polygon: each partial sum turns monotonically. Valtr's construction,
//! see https://stackoverflow.com/a/47358689.

use std::cmp::Ordering;

use nalgebra::Vector2;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{normalize, validate_num_points, GeneratorError};

/// Generate a random convex polygon with `num_points` vertices, fit to the
/// unit box and ordered counter-clockwise.
pub fn random_convex_polygon<R: Rng + ?Sized>(
    num_points: usize,
    rng: &mut R,
) -> Result<Vec<Vector2<f64>>, GeneratorError> {
    validate_num_points(num_points)?;

    let xs: Vec<f64> = (0..num_points).map(|_| rng.gen()).collect();
    let ys: Vec<f64> = (0..num_points).map(|_| rng.gen()).collect();

    let (x_up, x_down) = sort_and_divide(xs, rng);
    let (y_up, y_down) = sort_and_divide(ys, rng);

    let vx = chain_deltas(&x_up, &x_down);
    let mut vy = chain_deltas(&y_up, &y_down);
    vy.shuffle(rng);

    let mut vectors: Vec<Vector2<f64>> = vx
        .into_iter()
        .zip(vy)
        .map(|(x, y)| Vector2::new(x, y))
        .collect();
    vectors.sort_by(|u, v| {
        angle(u)
            .partial_cmp(&angle(v))
            .unwrap_or(Ordering::Equal)
    });

    Ok(normalize(polygon_from_vectors(&vectors)))
}

/// Sort `values` and split the interior randomly into two halves; both
/// chains keep the shared extremes, so their difference sequences cancel.
fn sort_and_divide<R: Rng + ?Sized>(mut values: Vec<f64>, rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = values.len();
    let interior = n - 2;

    let mut in_first = vec![false; interior];
    for i in rand::seq::index::sample(rng, interior, interior / 2) {
        in_first[i] = true;
    }

    let mut chain1 = vec![values[0]];
    let mut chain2 = vec![values[0]];
    for (i, &picked) in in_first.iter().enumerate() {
        if picked {
            chain1.push(values[i + 1]);
        } else {
            chain2.push(values[i + 1]);
        }
    }
    chain1.push(values[n - 1]);
    chain2.push(values[n - 1]);
    (chain1, chain2)
}

/// Consecutive differences along `up`, then sign-flipped differences along
/// `down`; together they sum to zero.
fn chain_deltas(up: &[f64], down: &[f64]) -> Vec<f64> {
    let mut deltas = Vec::with_capacity(up.len() + down.len() - 2);
    for pair in up.windows(2) {
        deltas.push(pair[1] - pair[0]);
    }
    for pair in down.windows(2) {
        deltas.push(pair[0] - pair[1]);
    }
    deltas
}

#[inline]
fn angle(v: &Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// Lay the vectors head-to-tail from the origin; the last vector closes
/// the loop back to the start and emits no vertex of its own.
fn polygon_from_vectors(vectors: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut points = Vec::with_capacity(vectors.len());
    let mut cursor = Vector2::new(0.0, 0.0);
    points.push(cursor);
    for v in &vectors[..vectors.len() - 1] {
        cursor += *v;
        points.push(cursor);
    }
    points
}
