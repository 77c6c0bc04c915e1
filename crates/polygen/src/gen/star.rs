//! Star-shaped polygons via angle sorting around the origin.
//!
//! Sorted angles mean consecutive vertices occupy consecutive angular
//! sectors, so no edge can occlude the ray from the origin to any vertex:
//! the origin is a kernel point of the resulting simple polygon.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::Rng;

use super::{normalize, validate_num_points, GeneratorError};

/// Generate a random star-shaped polygon with `num_points` vertices, fit
/// to the unit box and ordered counter-clockwise.
pub fn random_star_shaped_polygon<R: Rng + ?Sized>(
    num_points: usize,
    rng: &mut R,
) -> Result<Vec<Vector2<f64>>, GeneratorError> {
    validate_num_points(num_points)?;
    Ok(normalize(star_shaped_points(num_points, rng)))
}

/// The raw construction, centered on its kernel point (the origin), before
/// orientation normalization and unit-box fitting. Exposed crate-side so
/// the kernel-visibility property can be tested against the known center.
pub(crate) fn star_shaped_points<R: Rng + ?Sized>(
    num_points: usize,
    rng: &mut R,
) -> Vec<Vector2<f64>> {
    let mut angles: Vec<f64> = (0..num_points).map(|_| rng.gen::<f64>() * TAU).collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    angles
        .into_iter()
        .map(|theta| {
            let r = rng.gen_range(0.2..1.0);
            Vector2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
