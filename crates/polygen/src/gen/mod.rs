//! Random polygon generators.
//!
//! Purpose
//! - Three reproducible samplers sharing one output contract: `n` random
//!   vertices, counter-clockwise order, tight fit into the unit box.
//! - `simple` repairs a random tour into a simple polygon via 2-opt moves,
//!   `convex` uses the vector-sum construction, `star` sorts points by
//!   angle around a kernel point.
//!
//! Determinism
//! - Every sampler takes an explicit RNG; `ReplayToken` mixes a
//!   `(seed, index)` pair into a `StdRng` for indexed, reproducible draws.

mod convex;
mod simple;
mod star;

pub use convex::random_convex_polygon;
pub use simple::random_polygon;
pub use star::random_star_shaped_polygon;

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::geom::{fit_to_unit_box, is_clockwise};

/// Error type shared by all generators.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    RepairDidNotConverge { iterations: usize },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::RepairDidNotConverge { iterations } => {
                write!(f, "crossing repair did not converge after {iterations} iterations")
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `random_polygon` driven by a replay token instead of a caller RNG.
pub fn random_polygon_replay(
    num_points: usize,
    tok: ReplayToken,
) -> Result<Vec<Vector2<f64>>, GeneratorError> {
    let mut rng = tok.to_std_rng();
    random_polygon(num_points, &mut rng)
}

/// `random_convex_polygon` driven by a replay token.
pub fn random_convex_polygon_replay(
    num_points: usize,
    tok: ReplayToken,
) -> Result<Vec<Vector2<f64>>, GeneratorError> {
    let mut rng = tok.to_std_rng();
    random_convex_polygon(num_points, &mut rng)
}

/// `random_star_shaped_polygon` driven by a replay token.
pub fn random_star_shaped_polygon_replay(
    num_points: usize,
    tok: ReplayToken,
) -> Result<Vec<Vector2<f64>>, GeneratorError> {
    let mut rng = tok.to_std_rng();
    random_star_shaped_polygon(num_points, &mut rng)
}

/// A polygon needs more than two vertices.
fn validate_num_points(num_points: usize) -> Result<(), GeneratorError> {
    if num_points <= 2 {
        return Err(GeneratorError::invalid(format!(
            "need more than 2 points, got {num_points}"
        )));
    }
    Ok(())
}

/// Shared postprocessing: counter-clockwise order, then tight unit-box fit.
fn normalize(mut points: Vec<Vector2<f64>>) -> Vec<Vector2<f64>> {
    if is_clockwise(&points) {
        points.reverse();
    }
    fit_to_unit_box(&points)
}
