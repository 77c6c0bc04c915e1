//! Random simple polygons in the unit square.
//!
//! Purpose
//! - Generate a random non-self-intersecting polygon with a given vertex
//!   count, normalized to fit [0,1]². Three strategies share one geometric
//!   foundation: a general simple polygon (2-opt crossing repair over a
//!   random tour), a convex polygon (vector-sum construction), and a
//!   star-shaped polygon (angle sort around a kernel point).
//!
//! Determinism
//! - Every generator takes an explicit `rand::Rng`; seeding the RNG
//!   identically yields bit-identical polygons. `ReplayToken` offers
//!   indexed, reproducible draws without threading an RNG by hand.
//!
//! Output contract
//! - Counter-clockwise vertex order, tight fit into the unit box, last
//!   vertex implicitly closing back to the first (no duplicated closing
//!   point).

pub mod gen;
pub mod geom;
pub mod graph;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use gen::{
    random_convex_polygon, random_polygon, random_star_shaped_polygon, GeneratorError, ReplayToken,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{
        random_convex_polygon, random_convex_polygon_replay, random_polygon,
        random_polygon_replay, random_star_shaped_polygon, random_star_shaped_polygon_replay,
        GeneratorError, ReplayToken,
    };
    pub use crate::geom::{
        fit_to_unit_box, is_clockwise, orientation, segments_cross, BoundingBox,
    };
    pub use crate::graph::{is_single_cycle, reconstruct_cycle, Edge};
    pub use nalgebra::Vector2 as Vec2;
}
