//! 2D geometric predicates shared by all generators.
//!
//! Purpose
//! - Keep the floating-point decisions in one place: the orientation test,
//!   winding detection, bounding boxes, the unit-box fit, and the
//!   epsilon-tolerant segment-crossing predicate.
//!
//! Why eps-aware
//! - The crossing-repair engine feeds near-collinear and near-touching
//!   segments through `segments_cross`; its tie-breaks (touching counts as
//!   crossing) are load-bearing for the repair loop and pinned by tests.

mod predicates;
mod segment;

pub use predicates::{fit_to_unit_box, is_clockwise, orientation, BoundingBox};
pub use segment::segments_cross;

#[cfg(test)]
mod tests;
