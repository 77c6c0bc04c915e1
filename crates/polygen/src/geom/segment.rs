use nalgebra::Vector2;

use super::predicates::orientation;

/// True when the x-extents and y-extents of segments `(a, b)` and `(c, d)`
/// both overlap. Cheap rejection before the orientation tests, and the
/// whole answer for collinear segments.
fn extents_overlap(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    if a.x.max(b.x) < c.x.min(d.x) {
        return false;
    }
    if c.x.max(d.x) < a.x.min(b.x) {
        return false;
    }
    if a.y.max(b.y) < c.y.min(d.y) {
        return false;
    }
    if c.y.max(d.y) < a.y.min(b.y) {
        return false;
    }
    true
}

/// Do segments `(a, b)` and `(c, d)` cross or overlap?
///
/// Near-zero orientations of both `c` and `d` against line `ab` mean the
/// segments are collinear; overlapping extents then decide. Otherwise the
/// segments cross iff each pair of endpoints straddles the other segment's
/// line, with a product of exactly zero counting as a crossing — an
/// endpoint touching the other segment in a "T" shape is reported as a
/// crossing. Callers rely on that tie-break; do not tighten it.
pub fn segments_cross(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    if !extents_overlap(a, b, c, d) {
        return false;
    }
    let orient_c = orientation(a, b, c);
    let orient_d = orientation(a, b, d);
    if orient_c.abs() < f64::EPSILON && orient_d.abs() < f64::EPSILON {
        // Collinear with overlapping extents: the segments overlap.
        return true;
    }
    if orient_c * orient_d > 0.0 {
        return false;
    }
    if orientation(c, d, a) * orientation(c, d, b) > 0.0 {
        return false;
    }
    true
}
