use super::*;
use nalgebra::Vector2;

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn orientation_sign_convention() {
    // u → v counter-clockwise around w: positive.
    assert!(orientation(v(1.0, 0.0), v(0.0, 1.0), v(0.0, 0.0)) > 0.0);
    // Reversed order: negative.
    assert!(orientation(v(0.0, 1.0), v(1.0, 0.0), v(0.0, 0.0)) < 0.0);
    // Twice the triangle area in magnitude.
    let o = orientation(v(2.0, 0.0), v(0.0, 2.0), v(0.0, 0.0));
    assert!((o - 4.0).abs() < 1e-12);
}

#[test]
fn orientation_collinear_is_zero() {
    assert_eq!(orientation(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)), 0.0);
}

#[test]
fn winding_detection_on_square() {
    let ccw = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
    assert!(!is_clockwise(&ccw));
    let cw: Vec<_> = ccw.iter().rev().copied().collect();
    assert!(is_clockwise(&cw));
}

#[test]
fn bounding_box_scan() {
    let pts = [v(0.5, -1.0), v(-2.0, 3.0), v(1.5, 0.0)];
    let bb = BoundingBox::of(&pts);
    assert_eq!(bb.x_min, -2.0);
    assert_eq!(bb.x_max, 1.5);
    assert_eq!(bb.y_min, -1.0);
    assert_eq!(bb.y_max, 3.0);
    assert!((bb.width() - 3.5).abs() < 1e-12);
    assert!((bb.height() - 4.0).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "empty point set")]
fn bounding_box_of_empty_slice_panics() {
    let _ = BoundingBox::of(&[]);
}

#[test]
fn unit_box_fit_is_tight() {
    let pts = [v(2.0, 10.0), v(4.0, 30.0), v(3.0, 20.0), v(2.5, 25.0)];
    let fitted = fit_to_unit_box(&pts);
    let bb = BoundingBox::of(&fitted);
    assert!(bb.x_min.abs() < 1e-12);
    assert!((bb.x_max - 1.0).abs() < 1e-12);
    assert!(bb.y_min.abs() < 1e-12);
    assert!((bb.y_max - 1.0).abs() < 1e-12);
    // Relative order survives the affine map.
    assert!(fitted[0].x < fitted[2].x && fitted[2].x < fitted[1].x);
}

// ── segment crossing ──

#[test]
fn proper_crossing() {
    assert!(segments_cross(
        v(0.0, 0.0),
        v(2.0, 2.0),
        v(0.0, 2.0),
        v(2.0, 0.0)
    ));
}

#[test]
fn parallel_segments_do_not_cross() {
    assert!(!segments_cross(
        v(0.0, 0.0),
        v(1.0, 0.0),
        v(0.0, 1.0),
        v(1.0, 1.0)
    ));
}

#[test]
fn disjoint_extents_are_pruned() {
    assert!(!segments_cross(
        v(0.0, 0.0),
        v(1.0, 1.0),
        v(5.0, 5.0),
        v(6.0, 7.0)
    ));
}

#[test]
fn collinear_overlapping_segments_cross() {
    assert!(segments_cross(
        v(0.0, 0.0),
        v(2.0, 0.0),
        v(1.0, 0.0),
        v(3.0, 0.0)
    ));
}

#[test]
fn collinear_disjoint_segments_do_not_cross() {
    assert!(!segments_cross(
        v(0.0, 0.0),
        v(1.0, 0.0),
        v(2.0, 0.0),
        v(3.0, 0.0)
    ));
}

#[test]
fn touching_t_shape_counts_as_crossing() {
    // Endpoint of the second segment lies on the interior of the first.
    // This tie-break is intentional; the repair engine depends on it.
    assert!(segments_cross(
        v(0.0, 0.0),
        v(2.0, 0.0),
        v(1.0, -1.0),
        v(1.0, 0.0)
    ));
}

#[test]
fn shared_endpoint_counts_as_crossing() {
    // Segments meeting at a common endpoint also report a crossing, which
    // is why the generators skip endpoint-sharing edge pairs entirely.
    assert!(segments_cross(
        v(0.0, 0.0),
        v(1.0, 1.0),
        v(1.0, 1.0),
        v(2.0, 0.0)
    ));
}
