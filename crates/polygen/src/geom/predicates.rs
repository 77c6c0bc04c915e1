use nalgebra::Vector2;

/// Twice the signed area of the triangle `(u, v, w)`: the cross product of
/// `u − w` and `v − w`.
///
/// Positive when `u → v` turns counter-clockwise around `w`, negative when
/// clockwise, zero when the three points are collinear.
#[inline]
pub fn orientation(u: Vector2<f64>, v: Vector2<f64>, w: Vector2<f64>) -> f64 {
    let uw = u - w;
    let vw = v - w;
    uw.x * vw.y - uw.y * vw.x
}

/// Winding test over a closed vertex sequence (last vertex connects back to
/// the first): Σ (x_{i+1} − x_i)(y_{i+1} + y_i) > 0 means clockwise.
pub fn is_clockwise(points: &[Vector2<f64>]) -> bool {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += (points[j].x - points[i].x) * (points[j].y + points[i].y);
    }
    sum > 0.0
}

/// Axis-aligned bounding box of a point set.
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Linear scan over `points`. Panics on an empty slice.
    pub fn of(points: &[Vector2<f64>]) -> Self {
        assert!(!points.is_empty(), "bounding box of an empty point set");
        let mut bb = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for p in points {
            bb.x_min = bb.x_min.min(p.x);
            bb.x_max = bb.x_max.max(p.x);
            bb.y_min = bb.y_min.min(p.y);
            bb.y_max = bb.y_max.max(p.y);
        }
        bb
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Affine rescale of `points` into [0,1]² with a tight fit on all four sides.
///
/// Precondition: the bounding box has positive width and height. A fully
/// collinear point set divides by zero; continuous random samples avoid this
/// with probability 1, so the degenerate case stays unguarded.
pub fn fit_to_unit_box(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let bb = BoundingBox::of(points);
    let scale_x = 1.0 / bb.width();
    let scale_y = 1.0 / bb.height();
    points
        .iter()
        .map(|p| Vector2::new((p.x - bb.x_min) * scale_x, (p.y - bb.y_min) * scale_y))
        .collect()
}
