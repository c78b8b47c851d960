use super::{Point2, Transform2, Vector2, TOLERANCE};

/// Normalizes a vector, falling back to the unit x-axis for
/// (near-)zero-length input so callers never receive NaN components.
#[must_use]
pub fn unit_or_x(v: Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        return Vector2::x();
    }
    v / len
}

/// Scales a point componentwise about the origin.
#[must_use]
pub fn scale(p: Point2, sx: f64, sy: f64) -> Point2 {
    Point2::new(p.x * sx, p.y * sy)
}

/// Translates a point by `(dx, dy)`.
#[must_use]
pub fn shift(p: Point2, dx: f64, dy: f64) -> Point2 {
    Point2::new(p.x + dx, p.y + dy)
}

/// Rotates `p` by `angle` radians (counter-clockwise) about `center`.
#[must_use]
pub fn rotate_about(p: Point2, angle: f64, center: Point2) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    let d = p - center;
    Point2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Reflects `p` across the infinite line through `a` and `b`.
///
/// The two line points must be distinct; a zero-length line makes the
/// projection denominator vanish.
#[must_use]
pub fn reflect_across(p: Point2, a: Point2, b: Point2) -> Point2 {
    let d = b - a;
    let t = (p - a).dot(&d) / d.norm_squared();
    let proj = a + d * t;
    Point2::new(2.0 * proj.x - p.x, 2.0 * proj.y - p.y)
}

/// Applies an affine 2x3 matrix to a point.
#[must_use]
pub fn apply_transform(p: Point2, m: &Transform2) -> Point2 {
    Point2::new(
        m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 2)],
        m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 2)],
    )
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b - a).norm()
}

/// Manhattan (taxicab) distance between two points.
#[must_use]
pub fn manhattan(a: Point2, b: Point2) -> f64 {
    (b.x - a.x).abs() + (b.y - a.y).abs()
}

/// Dot product of two points taken as vectors from the origin.
#[must_use]
pub fn dot(a: Point2, b: Point2) -> f64 {
    a.coords.dot(&b.coords)
}

/// Linear interpolation between `p1` and `p2` at parameter `t`.
#[must_use]
pub fn interpolate(p1: Point2, p2: Point2, t: f64) -> Point2 {
    p1 + (p2 - p1) * t
}

/// Piecewise-linear interpolation along an ordered point sequence.
///
/// `t` is clamped to `[0, 1]`, mapped onto segment `floor(t * (n - 1))`,
/// and interpolated within that segment. An empty sequence yields the
/// origin.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn interpolate_list(points: &[Point2], t: f64) -> Point2 {
    let n = points.len();
    if n == 0 {
        return Point2::origin();
    }
    if n == 1 {
        return points[0];
    }

    let scaled = t.clamp(0.0, 1.0) * (n - 1) as f64;
    let i = (scaled.floor() as usize).min(n - 2);
    let local = scaled - i as f64;
    interpolate(points[i], points[i + 1], local)
}

/// Arithmetic mean of a point sequence. An empty sequence yields the origin.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let mut sum = Vector2::zeros();
    for p in points {
        sum += p.coords;
    }
    Point2::from(sum / points.len() as f64)
}

/// Point at polar coordinates `(angle, r)` relative to the origin.
#[must_use]
pub fn from_polar(angle: f64, r: f64) -> Point2 {
    Point2::new(r * angle.cos(), r * angle.sin())
}

/// Angle of `p` around `center`, normalized into `[0, 2*pi)`.
#[must_use]
pub fn angle_about(p: Point2, center: Point2) -> f64 {
    let a = (p.y - center.y).atan2(p.x - center.x);
    if a < 0.0 {
        a + std::f64::consts::TAU
    } else {
        a
    }
}

/// Epsilon-based point equality on both coordinates.
#[must_use]
pub fn points_equal(a: Point2, b: Point2, tolerance: f64) -> bool {
    super::scalar::nearly_equals(a.x, b.x, tolerance)
        && super::scalar::nearly_equals(a.y, b.y, tolerance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_about(Point2::new(1.0, 0.0), FRAC_PI_2, Point2::origin());
        assert!(points_equal(p, Point2::new(0.0, 1.0), TOLERANCE));
    }

    #[test]
    fn rotate_round_trip() {
        let p = Point2::new(3.0, -2.0);
        let c = Point2::new(1.0, 1.0);
        for angle in [0.3, 1.2, PI, 5.9] {
            let back = rotate_about(rotate_about(p, angle, c), -angle, c);
            assert!(points_equal(back, p, TOLERANCE), "angle={angle}");
        }
    }

    #[test]
    fn reflect_across_horizontal_line() {
        let p = reflect_across(
            Point2::new(2.0, 3.0),
            Point2::new(0.0, 1.0),
            Point2::new(5.0, 1.0),
        );
        assert!(points_equal(p, Point2::new(2.0, -1.0), TOLERANCE));
    }

    #[test]
    fn reflect_is_involution() {
        let a = Point2::new(-1.0, 0.5);
        let b = Point2::new(2.0, 4.0);
        let p = Point2::new(3.0, -2.5);
        let back = reflect_across(reflect_across(p, a, b), a, b);
        assert!(points_equal(back, p, TOLERANCE));
    }

    #[test]
    fn transform_rotation_plus_translation() {
        // Quarter turn CCW followed by a (1, 2) shift.
        let m = crate::math::Transform2::new(0.0, -1.0, 1.0, 1.0, 0.0, 2.0);
        let p = apply_transform(Point2::new(1.0, 0.0), &m);
        assert!(points_equal(p, Point2::new(1.0, 3.0), TOLERANCE));
    }

    #[test]
    fn distance_and_manhattan() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_relative_eq!(distance(a, b), 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(manhattan(a, b), 7.0, epsilon = TOLERANCE);
    }

    #[test]
    fn interpolate_midpoint() {
        let p = interpolate(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0), 0.5);
        assert!(points_equal(p, Point2::new(2.0, 1.0), TOLERANCE));
    }

    #[test]
    fn interpolate_list_selects_segment() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
        ];
        // t = 0.75 lands halfway along the second segment.
        let p = interpolate_list(&pts, 0.75);
        assert!(points_equal(p, Point2::new(2.0, 1.0), TOLERANCE));
    }

    #[test]
    fn interpolate_list_clamps() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(points_equal(
            interpolate_list(&pts, -0.5),
            pts[0],
            TOLERANCE
        ));
        assert!(points_equal(interpolate_list(&pts, 2.0), pts[1], TOLERANCE));
    }

    #[test]
    fn interpolate_list_degenerate() {
        assert!(points_equal(
            interpolate_list(&[], 0.5),
            Point2::origin(),
            TOLERANCE
        ));
        let single = [Point2::new(7.0, 8.0)];
        assert!(points_equal(interpolate_list(&single, 0.5), single[0], TOLERANCE));
    }

    #[test]
    fn average_of_square_corners() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(points_equal(average(&pts), Point2::new(1.0, 1.0), TOLERANCE));
    }

    #[test]
    fn from_polar_basic() {
        let p = from_polar(FRAC_PI_2, 2.0);
        assert!(points_equal(p, Point2::new(0.0, 2.0), TOLERANCE));
    }

    #[test]
    fn angle_about_covers_all_quadrants() {
        let c = Point2::origin();
        assert_relative_eq!(angle_about(Point2::new(1.0, 0.0), c), 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(
            angle_about(Point2::new(0.0, 1.0), c),
            FRAC_PI_2,
            epsilon = TOLERANCE
        );
        // Below the x-axis must normalize into [0, 2*pi).
        let a = angle_about(Point2::new(0.0, -1.0), c);
        assert_relative_eq!(a, 3.0 * FRAC_PI_2, epsilon = TOLERANCE);
    }

    #[test]
    fn unit_or_x_fallback() {
        let u = unit_or_x(Vector2::zeros());
        assert!((u.x - 1.0).abs() < TOLERANCE);
        assert!(u.y.abs() < TOLERANCE);

        let v = unit_or_x(Vector2::new(0.0, 3.0));
        assert!((v.y - 1.0).abs() < TOLERANCE);
    }
}
