use std::f64::consts::TAU;

use crate::math::point_2d::{
    angle_about, apply_transform, from_polar, points_equal, reflect_across, rotate_about, scale,
    shift,
};
use crate::math::scalar::nearly_equals;
use crate::math::{Point2, Transform2};

use super::{Line, Ray};

/// An angle defined by three points: arm endpoint `a`, vertex `b`, arm
/// endpoint `c`, measured counter-clockwise from arm `b->a` to arm
/// `b->c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Angle {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Measure in radians, normalized into `[0, 2*pi)`.
    #[must_use]
    pub fn rad(&self) -> f64 {
        let mut phi = angle_about(self.c, self.b) - angle_about(self.a, self.b);
        if phi < 0.0 {
            phi += TAU;
        }
        phi
    }

    /// Measure in degrees.
    #[must_use]
    pub fn deg(&self) -> f64 {
        self.rad().to_degrees()
    }

    #[must_use]
    pub fn is_right(&self, tolerance: f64) -> bool {
        nearly_equals(self.rad(), std::f64::consts::FRAC_PI_2, tolerance)
    }

    /// The ray from the vertex that halves the angle.
    #[must_use]
    pub fn bisector(&self) -> Ray {
        let mid = angle_about(self.a, self.b) + self.rad() / 2.0;
        Ray::new(self.b, self.b + from_polar(mid, 1.0).coords)
    }

    /// Whether `p` falls within the angular sector spanned from arm
    /// `b->a` to arm `b->c`.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        let mut delta = angle_about(p, self.b) - angle_about(self.a, self.b);
        if delta < 0.0 {
            delta += TAU;
        }
        delta <= self.rad() + tolerance
    }

    #[must_use]
    pub fn equals(&self, other: &Angle, tolerance: f64) -> bool {
        points_equal(self.a, other.a, tolerance)
            && points_equal(self.b, other.b, tolerance)
            && points_equal(self.c, other.c, tolerance)
    }

    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Self {
        self.map_points(|p| rotate_about(p, angle, center))
    }

    #[must_use]
    pub fn reflect(&self, line: &Line) -> Self {
        self.map_points(|p| reflect_across(p, line.p1, line.p2))
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.map_points(|p| scale(p, sx, sy))
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|p| shift(p, dx, dy))
    }

    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Self {
        self.map_points(|p| apply_transform(p, m))
    }

    fn map_points(&self, f: impl Fn(Point2) -> Point2) -> Self {
        Self {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn right_angle_measure() {
        let ang = Angle::new(
            Point2::new(1.0, 0.0),
            Point2::origin(),
            Point2::new(0.0, 1.0),
        );
        assert!((ang.rad() - FRAC_PI_2).abs() < TOLERANCE);
        assert!((ang.deg() - 90.0).abs() < TOLERANCE);
        assert!(ang.is_right(TOLERANCE));
    }

    #[test]
    fn reflex_measure_normalizes() {
        // Swapping the arms gives the reflex complement.
        let ang = Angle::new(
            Point2::new(0.0, 1.0),
            Point2::origin(),
            Point2::new(1.0, 0.0),
        );
        assert!((ang.rad() - 3.0 * FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn bisector_halves() {
        let ang = Angle::new(
            Point2::new(1.0, 0.0),
            Point2::origin(),
            Point2::new(0.0, 1.0),
        );
        let bis = ang.bisector();
        let quarter = PI / 4.0;
        assert!(bis.contains(from_polar(quarter, 5.0), TOLERANCE));
    }

    #[test]
    fn sector_contains() {
        let ang = Angle::new(
            Point2::new(1.0, 0.0),
            Point2::origin(),
            Point2::new(0.0, 1.0),
        );
        assert!(ang.contains(Point2::new(1.0, 1.0), TOLERANCE));
        assert!(!ang.contains(Point2::new(-1.0, -1.0), TOLERANCE));
    }
}
