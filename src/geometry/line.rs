use crate::math::point_2d::{
    apply_transform, distance, interpolate, points_equal, reflect_across, rotate_about, scale,
    shift, unit_or_x,
};
use crate::math::scalar::{is_between, nearly_equals};
use crate::math::{Point2, Transform2, Vector2};

/// An infinite line through two distinct points.
///
/// Degenerate lines (coincident points) are representable; queries on
/// them resolve through the unit-vector fallback or report no result,
/// they never panic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p1: Point2,
    pub p2: Point2,
}

impl Line {
    /// Creates a line through `p1` and `p2`.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Direction vector `p2 - p1` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Unit direction, `(1, 0)` for a degenerate line.
    #[must_use]
    pub fn unit_direction(&self) -> Vector2 {
        unit_or_x(self.direction())
    }

    /// Slope of the line. Infinite for vertical lines; callers must
    /// special-case.
    #[must_use]
    pub fn slope(&self) -> f64 {
        (self.p2.y - self.p1.y) / (self.p2.x - self.p1.x)
    }

    /// The y-axis intercept. Infinite for vertical lines.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.p1.y - self.slope() * self.p1.x
    }

    /// Whether `p` lies on the line, via the signed-area determinant.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        let d = self.direction();
        let cross = d.x * (p.y - self.p1.y) - d.y * (p.x - self.p1.x);
        nearly_equals(cross, 0.0, tolerance)
    }

    /// Nearest point on the line to `p`.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        let u = self.unit_direction();
        self.p1 + u * (p - self.p1).dot(&u)
    }

    /// Perpendicular distance from `p` to the line.
    #[must_use]
    pub fn distance_from(&self, p: Point2) -> f64 {
        distance(p, self.project(p))
    }

    /// Point at parameter `t` (`0` at `p1`, `1` at `p2`).
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        interpolate(self.p1, self.p2, t)
    }

    /// The line through `p` perpendicular to this one.
    #[must_use]
    pub fn perpendicular_through(&self, p: Point2) -> Line {
        let d = self.unit_direction();
        Line::new(p, p + Vector2::new(-d.y, d.x))
    }

    /// The line through `p` parallel to this one.
    #[must_use]
    pub fn parallel_through(&self, p: Point2) -> Line {
        Line::new(p, p + self.unit_direction())
    }

    /// Geometric equality: `other`'s defining points lie on this line.
    #[must_use]
    pub fn equals(&self, other: &Line, tolerance: f64) -> bool {
        self.contains(other.p1, tolerance) && self.contains(other.p2, tolerance)
    }

    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Self {
        Self::new(
            rotate_about(self.p1, angle, center),
            rotate_about(self.p2, angle, center),
        )
    }

    #[must_use]
    pub fn reflect(&self, line: &Line) -> Self {
        Self::new(
            reflect_across(self.p1, line.p1, line.p2),
            reflect_across(self.p2, line.p1, line.p2),
        )
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(scale(self.p1, sx, sy), scale(self.p2, sx, sy))
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self::new(shift(self.p1, dx, dy), shift(self.p2, dx, dy))
    }

    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Self {
        Self::new(apply_transform(self.p1, m), apply_transform(self.p2, m))
    }
}

/// A ray from `p1` in the direction of `p2`, unbounded beyond `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub p1: Point2,
    pub p2: Point2,
}

impl Ray {
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// The infinite line carrying this ray.
    #[must_use]
    pub fn as_line(&self) -> Line {
        Line::new(self.p1, self.p2)
    }

    /// Whether `p` lies on the ray: collinear and strictly forward of
    /// the origin (`p1` itself is excluded).
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        self.as_line().contains(p, tolerance) && (p - self.p1).dot(&(self.p2 - self.p1)) > 0.0
    }

    /// Nearest point on the ray to `p` (parameter clamped at the origin).
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        let u = unit_or_x(self.p2 - self.p1);
        let t = (p - self.p1).dot(&u).max(0.0);
        self.p1 + u * t
    }

    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        interpolate(self.p1, self.p2, t)
    }

    /// Same origin and a collinear, same-direction second point.
    #[must_use]
    pub fn equals(&self, other: &Ray, tolerance: f64) -> bool {
        points_equal(self.p1, other.p1, tolerance) && self.contains(other.p2, tolerance)
    }

    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Self {
        Self::new(
            rotate_about(self.p1, angle, center),
            rotate_about(self.p2, angle, center),
        )
    }

    #[must_use]
    pub fn reflect(&self, line: &Line) -> Self {
        Self::new(
            reflect_across(self.p1, line.p1, line.p2),
            reflect_across(self.p2, line.p1, line.p2),
        )
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(scale(self.p1, sx, sy), scale(self.p2, sx, sy))
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self::new(shift(self.p1, dx, dy), shift(self.p2, dx, dy))
    }

    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Self {
        Self::new(apply_transform(self.p1, m), apply_transform(self.p2, m))
    }
}

/// A line segment bounded by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// The infinite line carrying this segment.
    #[must_use]
    pub fn as_line(&self) -> Line {
        Line::new(self.p1, self.p2)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        distance(self.p1, self.p2)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        interpolate(self.p1, self.p2, 0.5)
    }

    /// Whether `p` lies on the segment: collinear, then strictly between
    /// the endpoints on the x axis (or y for vertical segments). The
    /// endpoints themselves are excluded.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        if !self.as_line().contains(p, tolerance) {
            return false;
        }
        if nearly_equals(self.p1.x, self.p2.x, tolerance) {
            is_between(p.y, self.p1.y, self.p2.y, tolerance)
        } else {
            is_between(p.x, self.p1.x, self.p2.x, tolerance)
        }
    }

    /// Nearest point on the segment to `p` (parameter clamped to [0, 1]).
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        let d = self.p2 - self.p1;
        let len_sq = d.norm_squared();
        if len_sq < f64::EPSILON {
            return self.p1;
        }
        let t = ((p - self.p1).dot(&d) / len_sq).clamp(0.0, 1.0);
        self.p1 + d * t
    }

    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        interpolate(self.p1, self.p2, t)
    }

    /// Unordered endpoint equality: `p1`/`p2` may swap.
    #[must_use]
    pub fn equals(&self, other: &Segment, tolerance: f64) -> bool {
        self.equals_oriented(other, tolerance)
            || (points_equal(self.p1, other.p2, tolerance)
                && points_equal(self.p2, other.p1, tolerance))
    }

    /// Endpoint equality preserving orientation.
    #[must_use]
    pub fn equals_oriented(&self, other: &Segment, tolerance: f64) -> bool {
        points_equal(self.p1, other.p1, tolerance) && points_equal(self.p2, other.p2, tolerance)
    }

    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Self {
        Self::new(
            rotate_about(self.p1, angle, center),
            rotate_about(self.p2, angle, center),
        )
    }

    #[must_use]
    pub fn reflect(&self, line: &Line) -> Self {
        Self::new(
            reflect_across(self.p1, line.p1, line.p2),
            reflect_across(self.p2, line.p1, line.p2),
        )
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(scale(self.p1, sx, sy), scale(self.p2, sx, sy))
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self::new(shift(self.p1, dx, dy), shift(self.p2, dx, dy))
    }

    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Self {
        Self::new(apply_transform(self.p1, m), apply_transform(self.p2, m))
    }
}
