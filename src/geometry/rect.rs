use crate::math::point_2d::{points_equal, shift};
use crate::math::scalar::{is_between, nearly_equals};
use crate::math::{Point2, Transform2};

use super::{Line, Polygon, Segment};

/// An axis-aligned rectangle defined by an origin corner, width and
/// height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// The rectangle's corners as a polygon, counter-clockwise from the
    /// origin corner.
    #[must_use]
    pub fn polygon(&self) -> Polygon {
        Polygon::new(vec![
            self.origin,
            shift(self.origin, self.width, 0.0),
            shift(self.origin, self.width, self.height),
            shift(self.origin, 0.0, self.height),
        ])
    }

    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        self.polygon().edges()
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }

    /// Interior test on both axes, with the boundary-excluding
    /// `is_between` policy.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        is_between(p.x, self.origin.x, self.origin.x + self.width, tolerance)
            && is_between(p.y, self.origin.y, self.origin.y + self.height, tolerance)
    }

    /// Point at fraction `t` along the boundary.
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        self.polygon().at(t)
    }

    /// Nearest boundary point to `p`.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        self.polygon().project(p)
    }

    #[must_use]
    pub fn equals(&self, other: &Rect, tolerance: f64) -> bool {
        points_equal(self.origin, other.origin, tolerance)
            && nearly_equals(self.width, other.width, tolerance)
            && nearly_equals(self.height, other.height, tolerance)
    }

    /// Rotation breaks axis alignment, so the result is a polygon.
    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Polygon {
        self.polygon().rotate(angle, center)
    }

    /// Reflection breaks axis alignment, so the result is a polygon.
    #[must_use]
    pub fn reflect(&self, line: &Line) -> Polygon {
        self.polygon().reflect(line)
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self {
            origin: crate::math::point_2d::scale(self.origin, sx, sy),
            width: self.width * sx,
            height: self.height * sy,
        }
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: shift(self.origin, dx, dy),
            width: self.width,
            height: self.height,
        }
    }

    /// A general affine map does not preserve axis alignment, so the
    /// result is a polygon.
    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Polygon {
        self.polygon().transform(m)
    }
}
