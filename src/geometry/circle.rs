use crate::error::{GeometryError, Result};
use crate::math::point_2d::{
    apply_transform, distance, from_polar, points_equal, reflect_across, rotate_about, scale,
    shift, unit_or_x,
};
use crate::math::scalar::nearly_equals;
use crate::math::{Point2, Transform2, TOLERANCE};

use super::Line;

/// A circle defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "circle radius must be positive".into(),
            ));
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Whether `p` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        distance(p, self.center) < self.radius + tolerance
    }

    /// Projects `p` onto the circle along the ray from the center
    /// through `p`. A query at the exact center resolves through the
    /// unit-vector fallback.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        self.center + unit_or_x(p - self.center) * self.radius
    }

    /// Point at angular fraction `t` of a full turn, measured from the
    /// positive x-axis.
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        self.center + from_polar(std::f64::consts::TAU * t, self.radius).coords
    }

    #[must_use]
    pub fn equals(&self, other: &Circle, tolerance: f64) -> bool {
        points_equal(self.center, other.center, tolerance)
            && nearly_equals(self.radius, other.radius, tolerance)
    }

    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Self {
        Self {
            center: rotate_about(self.center, angle, center),
            radius: self.radius,
        }
    }

    #[must_use]
    pub fn reflect(&self, line: &Line) -> Self {
        Self {
            center: reflect_across(self.center, line.p1, line.p2),
            radius: self.radius,
        }
    }

    /// Scales the circle; the radius scales by the mean of the two
    /// factors, so only uniform scaling is exact.
    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self {
            center: scale(self.center, sx, sy),
            radius: self.radius * (sx.abs() + sy.abs()) / 2.0,
        }
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self {
            center: shift(self.center, dx, dy),
            radius: self.radius,
        }
    }

    /// Applies an affine transform; the radius scales by the mean of
    /// the diagonal scale factors.
    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Self {
        Self {
            center: apply_transform(self.center, m),
            radius: self.radius * (m[(0, 0)].abs() + m[(1, 1)].abs()) / 2.0,
        }
    }
}
