use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::point_2d::{
    angle_about, apply_transform, distance, points_equal, reflect_across, rotate_about, scale,
    shift,
};
use crate::math::scalar::nearly_equals;
use crate::math::{Point2, Transform2, TOLERANCE};

use super::Line;

/// A circular arc defined by a center, a start point (fixing both the
/// radius and the initial angle) and a signed angular sweep in radians.
/// Positive sweep runs counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    start: Point2,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the start point coincides with the center
    /// (zero radius).
    pub fn new(center: Point2, start: Point2, sweep: f64) -> Result<Self> {
        if distance(center, start) < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "arc start point must be distinct from its center".into(),
            ));
        }
        Ok(Self {
            center,
            start,
            sweep,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        distance(self.center, self.start)
    }

    /// Angle of the start point about the center, in `[0, 2*pi)`.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        angle_about(self.start, self.center)
    }

    /// The endpoint reached after traversing the full sweep.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        rotate_about(self.start, self.sweep, self.center)
    }

    /// Point at angular fraction `t` of the sweep.
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        rotate_about(self.start, self.sweep * t, self.center)
    }

    /// Whether `p` lies on the arc: on the carrying circle and within
    /// the swept angular range.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        if !nearly_equals(distance(p, self.center), self.radius(), tolerance) {
            return false;
        }
        let angle = (p.y - self.center.y).atan2(p.x - self.center.x);
        angle_in_sweep(angle, self.start_angle(), self.sweep, tolerance)
    }

    /// Nearest point on the arc to `p`: the angular fraction toward `p`
    /// clamped into the sweep range.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        let angle = (p.y - self.center.y).atan2(p.x - self.center.x);
        let mut delta = angle - self.start_angle();
        if self.sweep > 0.0 {
            while delta < 0.0 {
                delta += TAU;
            }
        } else {
            while delta > 0.0 {
                delta -= TAU;
            }
        }
        let t = if self.sweep.abs() < TOLERANCE {
            0.0
        } else {
            (delta / self.sweep).clamp(0.0, 1.0)
        };
        self.at(t)
    }

    /// The arc itself if its sweep is at most a half turn, otherwise the
    /// complementary arc with the same endpoints.
    #[must_use]
    pub fn minor(&self) -> Self {
        if self.sweep.abs() <= std::f64::consts::PI {
            *self
        } else {
            self.complement()
        }
    }

    /// The arc itself if its sweep is at least a half turn, otherwise
    /// the complementary arc with the same endpoints.
    #[must_use]
    pub fn major(&self) -> Self {
        if self.sweep.abs() >= std::f64::consts::PI {
            *self
        } else {
            self.complement()
        }
    }

    /// Same start point and chord, traversed the other way around.
    fn complement(&self) -> Self {
        Self {
            center: self.center,
            start: self.start,
            sweep: self.sweep - TAU * self.sweep.signum(),
        }
    }

    #[must_use]
    pub fn equals(&self, other: &Arc, tolerance: f64) -> bool {
        points_equal(self.center, other.center, tolerance)
            && points_equal(self.start, other.start, tolerance)
            && nearly_equals(self.sweep, other.sweep, tolerance)
    }

    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Self {
        Self {
            center: rotate_about(self.center, angle, center),
            start: rotate_about(self.start, angle, center),
            sweep: self.sweep,
        }
    }

    /// Reflection flips the traversal direction, so the sweep negates.
    #[must_use]
    pub fn reflect(&self, line: &Line) -> Self {
        Self {
            center: reflect_across(self.center, line.p1, line.p2),
            start: reflect_across(self.start, line.p1, line.p2),
            sweep: -self.sweep,
        }
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self {
            center: scale(self.center, sx, sy),
            start: scale(self.start, sx, sy),
            sweep: self.sweep,
        }
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        Self {
            center: shift(self.center, dx, dy),
            start: shift(self.start, dx, dy),
            sweep: self.sweep,
        }
    }

    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Self {
        Self {
            center: apply_transform(self.center, m),
            start: apply_transform(self.start, m),
            sweep: self.sweep,
        }
    }
}

/// Checks whether an absolute angle falls within an arc's swept range,
/// normalizing the delta in the sweep direction.
fn angle_in_sweep(angle: f64, start_angle: f64, sweep: f64, tolerance: f64) -> bool {
    let mut delta = angle - start_angle;

    if sweep > 0.0 {
        while delta < -tolerance {
            delta += TAU;
        }
        while delta > TAU + tolerance {
            delta -= TAU;
        }
        delta >= -tolerance && delta <= sweep + tolerance
    } else {
        while delta > tolerance {
            delta -= TAU;
        }
        while delta < -TAU - tolerance {
            delta += TAU;
        }
        delta <= tolerance && delta >= sweep - tolerance
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn upper_semicircle() -> Arc {
        // Unit radius, start at (1, 0), CCW half turn through (0, 1).
        Arc::new(Point2::origin(), Point2::new(1.0, 0.0), PI).unwrap()
    }

    #[test]
    fn rejects_zero_radius() {
        assert!(Arc::new(Point2::origin(), Point2::origin(), PI).is_err());
    }

    #[test]
    fn radius_and_start_angle() {
        let a = upper_semicircle();
        assert!((a.radius() - 1.0).abs() < TOLERANCE);
        assert!(a.start_angle().abs() < TOLERANCE);
    }

    #[test]
    fn end_point_of_semicircle() {
        let a = upper_semicircle();
        assert!(points_equal(a.end_point(), Point2::new(-1.0, 0.0), TOLERANCE));
    }

    #[test]
    fn at_midpoint() {
        let a = upper_semicircle();
        assert!(points_equal(a.at(0.5), Point2::new(0.0, 1.0), TOLERANCE));
    }

    #[test]
    fn contains_respects_sweep_range() {
        let a = upper_semicircle();
        assert!(a.contains(Point2::new(0.0, 1.0), TOLERANCE));
        // On the circle, outside the swept range.
        assert!(!a.contains(Point2::new(0.0, -1.0), TOLERANCE));
        // Off the circle entirely.
        assert!(!a.contains(Point2::new(0.5, 0.5), TOLERANCE));
    }

    #[test]
    fn contains_clockwise_sweep() {
        let a = Arc::new(Point2::origin(), Point2::new(1.0, 0.0), -PI).unwrap();
        assert!(a.contains(Point2::new(0.0, -1.0), TOLERANCE));
        assert!(!a.contains(Point2::new(0.0, 1.0), TOLERANCE));
    }

    #[test]
    fn project_clamps_to_sweep() {
        let a = Arc::new(Point2::origin(), Point2::new(1.0, 0.0), FRAC_PI_2).unwrap();
        // Angle within range projects radially.
        let p = a.project(Point2::new(2.0, 2.0));
        let expect = std::f64::consts::FRAC_1_SQRT_2;
        assert!(points_equal(p, Point2::new(expect, expect), TOLERANCE));
    }

    #[test]
    fn minor_major_complement() {
        let a = Arc::new(Point2::origin(), Point2::new(1.0, 0.0), 1.5 * PI).unwrap();
        let minor = a.minor();
        assert!((minor.sweep() + FRAC_PI_2).abs() < TOLERANCE);
        // The complement keeps both endpoints.
        assert!(points_equal(minor.start(), a.start(), TOLERANCE));
        assert!(points_equal(minor.end_point(), a.end_point(), TOLERANCE));
        // An already-minor arc is returned unchanged.
        assert!(minor.minor().equals(&minor, TOLERANCE));
    }

    #[test]
    fn reflect_negates_sweep() {
        let a = upper_semicircle();
        let axis = Line::new(Point2::origin(), Point2::new(1.0, 0.0));
        let r = a.reflect(&axis);
        assert!((r.sweep() + PI).abs() < TOLERANCE);
        assert!(points_equal(r.start(), a.start(), TOLERANCE));
    }
}
