use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::point_2d::{
    apply_transform, average, distance, from_polar, interpolate_list, points_equal, reflect_across,
    rotate_about, scale, shift,
};
use crate::math::{Point2, Transform2, TOLERANCE};

use super::{Line, Segment};

/// A closed polygon over an ordered vertex sequence. Edges connect
/// consecutive vertices and wrap around from the last back to the first;
/// vertex order defines the winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex sequence.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a regular `n`-gon centered at the origin.
    ///
    /// The first vertex sits just left of the top of the circumscribed
    /// circle so that one edge is horizontal at the top.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 3`.
    #[allow(clippy::cast_precision_loss)]
    pub fn regular(n: usize, radius: f64) -> Result<Self> {
        if n < 3 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "n",
                value: n as f64,
                min: 3.0,
                max: f64::INFINITY,
            });
        }
        let da = TAU / n as f64;
        let a0 = std::f64::consts::FRAC_PI_2 - da / 2.0;
        let points = (0..n)
            .map(|i| from_polar(a0 + da * i as f64, radius))
            .collect();
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Signed area by the shoelace formula. The sign encodes winding:
    /// positive for counter-clockwise vertex order in standard math
    /// coordinates (which reads as clockwise on a y-down screen).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += self.points[i].x * self.points[j].y - self.points[j].x * self.points[i].y;
        }
        sum * 0.5
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid; degenerate (zero-area) polygons fall back to the
    /// vertex average.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let a = self.signed_area();
        if a.abs() < TOLERANCE {
            return average(&self.points);
        }
        let n = self.points.len();
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let cross = self.points[i].x * self.points[j].y - self.points[j].x * self.points[i].y;
            cx += (self.points[i].x + self.points[j].x) * cross;
            cy += (self.points[i].y + self.points[j].y) * cross;
        }
        Point2::new(cx / (6.0 * a), cy / (6.0 * a))
    }

    /// A copy with canonical (non-negative signed area) winding. The
    /// original is never mutated.
    #[must_use]
    pub fn oriented(&self) -> Self {
        if self.signed_area() >= 0.0 {
            self.clone()
        } else {
            Self {
                points: self.points.iter().rev().copied().collect(),
            }
        }
    }

    /// Edge list, derived on demand, including the wrap-around edge.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Ray-casting point-in-polygon test with a horizontal scan.
    ///
    /// Points exactly on an edge or coincident with a vertex report
    /// `false`; the clipping walk relies on this boundary exclusion.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        let mut inside = false;
        for e in self.edges() {
            if points_equal(e.p1, p, tolerance) || e.contains(p, tolerance) {
                return false;
            }
            let above1 = e.p1.y > p.y;
            let above2 = e.p2.y > p.y;
            if above1 != above2 {
                let cross_x = (e.p2.x - e.p1.x) * (p.y - e.p1.y) / (e.p2.y - e.p1.y) + e.p1.x;
                if p.x < cross_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Point at fraction `t` along the closed boundary (piecewise-linear,
    /// with the loop-closing edge included).
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        let mut closed = self.points.clone();
        if let Some(&first) = self.points.first() {
            closed.push(first);
        }
        interpolate_list(&closed, t)
    }

    /// Nearest boundary point to `p`.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        let mut best = self.points.first().copied().unwrap_or_else(Point2::origin);
        let mut best_dist = f64::INFINITY;
        for e in self.edges() {
            let q = e.project(p);
            let d = distance(p, q);
            if d < best_dist {
                best_dist = d;
                best = q;
            }
        }
        best
    }

    /// Geometric equality: same vertex cycle, allowing a rotated start
    /// and either traversal direction.
    #[must_use]
    pub fn equals(&self, other: &Polygon, tolerance: f64) -> bool {
        let n = self.points.len();
        if n != other.points.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        let reversed: Vec<Point2> = other.points.iter().rev().copied().collect();
        cyclic_match(&self.points, &other.points, tolerance)
            || cyclic_match(&self.points, &reversed, tolerance)
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
            points: self.points.iter().map(|&p| f(p)).collect(),
        }
    }
}

/// An open polyline: consecutive edges only, no wrap-around.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Edge list between consecutive vertices (no closing edge).
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect()
    }

    /// Total path length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| distance(w[0], w[1])).sum()
    }

    /// Whether `p` lies on any edge (with the segment endpoint-exclusion
    /// policy applied per edge).
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        self.edges().iter().any(|e| e.contains(p, tolerance))
    }

    /// Point at fraction `t` along the path.
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        interpolate_list(&self.points, t)
    }

    /// Nearest path point to `p`.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        let mut best = self.points.first().copied().unwrap_or_else(Point2::origin);
        let mut best_dist = f64::INFINITY;
        for e in self.edges() {
            let q = e.project(p);
            let d = distance(p, q);
            if d < best_dist {
                best_dist = d;
                best = q;
            }
        }
        best
    }

    /// Pointwise, order-sensitive equality.
    #[must_use]
    pub fn equals(&self, other: &Polyline, tolerance: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(&a, &b)| points_equal(a, b, tolerance))
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
            points: self.points.iter().map(|&p| f(p)).collect(),
        }
    }
}

/// Checks whether `b` equals `a` under some cyclic rotation of its start.
fn cyclic_match(a: &[Point2], b: &[Point2], tolerance: f64) -> bool {
    let n = a.len();
    (0..n).any(|offset| {
        (0..n).all(|i| points_equal(a[i], b[(i + offset) % n], tolerance))
    })
}
