use crate::math::point_2d::{distance, interpolate_list};
use crate::math::{Point2, Transform2};

use super::{Angle, Arc, Circle, Line, Polygon, Polyline, Ray, Rect, Segment};

/// Closed tagged union over every shape variant.
///
/// The intersection dispatcher matches exhaustively on this enum, so
/// adding or removing a variant is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Circle(Circle),
    Arc(Arc),
    Polygon(Polygon),
    Polyline(Polyline),
    Rect(Rect),
    Angle(Angle),
}

impl Shape {
    /// Line, Ray and Segment: shapes carried by an infinite line.
    #[must_use]
    pub fn is_line_like(&self) -> bool {
        match self {
            Shape::Line(_) | Shape::Ray(_) | Shape::Segment(_) => true,
            Shape::Circle(_)
            | Shape::Arc(_)
            | Shape::Polygon(_)
            | Shape::Polyline(_)
            | Shape::Rect(_)
            | Shape::Angle(_) => false,
        }
    }

    /// Polygon, Polyline and Rect: anything decomposable into edges.
    #[must_use]
    pub fn is_polygon_like(&self) -> bool {
        match self {
            Shape::Polygon(_) | Shape::Polyline(_) | Shape::Rect(_) => true,
            Shape::Line(_)
            | Shape::Ray(_)
            | Shape::Segment(_)
            | Shape::Circle(_)
            | Shape::Arc(_)
            | Shape::Angle(_) => false,
        }
    }

    /// Vertex list for polygon-like shapes.
    #[must_use]
    pub fn vertices(&self) -> Option<Vec<Point2>> {
        match self {
            Shape::Polygon(p) => Some(p.points().to_vec()),
            Shape::Polyline(p) => Some(p.points().to_vec()),
            Shape::Rect(r) => Some(r.polygon().points().to_vec()),
            _ => None,
        }
    }

    /// Edge decomposition for polygon-like shapes.
    #[must_use]
    pub fn edges(&self) -> Option<Vec<Segment>> {
        match self {
            Shape::Polygon(p) => Some(p.edges()),
            Shape::Polyline(p) => Some(p.edges()),
            Shape::Rect(r) => Some(r.edges()),
            _ => None,
        }
    }

    /// Membership test; each variant keeps its own boundary policy.
    #[must_use]
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        match self {
            Shape::Line(l) => l.contains(p, tolerance),
            Shape::Ray(r) => r.contains(p, tolerance),
            Shape::Segment(s) => s.contains(p, tolerance),
            Shape::Circle(c) => c.contains(p, tolerance),
            Shape::Arc(a) => a.contains(p, tolerance),
            Shape::Polygon(pg) => pg.contains(p, tolerance),
            Shape::Polyline(pl) => pl.contains(p, tolerance),
            Shape::Rect(r) => r.contains(p, tolerance),
            Shape::Angle(a) => a.contains(p, tolerance),
        }
    }

    /// Nearest point on the shape to `p`.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        match self {
            Shape::Line(l) => l.project(p),
            Shape::Ray(r) => r.project(p),
            Shape::Segment(s) => s.project(p),
            Shape::Circle(c) => c.project(p),
            Shape::Arc(a) => a.project(p),
            Shape::Polygon(pg) => pg.project(p),
            Shape::Polyline(pl) => pl.project(p),
            Shape::Rect(r) => r.project(p),
            Shape::Angle(a) => {
                // Nearest point on either arm.
                let on_ab = Segment::new(a.b, a.a).project(p);
                let on_cb = Segment::new(a.b, a.c).project(p);
                if distance(p, on_ab) <= distance(p, on_cb) {
                    on_ab
                } else {
                    on_cb
                }
            }
        }
    }

    /// Parametrized point along the shape for `t` in `[0, 1]`.
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        match self {
            Shape::Line(l) => l.at(t),
            Shape::Ray(r) => r.at(t),
            Shape::Segment(s) => s.at(t),
            Shape::Circle(c) => c.at(t),
            Shape::Arc(a) => a.at(t),
            Shape::Polygon(pg) => pg.at(t),
            Shape::Polyline(pl) => pl.at(t),
            Shape::Rect(r) => r.at(t),
            Shape::Angle(a) => interpolate_list(&[a.a, a.b, a.c], t),
        }
    }

    #[must_use]
    pub fn rotate(&self, angle: f64, center: Point2) -> Shape {
        match self {
            Shape::Line(l) => Shape::Line(l.rotate(angle, center)),
            Shape::Ray(r) => Shape::Ray(r.rotate(angle, center)),
            Shape::Segment(s) => Shape::Segment(s.rotate(angle, center)),
            Shape::Circle(c) => Shape::Circle(c.rotate(angle, center)),
            Shape::Arc(a) => Shape::Arc(a.rotate(angle, center)),
            Shape::Polygon(pg) => Shape::Polygon(pg.rotate(angle, center)),
            Shape::Polyline(pl) => Shape::Polyline(pl.rotate(angle, center)),
            // Rotation breaks axis alignment.
            Shape::Rect(r) => Shape::Polygon(r.rotate(angle, center)),
            Shape::Angle(a) => Shape::Angle(a.rotate(angle, center)),
        }
    }

    #[must_use]
    pub fn reflect(&self, line: &Line) -> Shape {
        match self {
            Shape::Line(l) => Shape::Line(l.reflect(line)),
            Shape::Ray(r) => Shape::Ray(r.reflect(line)),
            Shape::Segment(s) => Shape::Segment(s.reflect(line)),
            Shape::Circle(c) => Shape::Circle(c.reflect(line)),
            Shape::Arc(a) => Shape::Arc(a.reflect(line)),
            Shape::Polygon(pg) => Shape::Polygon(pg.reflect(line)),
            Shape::Polyline(pl) => Shape::Polyline(pl.reflect(line)),
            Shape::Rect(r) => Shape::Polygon(r.reflect(line)),
            Shape::Angle(a) => Shape::Angle(a.reflect(line)),
        }
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Shape {
        match self {
            Shape::Line(l) => Shape::Line(l.scale(sx, sy)),
            Shape::Ray(r) => Shape::Ray(r.scale(sx, sy)),
            Shape::Segment(s) => Shape::Segment(s.scale(sx, sy)),
            Shape::Circle(c) => Shape::Circle(c.scale(sx, sy)),
            Shape::Arc(a) => Shape::Arc(a.scale(sx, sy)),
            Shape::Polygon(pg) => Shape::Polygon(pg.scale(sx, sy)),
            Shape::Polyline(pl) => Shape::Polyline(pl.scale(sx, sy)),
            Shape::Rect(r) => Shape::Rect(r.scale(sx, sy)),
            Shape::Angle(a) => Shape::Angle(a.scale(sx, sy)),
        }
    }

    #[must_use]
    pub fn shift(&self, dx: f64, dy: f64) -> Shape {
        match self {
            Shape::Line(l) => Shape::Line(l.shift(dx, dy)),
            Shape::Ray(r) => Shape::Ray(r.shift(dx, dy)),
            Shape::Segment(s) => Shape::Segment(s.shift(dx, dy)),
            Shape::Circle(c) => Shape::Circle(c.shift(dx, dy)),
            Shape::Arc(a) => Shape::Arc(a.shift(dx, dy)),
            Shape::Polygon(pg) => Shape::Polygon(pg.shift(dx, dy)),
            Shape::Polyline(pl) => Shape::Polyline(pl.shift(dx, dy)),
            Shape::Rect(r) => Shape::Rect(r.shift(dx, dy)),
            Shape::Angle(a) => Shape::Angle(a.shift(dx, dy)),
        }
    }

    #[must_use]
    pub fn transform(&self, m: &Transform2) -> Shape {
        match self {
            Shape::Line(l) => Shape::Line(l.transform(m)),
            Shape::Ray(r) => Shape::Ray(r.transform(m)),
            Shape::Segment(s) => Shape::Segment(s.transform(m)),
            Shape::Circle(c) => Shape::Circle(c.transform(m)),
            Shape::Arc(a) => Shape::Arc(a.transform(m)),
            Shape::Polygon(pg) => Shape::Polygon(pg.transform(m)),
            Shape::Polyline(pl) => Shape::Polyline(pl.transform(m)),
            Shape::Rect(r) => Shape::Polygon(r.transform(m)),
            Shape::Angle(a) => Shape::Angle(a.transform(m)),
        }
    }

    /// Structural/geometric equality between same-variant shapes.
    #[must_use]
    pub fn equals(&self, other: &Shape, tolerance: f64) -> bool {
        match (self, other) {
            (Shape::Line(a), Shape::Line(b)) => a.equals(b, tolerance),
            (Shape::Ray(a), Shape::Ray(b)) => a.equals(b, tolerance),
            (Shape::Segment(a), Shape::Segment(b)) => a.equals(b, tolerance),
            (Shape::Circle(a), Shape::Circle(b)) => a.equals(b, tolerance),
            (Shape::Arc(a), Shape::Arc(b)) => a.equals(b, tolerance),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.equals(b, tolerance),
            (Shape::Polyline(a), Shape::Polyline(b)) => a.equals(b, tolerance),
            (Shape::Rect(a), Shape::Rect(b)) => a.equals(b, tolerance),
            (Shape::Angle(a), Shape::Angle(b)) => a.equals(b, tolerance),
            _ => false,
        }
    }
}

impl From<Line> for Shape {
    fn from(v: Line) -> Self {
        Shape::Line(v)
    }
}

impl From<Ray> for Shape {
    fn from(v: Ray) -> Self {
        Shape::Ray(v)
    }
}

impl From<Segment> for Shape {
    fn from(v: Segment) -> Self {
        Shape::Segment(v)
    }
}

impl From<Circle> for Shape {
    fn from(v: Circle) -> Self {
        Shape::Circle(v)
    }
}

impl From<Arc> for Shape {
    fn from(v: Arc) -> Self {
        Shape::Arc(v)
    }
}

impl From<Polygon> for Shape {
    fn from(v: Polygon) -> Self {
        Shape::Polygon(v)
    }
}

impl From<Polyline> for Shape {
    fn from(v: Polyline) -> Self {
        Shape::Polyline(v)
    }
}

impl From<Rect> for Shape {
    fn from(v: Rect) -> Self {
        Shape::Rect(v)
    }
}

impl From<Angle> for Shape {
    fn from(v: Angle) -> Self {
        Shape::Angle(v)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::point_2d::points_equal;
    use crate::math::TOLERANCE;

    #[test]
    fn classification_predicates() {
        let seg: Shape = Segment::new(Point2::origin(), Point2::new(1.0, 0.0)).into();
        let poly: Shape = Polygon::regular(3, 1.0).unwrap().into();
        let circ: Shape = Circle::new(Point2::origin(), 1.0).unwrap().into();
        assert!(seg.is_line_like() && !seg.is_polygon_like());
        assert!(poly.is_polygon_like() && !poly.is_line_like());
        assert!(!circ.is_line_like() && !circ.is_polygon_like());
    }

    #[test]
    fn rect_vertices_and_edges_via_polygon() {
        let r: Shape = Rect::new(Point2::origin(), 2.0, 1.0).into();
        assert_eq!(r.vertices().unwrap().len(), 4);
        assert_eq!(r.edges().unwrap().len(), 4);
    }

    #[test]
    fn rect_rotation_escapes_to_polygon() {
        let r: Shape = Rect::new(Point2::origin(), 2.0, 1.0).into();
        let rotated = r.rotate(0.3, Point2::origin());
        assert!(matches!(rotated, Shape::Polygon(_)));
        // Shift keeps the variant.
        assert!(matches!(r.shift(1.0, 1.0), Shape::Rect(_)));
    }

    #[test]
    fn dispatch_contains_and_at() {
        let c: Shape = Circle::new(Point2::origin(), 1.0).unwrap().into();
        assert!(c.contains(Point2::new(0.5, 0.0), TOLERANCE));
        assert!(points_equal(c.at(0.25), Point2::new(0.0, 1.0), TOLERANCE));
    }

    #[test]
    fn equals_is_variant_strict() {
        let seg: Shape = Segment::new(Point2::origin(), Point2::new(1.0, 1.0)).into();
        let line: Shape = Line::new(Point2::origin(), Point2::new(1.0, 1.0)).into();
        assert!(!seg.equals(&line, TOLERANCE));
        assert!(seg.equals(&seg.clone(), TOLERANCE));
    }
}
