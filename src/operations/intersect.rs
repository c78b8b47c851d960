use crate::geometry::{Circle, Segment, Shape};
use crate::math::point_2d::interpolate;
use crate::math::scalar::{is_between, nearly_equals};
use crate::math::{Point2, Vector2};

/// Computes intersection points between the given shapes.
///
/// With more than two shapes the result is the concatenation of all
/// unordered pairwise intersections, not a common intersection point of
/// every shape simultaneously. Emission order follows the algorithm's
/// natural order; no-intersection cases yield an empty vector, never an
/// error.
#[must_use]
pub fn intersections(shapes: &[Shape], tolerance: f64) -> Vec<Point2> {
    if shapes.len() < 2 {
        return Vec::new();
    }
    if shapes.len() > 2 {
        let mut out = Vec::new();
        for i in 0..shapes.len() {
            for j in (i + 1)..shapes.len() {
                out.extend(pair_intersections(&shapes[i], &shapes[j], tolerance));
            }
        }
        return out;
    }
    pair_intersections(&shapes[0], &shapes[1], tolerance)
}

/// Intersection of exactly two shapes. Polygon-like operands decompose
/// into their edges; everything else dispatches to the primitives.
fn pair_intersections(a: &Shape, b: &Shape, tolerance: f64) -> Vec<Point2> {
    let (a, b) = if !a.is_polygon_like() && b.is_polygon_like() {
        (b, a)
    } else {
        (a, b)
    };

    if a.is_polygon_like() {
        let mut out = Vec::new();
        // A line crossing exactly through a vertex would be missed (or
        // double-counted) by the edge decomposition below, because the
        // segment bound filter excludes edge endpoints. Collect vertex
        // hits directly first.
        if b.is_line_like() {
            if let Some(vertices) = a.vertices() {
                out.extend(vertices.into_iter().filter(|&v| b.contains(v, tolerance)));
            }
        }
        if let Some(edges) = a.edges() {
            for e in edges {
                out.extend(pair_intersections(b, &Shape::Segment(e), tolerance));
            }
        }
        return out;
    }

    primitive_intersections(a, b, tolerance)
}

/// Primitive classification of the closed shape enum. Exhaustive, so a
/// new variant forces a decision here.
enum PrimitiveKind<'a> {
    Linear(Point2, Point2),
    Circular(&'a Circle),
    Unsupported,
}

fn primitive_kind(shape: &Shape) -> PrimitiveKind<'_> {
    match shape {
        Shape::Line(l) => PrimitiveKind::Linear(l.p1, l.p2),
        Shape::Ray(r) => PrimitiveKind::Linear(r.p1, r.p2),
        Shape::Segment(s) => PrimitiveKind::Linear(s.p1, s.p2),
        Shape::Circle(c) => PrimitiveKind::Circular(c),
        // Arcs and angular sectors produce no primitive intersections.
        Shape::Arc(_) | Shape::Angle(_) => PrimitiveKind::Unsupported,
        // Polygon-like shapes are decomposed before reaching this point.
        Shape::Polygon(_) | Shape::Polyline(_) | Shape::Rect(_) => PrimitiveKind::Unsupported,
    }
}

/// Pairwise primitive intersection with the operand bound filter
/// applied afterward.
fn primitive_intersections(a: &Shape, b: &Shape, tolerance: f64) -> Vec<Point2> {
    let raw = match (primitive_kind(a), primitive_kind(b)) {
        (PrimitiveKind::Linear(a1, a2), PrimitiveKind::Linear(b1, b2)) => {
            line_line(a1, a2, b1, b2, tolerance)
        }
        (PrimitiveKind::Linear(a1, a2), PrimitiveKind::Circular(c))
        | (PrimitiveKind::Circular(c), PrimitiveKind::Linear(a1, a2)) => {
            line_circle(a1, a2, c, tolerance)
        }
        (PrimitiveKind::Circular(c1), PrimitiveKind::Circular(c2)) => {
            circle_circle(c1, c2, tolerance)
        }
        (PrimitiveKind::Unsupported, _) | (_, PrimitiveKind::Unsupported) => Vec::new(),
    };

    let filtered = bound_filter(raw, a, tolerance);
    bound_filter(filtered, b, tolerance)
}

/// Restricts unbounded-primitive results to the extent of a bounded
/// operand: segments keep points strictly between their endpoints, rays
/// keep strictly forward points. Other operands pass through.
fn bound_filter(points: Vec<Point2>, shape: &Shape, tolerance: f64) -> Vec<Point2> {
    match shape {
        Shape::Segment(s) => points
            .into_iter()
            .filter(|&p| within_segment_bounds(p, s, tolerance))
            .collect(),
        Shape::Ray(r) => points
            .into_iter()
            .filter(|&p| (p - r.p1).dot(&(r.p2 - r.p1)) > 0.0)
            .collect(),
        _ => points,
    }
}

/// Coordinate-interval check for a point already known to lie on the
/// segment's carrying line. One axis suffices; testing both with "or"
/// lets axis-aligned segments (degenerate on one axis) filter on the
/// meaningful one, while endpoints stay excluded.
fn within_segment_bounds(p: Point2, s: &Segment, tolerance: f64) -> bool {
    is_between(p.x, s.p1.x, s.p2.x, tolerance) || is_between(p.y, s.p1.y, s.p2.y, tolerance)
}

/// First crossing of two segments, if any. Used by the clipping walk.
pub(crate) fn segment_segment(a: &Segment, b: &Segment, tolerance: f64) -> Option<Point2> {
    line_line(a.p1, a.p2, b.p1, b.p2, tolerance)
        .into_iter()
        .find(|&p| within_segment_bounds(p, a, tolerance) && within_segment_bounds(p, b, tolerance))
}

/// Infinite line-line intersection via the parametric determinant
/// solve. Parallel (and collinear-overlapping) lines report nothing:
/// intersections are modeled as finite point sets.
fn line_line(a1: Point2, a2: Point2, b1: Point2, b2: Point2, tolerance: f64) -> Vec<Point2> {
    let d1 = a2 - a1;
    let d2 = b2 - b1;
    let cross = d1.x * d2.y - d1.y * d2.x;
    if nearly_equals(cross, 0.0, tolerance) {
        return Vec::new();
    }
    let dx = b1.x - a1.x;
    let dy = b1.y - a1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    vec![a1 + d1 * t]
}

/// Line-circle intersection in closed discriminant form,
/// `disc = r^2 * |d|^2 - D^2`, with the sgn* convention (`sign(0) = 1`)
/// so horizontal chords resolve correctly.
fn line_circle(a1: Point2, a2: Point2, c: &Circle, tolerance: f64) -> Vec<Point2> {
    let d = a2 - a1;
    let dr2 = d.norm_squared();
    if dr2 < f64::EPSILON {
        // Degenerate line.
        return Vec::new();
    }

    let center = c.center();
    let big_d = (a1.x - center.x) * (a2.y - center.y) - (a2.x - center.x) * (a1.y - center.y);
    let disc = c.radius() * c.radius() * dr2 - big_d * big_d;

    let xa = big_d * d.y / dr2;
    let ya = -big_d * d.x / dr2;
    if nearly_equals(disc, 0.0, tolerance) {
        // Tangent.
        return vec![Point2::new(center.x + xa, center.y + ya)];
    }
    if disc < 0.0 {
        return Vec::new();
    }

    let root = disc.sqrt();
    let sgn = if d.y < 0.0 { -1.0 } else { 1.0 };
    let xb = d.x * sgn * root / dr2;
    let yb = d.y.abs() * root / dr2;
    vec![
        Point2::new(center.x + xa + xb, center.y + ya + yb),
        Point2::new(center.x + xa - xb, center.y + ya - yb),
    ]
}

/// Circle-circle intersection via the radical-line construction.
///
/// Separate, nested and identical circles all report nothing (the
/// identical case cannot express its infinite point set); external
/// tangency reports the single touch point.
fn circle_circle(c1: &Circle, c2: &Circle, tolerance: f64) -> Vec<Point2> {
    let (r1, r2) = (c1.radius(), c2.radius());
    let delta = c2.center() - c1.center();
    let d = delta.norm();

    if d > r1 + r2 {
        return Vec::new();
    }
    if d < (r1 - r2).abs() {
        return Vec::new();
    }
    if nearly_equals(d, 0.0, tolerance) && nearly_equals(r1, r2, tolerance) {
        return Vec::new();
    }
    if nearly_equals(d, r1 + r2, tolerance) {
        return vec![interpolate(c1.center(), c2.center(), r1 / d)];
    }

    // Distance from c1 along the center line to the radical line.
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let dir = delta / d;
    let mid = c1.center() + dir * a;
    let perp = Vector2::new(-dir.y, dir.x);
    vec![mid + perp * h, mid - perp * h]
}
