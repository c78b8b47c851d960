/// Checks whether two scalars are equal within `tolerance`.
///
/// Returns `false` if either operand is NaN.
#[must_use]
pub fn nearly_equals(x: f64, y: f64, tolerance: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return false;
    }
    (x - y).abs() < tolerance
}

/// Checks whether `x` lies strictly between `a` and `b`, with a
/// tolerance-wide band at each boundary excluded.
///
/// The bounds are normalized so the test is order-independent in `a`,
/// `b`. Values within `tolerance` of either boundary report `false`;
/// the intersection engine relies on this to avoid double-counting
/// crossings at shared segment endpoints.
#[must_use]
pub fn is_between(x: f64, a: f64, b: f64, tolerance: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    x > lo + tolerance && x < hi - tolerance
}

/// Linear interpolation between `a` and `b` at parameter `t`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn nearly_equals_basic() {
        assert!(nearly_equals(1.0, 1.0 + 1e-8, TOLERANCE));
        assert!(!nearly_equals(1.0, 1.1, TOLERANCE));
    }

    #[test]
    fn nearly_equals_nan_is_false() {
        assert!(!nearly_equals(f64::NAN, f64::NAN, TOLERANCE));
        assert!(!nearly_equals(f64::NAN, 0.0, TOLERANCE));
        assert!(!nearly_equals(0.0, f64::NAN, TOLERANCE));
    }

    #[test]
    fn nearly_equals_custom_tolerance() {
        assert!(nearly_equals(1.0, 1.05, 0.1));
        assert!(!nearly_equals(1.0, 1.05, 0.01));
    }

    #[test]
    fn is_between_interior() {
        assert!(is_between(0.5, 0.0, 1.0, TOLERANCE));
        // Order of bounds must not matter.
        assert!(is_between(0.5, 1.0, 0.0, TOLERANCE));
    }

    #[test]
    fn is_between_excludes_boundaries() {
        assert!(!is_between(0.0, 0.0, 1.0, TOLERANCE));
        assert!(!is_between(1.0, 0.0, 1.0, TOLERANCE));
        // Within the tolerance band of a boundary.
        assert!(!is_between(1e-7, 0.0, 1.0, TOLERANCE));
    }

    #[test]
    fn is_between_outside() {
        assert!(!is_between(-0.5, 0.0, 1.0, TOLERANCE));
        assert!(!is_between(1.5, 0.0, 1.0, TOLERANCE));
    }

    #[test]
    fn lerp_basic() {
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < TOLERANCE);
        assert!((lerp(2.0, 2.0, 0.9) - 2.0).abs() < TOLERANCE);
    }
}
