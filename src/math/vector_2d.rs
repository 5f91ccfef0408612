use super::{Vector2, TOLERANCE};

/// 2D cross product (z-component of the 3D cross product).
///
/// Positive when `b` lies counter-clockwise of `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates a vector 90° counter-clockwise.
#[must_use]
pub fn perpendicular_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns the unit vector in the same direction, or the zero vector when
/// the input has ~zero length.
#[must_use]
pub fn unit_or_zero(v: &Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        return Vector2::zeros();
    }
    v / len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_ccw_positive() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert!((cross_2d(&a, &b) - 1.0).abs() < TOLERANCE);
        assert!((cross_2d(&b, &a) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn cross_parallel_zero() {
        let a = Vector2::new(2.0, 3.0);
        let b = Vector2::new(4.0, 6.0);
        assert!(cross_2d(&a, &b).abs() < TOLERANCE);
    }

    #[test]
    fn perpendicular_rotates_left() {
        let v = perpendicular_ccw(&Vector2::new(5.0, 0.0));
        assert!((v.x).abs() < TOLERANCE);
        assert!((v.y - 5.0).abs() < TOLERANCE);

        let w = perpendicular_ccw(&Vector2::new(0.0, 5.0));
        assert!((w.x + 5.0).abs() < TOLERANCE);
        assert!((w.y).abs() < TOLERANCE);
    }

    #[test]
    fn unit_of_345() {
        let u = unit_or_zero(&Vector2::new(3.0, 4.0));
        assert!((u.x - 0.6).abs() < TOLERANCE);
        assert!((u.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn unit_of_zero_is_zero() {
        let u = unit_or_zero(&Vector2::zeros());
        assert!(u.x.abs() < TOLERANCE && u.y.abs() < TOLERANCE);
    }
}
