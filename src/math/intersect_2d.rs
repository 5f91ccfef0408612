use super::vector_2d::cross_2d;
use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t1 * d1` and `p2 + t2 * d2`, returns `(t1, t2)` such
/// that both sides evaluate to the same point, or `None` when the direction
/// vectors are parallel.
#[must_use]
pub fn line_intersection_t(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let denom = cross_2d(d1, d2);
    if denom.abs() < TOLERANCE {
        return None;
    }
    let offset = p2 - p1;
    let t1 = cross_2d(&offset, d2) / denom;
    let t2 = cross_2d(&offset, d1) / denom;
    Some((t1, t2))
}
