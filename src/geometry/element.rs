use crate::math::vector_2d::unit_or_zero;
use crate::math::{intersect_2d, Vector2, TOLERANCE};

use super::point::Point;

/// Parametric bounds policy for one side of an intersection query.
///
/// Selects which values of the line parameter `t` count as lying on the
/// element: a segment is bounded on both ends, a ray only at its start, and
/// a line not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// `t` in `[0, 1]`.
    Segment,
    /// `t >= 0`.
    Ray,
    /// Unrestricted.
    Line,
}

impl Bounds {
    /// Whether a parameter value lies within this policy (with tolerance).
    #[must_use]
    pub fn contains(self, t: f64) -> bool {
        match self {
            Self::Segment => (-TOLERANCE..=1.0 + TOLERANCE).contains(&t),
            Self::Ray => t >= -TOLERANCE,
            Self::Line => true,
        }
    }
}

/// A linear element defined by two points, supporting pairwise intersection.
///
/// All three concrete types share one parametric solve; only the bounds
/// policy differs. Parallel inputs and out-of-range intersections return
/// `None`, never an error.
pub trait LinearElement {
    /// First defining point (`t = 0`).
    fn start(&self) -> &Point;

    /// Second defining point (`t = 1`).
    fn end(&self) -> &Point;

    /// Parametric bounds policy of this element type.
    fn bounds(&self) -> Bounds;

    /// Parametric intersection `(t1, t2)` with another element, such that
    /// `start + t1 * (end - start)` equals the corresponding point on
    /// `other`. `None` when the direction vectors are parallel.
    fn intersection_t(&self, other: &dyn LinearElement) -> Option<(f64, f64)> {
        let d1 = self.start().vector_to(self.end());
        let d2 = other.start().vector_to(other.end());
        intersect_2d::line_intersection_t(
            &self.start().coords(),
            &d1,
            &other.start().coords(),
            &d2,
        )
    }

    /// Intersection point with another element.
    ///
    /// Returns `None` when the elements are parallel, or when the solution
    /// falls outside either element's bounds. `ignore_bounds` bypasses both
    /// range checks and returns the raw line-line intersection; it is an
    /// escape hatch for geometric construction, not for geometric queries.
    fn intersection(&self, other: &dyn LinearElement, ignore_bounds: bool) -> Option<Point> {
        let (t1, t2) = self.intersection_t(other)?;
        if !ignore_bounds && !(self.bounds().contains(t1) && other.bounds().contains(t2)) {
            return None;
        }
        let d1 = self.start().vector_to(self.end());
        Some(self.start().translate(&(d1 * t1)))
    }
}

/// Line segment between two points.
#[derive(Debug, Clone)]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    #[must_use]
    pub fn p1(&self) -> &Point {
        &self.p1
    }

    #[must_use]
    pub fn p2(&self) -> &Point {
        &self.p2
    }
}

impl LinearElement for Segment {
    fn start(&self) -> &Point {
        &self.p1
    }

    fn end(&self) -> &Point {
        &self.p2
    }

    fn bounds(&self) -> Bounds {
        Bounds::Segment
    }
}

/// Ray starting at `p1` and passing through `p2`.
#[derive(Debug, Clone)]
pub struct Ray {
    p1: Point,
    p2: Point,
}

impl Ray {
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Creates a ray from a starting point and a direction vector.
    ///
    /// The direction is normalized internally; a ~zero direction produces a
    /// degenerate ray that intersects nothing (both defining points
    /// coincide, so every solve reports parallel).
    #[must_use]
    pub fn from_point_and_direction(start: Point, direction: &Vector2) -> Self {
        let unit = unit_or_zero(direction);
        let p2 = start.translate(&unit);
        Self { p1: start, p2 }
    }

    /// Unit direction of the ray, or the zero vector when degenerate.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        unit_or_zero(&self.p1.vector_to(&self.p2))
    }

    #[must_use]
    pub fn origin(&self) -> &Point {
        &self.p1
    }
}

impl LinearElement for Ray {
    fn start(&self) -> &Point {
        &self.p1
    }

    fn end(&self) -> &Point {
        &self.p2
    }

    fn bounds(&self) -> Bounds {
        Bounds::Ray
    }
}

/// Infinite line passing through two points.
#[derive(Debug, Clone)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}

impl LinearElement for Line {
    fn start(&self) -> &Point {
        &self.p1
    }

    fn end(&self) -> &Point {
        &self.p2
    }

    fn bounds(&self) -> Bounds {
        Bounds::Line
    }
}
