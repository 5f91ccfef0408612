use crate::math::vector_2d::{perpendicular_ccw, unit_or_zero};
use crate::math::{Vector2, TOLERANCE};

use super::element::Ray;
use super::point::Point;

/// An angle defined by an apex and two arm points.
#[derive(Debug, Clone)]
pub struct Angle {
    apex: Point,
    arm1: Point,
    arm2: Point,
}

impl Angle {
    #[must_use]
    pub fn new(apex: Point, arm1: Point, arm2: Point) -> Self {
        Self { apex, arm1, arm2 }
    }

    #[must_use]
    pub fn apex(&self) -> &Point {
        &self.apex
    }

    /// The angle bisector as a ray from the apex.
    ///
    /// The bisector direction is the sum of the two unit arm vectors.
    /// A zero-length arm falls back to an arbitrary `(1, 0)` direction;
    /// exactly-opposite arms fall back to the perpendicular of the first
    /// arm. Never fails.
    #[must_use]
    pub fn bisector(&self) -> Ray {
        let v1 = self.apex.vector_to(&self.arm1);
        let v2 = self.apex.vector_to(&self.arm2);

        if v1.norm() < TOLERANCE || v2.norm() < TOLERANCE {
            return Ray::from_point_and_direction(self.apex.clone(), &Vector2::new(1.0, 0.0));
        }

        let unit1 = unit_or_zero(&v1);
        let unit2 = unit_or_zero(&v2);
        let sum = unit1 + unit2;

        if sum.norm() < TOLERANCE {
            return Ray::from_point_and_direction(self.apex.clone(), &perpendicular_ccw(&unit1));
        }

        Ray::from_point_and_direction(self.apex.clone(), &sum)
    }
}
