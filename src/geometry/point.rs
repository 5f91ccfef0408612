use std::hash::{Hash, Hasher};

use crate::math::{Point2, Vector2};

/// A 2D point with an optional opaque color tag.
///
/// The polar form `(r, theta)` is computed once at construction. The color
/// tag is supplied by the external configuration loader and is never
/// interpreted by the geometry engine. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Point {
    coords: Point2,
    color: Option<String>,
    polar: (f64, f64),
}

impl Point {
    /// Creates an untagged point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Point2::new(x, y),
            color: None,
            polar: polar_of(x, y),
        }
    }

    /// Creates a point carrying an opaque color tag.
    #[must_use]
    pub fn with_color(x: f64, y: f64, color: impl Into<String>) -> Self {
        Self {
            coords: Point2::new(x, y),
            color: Some(color.into()),
            polar: polar_of(x, y),
        }
    }

    /// Creates an untagged point from polar coordinates.
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Raw coordinates as a math-layer point.
    #[must_use]
    pub fn coords(&self) -> Point2 {
        self.coords
    }

    /// Polar form `(r, theta)` relative to the origin, cached at construction.
    #[must_use]
    pub fn polar(&self) -> (f64, f64) {
        self.polar
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (other.coords - self.coords).norm()
    }

    /// Midpoint between this point and another. The result carries no color.
    #[must_use]
    pub fn midpoint_to(&self, other: &Self) -> Self {
        Self::new(
            (self.coords.x + other.coords.x) / 2.0,
            (self.coords.y + other.coords.y) / 2.0,
        )
    }

    /// Vector from this point to another.
    #[must_use]
    pub fn vector_to(&self, other: &Self) -> Vector2 {
        other.coords - self.coords
    }

    /// Point displaced by a vector. The result carries no color.
    #[must_use]
    pub fn translate(&self, v: &Vector2) -> Self {
        Self::new(self.coords.x + v.x, self.coords.y + v.y)
    }
}

fn polar_of(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

// Equality and hashing compare the coordinate pair only; the color tag is
// presentation data and does not participate in identity.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords.x == other.coords.x && self.coords.y == other.coords.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.x.to_bits().hash(state);
        self.coords.y.to_bits().hash(state);
    }
}
