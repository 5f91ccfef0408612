use crate::math::{polygon_2d, Point2};

use super::point::Point;

/// An ordered vertex loop with even-odd point containment.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Even-odd containment test. Empty polygons contain no points.
    #[must_use]
    pub fn is_inside(&self, point: &Point) -> bool {
        let coords: Vec<Point2> = self.vertices.iter().map(Point::coords).collect();
        polygon_2d::point_in_polygon(&coords, &point.coords())
    }
}
