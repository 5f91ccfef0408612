use super::Point2;

/// Even-odd (ray-casting) point-in-polygon test.
///
/// Casts a horizontal ray from `point` toward +x and counts edge crossings.
/// Polygons with fewer than 3 vertices contain no points.
#[must_use]
pub fn point_in_polygon(vertices: &[Point2], point: &Point2) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = &vertices[i];
        let vj = &vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
