use crate::error::Result;
use crate::math::vector_2d::cross_2d;
use crate::math::TOLERANCE;

use super::facet::Facet;
use super::point::Point;

/// Triangle orientation relative to the external apex point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Pointing toward the apex: exactly one vertex is strictly closer to
    /// the apex than the incenter is.
    Apexward,
    /// Pointing away from the apex (any other closer-vertex count,
    /// including the ambiguous zero-closer case, which is folded in here).
    Nadirward,
}

/// A net triangle subdivided into three facets around its incenter.
///
/// All derived geometry (incenter, midpoints, orientation, facets and
/// their beams) is computed eagerly at construction; the triangle is
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Point; 3],
    triangle_id: usize,
    apex: Point,
    incenter: Point,
    edge_midpoints: [Point; 3],
    orientation: Orientation,
    facets: Vec<Facet>,
}

impl Triangle {
    /// Builds a triangle and its three facets.
    ///
    /// `apex` is the shared pentagon apex used for orientation detection;
    /// `beam_counts` is forwarded to every facet in canonical edge order.
    ///
    /// # Errors
    ///
    /// Propagates facet/beam construction errors.
    pub fn new(
        p1: Point,
        p2: Point,
        p3: Point,
        triangle_id: usize,
        apex: Point,
        beam_counts: [usize; 4],
    ) -> Result<Self> {
        let vertices = [p1, p2, p3];
        let incenter = incenter_of(&vertices);
        let edge_midpoints = [
            vertices[0].midpoint_to(&vertices[1]),
            vertices[1].midpoint_to(&vertices[2]),
            vertices[2].midpoint_to(&vertices[0]),
        ];
        let orientation = orientation_of(&vertices, &incenter, &apex);
        let facets = create_facets(
            &vertices,
            &edge_midpoints,
            &incenter,
            &apex,
            orientation,
            triangle_id,
            beam_counts,
        )?;

        Ok(Self {
            vertices,
            triangle_id,
            apex,
            incenter,
            edge_midpoints,
            orientation,
            facets,
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    #[must_use]
    pub fn triangle_id(&self) -> usize {
        self.triangle_id
    }

    #[must_use]
    pub fn apex(&self) -> &Point {
        &self.apex
    }

    #[must_use]
    pub fn incenter(&self) -> &Point {
        &self.incenter
    }

    /// Midpoints of edges `(v1,v2)`, `(v2,v3)`, `(v3,v1)` in that order.
    #[must_use]
    pub fn edge_midpoints(&self) -> &[Point; 3] {
        &self.edge_midpoints
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The three facets in counterclockwise walk order from A/D.
    #[must_use]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }
}

/// Incenter as the side-length-weighted vertex average:
/// `I = (a*A + b*B + c*C) / (a + b + c)` with `a, b, c` the side lengths
/// opposite `A, B, C`. A ~zero perimeter falls back to the centroid.
fn incenter_of(vertices: &[Point; 3]) -> Point {
    let [p1, p2, p3] = vertices;
    let a = p2.distance(p3);
    let b = p1.distance(p3);
    let c = p1.distance(p2);

    let perimeter = a + b + c;
    if perimeter < TOLERANCE {
        return Point::new(
            (p1.x() + p2.x() + p3.x()) / 3.0,
            (p1.y() + p2.y() + p3.y()) / 3.0,
        );
    }

    Point::new(
        (a * p1.x() + b * p2.x() + c * p3.x()) / perimeter,
        (a * p1.y() + b * p2.y() + c * p3.y()) / perimeter,
    )
}

/// Counts vertices strictly closer to the apex than the incenter is.
/// Exactly one means the triangle points at the apex; every other count
/// (including zero) is classified nadirward.
fn orientation_of(vertices: &[Point; 3], incenter: &Point, apex: &Point) -> Orientation {
    let incenter_to_apex = incenter.distance(apex);
    let closer = vertices
        .iter()
        .filter(|v| v.distance(apex) < incenter_to_apex)
        .count();

    if closer == 1 {
        Orientation::Apexward
    } else {
        Orientation::Nadirward
    }
}

/// Vertex indices in counterclockwise walk order starting from
/// `start_index`.
///
/// Coordinates are screen-space (y grows downward), so a positive cross
/// product of the two edge vectors means the natural index walk runs
/// clockwise on screen and the trailing pair must be swapped.
fn counterclockwise_order(vertices: &[Point; 3], start_index: usize) -> [usize; 3] {
    let indices = [start_index, (start_index + 1) % 3, (start_index + 2) % 3];

    let e1 = vertices[indices[0]].vector_to(&vertices[indices[1]]);
    let e2 = vertices[indices[0]].vector_to(&vertices[indices[2]]);

    if cross_2d(&e1, &e2) > 0.0 {
        [indices[0], indices[2], indices[1]]
    } else {
        indices
    }
}

fn create_facets(
    vertices: &[Point; 3],
    edge_midpoints: &[Point; 3],
    incenter: &Point,
    apex: &Point,
    orientation: Orientation,
    triangle_id: usize,
    beam_counts: [usize; 4],
) -> Result<Vec<Facet>> {
    // Facet A starts at the vertex nearest the apex; facet D at the one
    // farthest from it. Ties resolve to the first vertex in input order.
    let start_index = match orientation {
        Orientation::Apexward => argmin_distance(vertices, apex),
        Orientation::Nadirward => argmax_distance(vertices, apex),
    };
    let ordered = counterclockwise_order(vertices, start_index);

    let letters = match orientation {
        Orientation::Apexward => ['A', 'B', 'C'],
        Orientation::Nadirward => ['D', 'E', 'F'],
    };

    let mut facets = Vec::with_capacity(3);
    for (facet_index, (&vertex_index, letter)) in ordered.iter().zip(letters).enumerate() {
        let primary = &vertices[vertex_index];
        // Lateral midpoints: the edge leaving this vertex and the edge
        // arriving at it.
        let port_lateral = &edge_midpoints[vertex_index];
        let starboard_lateral = &edge_midpoints[(vertex_index + 2) % 3];

        let color = primary.color().unwrap_or("black").to_owned();
        let label = format!("{triangle_id}{letter}");

        facets.push(Facet::new(
            primary.clone(),
            port_lateral.clone(),
            incenter.clone(),
            starboard_lateral.clone(),
            color,
            label,
            beam_counts,
            triangle_id,
            facet_index,
        )?);
    }
    Ok(facets)
}

fn argmin_distance(vertices: &[Point; 3], apex: &Point) -> usize {
    let mut best = 0;
    for i in 1..3 {
        if vertices[i].distance(apex) < vertices[best].distance(apex) {
            best = i;
        }
    }
    best
}

fn argmax_distance(vertices: &[Point; 3], apex: &Point) -> usize {
    let mut best = 0;
    for i in 1..3 {
        if vertices[i].distance(apex) > vertices[best].distance(apex) {
            best = i;
        }
    }
    best
}
