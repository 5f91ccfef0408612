use crate::error::Result;
use crate::math::vector_2d::perpendicular_ccw;
use crate::math::TOLERANCE;

use super::angle::Angle;
use super::beam::Beam;
use super::element::{LinearElement, Ray, Segment};
use super::oriented_segment::OrientedSegment;
use super::point::Point;

/// Canonical ordering of the four facet edges.
///
/// Each edge runs between two of the facet's vertices; the names describe
/// which side of the primary/incenter axis the edge lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeType {
    /// Primary vertex to port lateral.
    MajorStarboard = 0,
    /// Port lateral to incenter.
    MinorStarboard = 1,
    /// Incenter to starboard lateral.
    MinorPort = 2,
    /// Starboard lateral to primary vertex.
    MajorPort = 3,
}

impl EdgeType {
    /// All edges in canonical slicing order.
    pub const ALL: [Self; 4] = [
        Self::MajorStarboard,
        Self::MinorStarboard,
        Self::MinorPort,
        Self::MajorPort,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the three quadrilaterals a triangle is subdivided into.
///
/// Vertices are held in fixed role order `(primary, port lateral,
/// incenter, starboard lateral)`. Each of the four edges is sliced into
/// beams at construction time; the facet is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Facet {
    vertices: [Point; 4],
    color: String,
    label: String,
    centroid: Point,
    face_index: usize,
    facet_index: usize,
    beams: [Vec<Beam>; 4],
}

impl Facet {
    /// Builds a facet and slices all four edges into beams.
    ///
    /// `beam_counts` maps to the edges in canonical order. The parity
    /// accumulator starts at 0 and flips after every beam across all four
    /// edges; it is owned per facet, never shared.
    ///
    /// # Errors
    ///
    /// Propagates beam construction errors (the slicer itself always
    /// supplies two extents, so these indicate an internal inconsistency).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        primary: Point,
        port_lateral: Point,
        incenter: Point,
        starboard_lateral: Point,
        color: String,
        label: String,
        beam_counts: [usize; 4],
        face_index: usize,
        facet_index: usize,
    ) -> Result<Self> {
        let vertices = [primary, port_lateral, incenter, starboard_lateral];
        let centroid = centroid_of(&vertices);
        let beams = slice_all_edges(&vertices, beam_counts, face_index, facet_index)?;

        Ok(Self {
            vertices,
            color,
            label,
            centroid,
            face_index,
            facet_index,
            beams,
        })
    }

    /// Vertices in role order `(primary, port, incenter, starboard)`.
    #[must_use]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    #[must_use]
    pub fn primary_vertex(&self) -> &Point {
        &self.vertices[0]
    }

    #[must_use]
    pub fn incenter(&self) -> &Point {
        &self.vertices[2]
    }

    /// The port and starboard lateral vertices (edge midpoints).
    #[must_use]
    pub fn lateral_vertices(&self) -> [&Point; 2] {
        [&self.vertices[1], &self.vertices[3]]
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn centroid(&self) -> &Point {
        &self.centroid
    }

    #[must_use]
    pub fn face_index(&self) -> usize {
        self.face_index
    }

    #[must_use]
    pub fn facet_index(&self) -> usize {
        self.facet_index
    }

    /// Per-edge beam lists in canonical edge order.
    #[must_use]
    pub fn beams(&self) -> &[Vec<Beam>; 4] {
        &self.beams
    }

    /// Beams for one edge.
    #[must_use]
    pub fn beams_for(&self, edge: EdgeType) -> &[Beam] {
        &self.beams[edge.index()]
    }

    /// Endpoints of an edge in canonical direction.
    #[must_use]
    pub fn edge_segment(&self, edge: EdgeType) -> Segment {
        let (from, to) = match edge {
            EdgeType::MajorStarboard => (0, 1),
            EdgeType::MinorStarboard => (1, 2),
            EdgeType::MinorPort => (2, 3),
            EdgeType::MajorPort => (3, 0),
        };
        Segment::new(self.vertices[from].clone(), self.vertices[to].clone())
    }
}

fn centroid_of(vertices: &[Point; 4]) -> Point {
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x(), sy + v.y()));
    Point::new(sx / 4.0, sy / 4.0)
}

/// Slices every edge of a facet, threading the parity accumulator through
/// the edges in canonical order.
fn slice_all_edges(
    vertices: &[Point; 4],
    beam_counts: [usize; 4],
    face_index: usize,
    facet_index: usize,
) -> Result<[Vec<Beam>; 4]> {
    let [primary, port_lateral, incenter, starboard_lateral] = vertices;

    let axis = Segment::new(primary.clone(), incenter.clone());

    // One bisector per lateral vertex, shared by both of its adjacent edges.
    let port_bisector =
        Angle::new(port_lateral.clone(), primary.clone(), incenter.clone()).bisector();
    let starboard_bisector =
        Angle::new(starboard_lateral.clone(), incenter.clone(), primary.clone()).bisector();

    let edge_endpoints: [(&Point, &Point); 4] = [
        (primary, port_lateral),
        (port_lateral, incenter),
        (incenter, starboard_lateral),
        (starboard_lateral, primary),
    ];
    let edge_bisectors = [
        &starboard_bisector,
        &starboard_bisector,
        &port_bisector,
        &port_bisector,
    ];

    let mut parity: u8 = 0;
    let mut beams: [Vec<Beam>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    for edge in EdgeType::ALL {
        let (from, to) = edge_endpoints[edge.index()];
        beams[edge.index()] = slice_edge(
            from,
            to,
            edge.index(),
            beam_counts[edge.index()],
            &axis,
            edge_bisectors[edge.index()],
            &mut parity,
            face_index,
            facet_index,
        )?;
    }
    Ok(beams)
}

/// Slices one edge into `count` beams.
///
/// The first beam's forward rays are intersected with the axis and the
/// lateral bisector once; every later beam reuses the previous far
/// intersections as its near values and advances by a constant stride, so
/// the per-beam cost is O(1) after the first solve.
///
/// Degenerate edges, and edges whose forward direction is parallel to the
/// axis or bisector, produce no beams.
#[allow(clippy::too_many_arguments, clippy::cast_precision_loss)]
fn slice_edge(
    from: &Point,
    to: &Point,
    edge_index: usize,
    count: usize,
    axis: &Segment,
    bisector: &Ray,
    parity: &mut u8,
    face_index: usize,
    facet_index: usize,
) -> Result<Vec<Beam>> {
    let length = from.distance(to);
    if length < TOLERANCE || count == 0 {
        return Ok(Vec::new());
    }

    let edge_unit = from.vector_to(to) / length;
    let beam_width = length / count as f64;
    let starboard_vector = edge_unit * beam_width;
    let forward_unit = perpendicular_ccw(&edge_unit);

    let near_ray = Ray::from_point_and_direction(from.clone(), &forward_unit);
    let far_ray = Ray::from_point_and_direction(from.translate(&starboard_vector), &forward_unit);

    // Raw line solves: the extents extend past the axis/bisector endpoints.
    let seed = (
        near_ray.intersection(axis, true),
        far_ray.intersection(axis, true),
        near_ray.intersection(bisector, true),
        far_ray.intersection(bisector, true),
    );
    let (Some(near_axis), Some(far_axis), Some(near_bis), Some(far_bis)) = seed else {
        return Ok(Vec::new());
    };

    let axis_stride = near_axis.vector_to(&far_axis);
    let bisector_stride = near_bis.vector_to(&far_bis);

    let mut beams = Vec::with_capacity(count);
    let mut axis_near = near_axis;
    let mut bis_near = near_bis;
    for beam_index in 0..count {
        let axis_far = axis_near.translate(&axis_stride);
        let bis_far = bis_near.translate(&bisector_stride);

        let anchor = from.translate(&(edge_unit * ((beam_index as f64 + 0.5) * beam_width)));
        let extents = vec![
            OrientedSegment::new(axis_near, axis_far.clone()),
            OrientedSegment::new(bis_near, bis_far.clone()),
        ];

        beams.push(Beam::new(
            extents,
            beam_index,
            edge_index,
            anchor,
            starboard_vector,
            *parity,
            face_index,
            facet_index,
        )?);
        *parity ^= 1;

        axis_near = axis_far;
        bis_near = bis_far;
    }
    Ok(beams)
}
