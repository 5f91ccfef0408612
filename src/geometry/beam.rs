use crate::error::{ConstructionError, Result};
use crate::math::vector_2d::perpendicular_ccw;
use crate::math::Vector2;

use super::element::LinearElement;
use super::oriented_segment::OrientedSegment;
use super::point::Point;
use super::polygon::Polygon;

/// Stable beam identity: `(face, facet, edge, position within edge)`.
///
/// Unique across an entire net and stable across rebuilds from the same
/// input; downstream color lookups and hardware address maps key on it.
pub type BeamId = (usize, usize, usize, usize);

/// One width-wise slice of a facet edge, the smallest addressable unit.
///
/// A beam owns its baseline (anchor plus one beam-width starboard vector),
/// one or two forward extents, and the polygon derived from them. Fully
/// built at construction, immutable afterwards.
#[derive(Debug, Clone)]
pub struct Beam {
    extents: Vec<OrientedSegment>,
    beam_index: usize,
    edge_index: usize,
    anchor: Point,
    starboard_vector: Vector2,
    forward_vector: Vector2,
    parity: u8,
    face_index: usize,
    facet_index: usize,
    polygon: Polygon,
}

impl Beam {
    /// Builds a beam from its extents and baseline description.
    ///
    /// `starboard_vector` spans one beam width along the parent edge; the
    /// forward vector is its counter-clockwise perpendicular, pointing into
    /// the facet interior.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UnsupportedExtentCount`] when given
    /// zero or more than two extents.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        extents: Vec<OrientedSegment>,
        beam_index: usize,
        edge_index: usize,
        anchor: Point,
        starboard_vector: Vector2,
        parity: u8,
        face_index: usize,
        facet_index: usize,
    ) -> Result<Self> {
        if extents.is_empty() || extents.len() > 2 {
            return Err(ConstructionError::UnsupportedExtentCount {
                count: extents.len(),
                face: face_index,
                facet: facet_index,
                edge: edge_index,
                beam: beam_index,
            }
            .into());
        }

        let forward_vector = perpendicular_ccw(&starboard_vector);
        let vertices = compute_vertices(&extents, &anchor, &starboard_vector);

        Ok(Self {
            extents,
            beam_index,
            edge_index,
            anchor,
            starboard_vector,
            forward_vector,
            parity,
            face_index,
            facet_index,
            polygon: Polygon::new(vertices),
        })
    }

    /// Identity tuple `(face, facet, edge, beam_index)`.
    #[must_use]
    pub fn beam_id(&self) -> BeamId {
        (
            self.face_index,
            self.facet_index,
            self.edge_index,
            self.beam_index,
        )
    }

    #[must_use]
    pub fn beam_index(&self) -> usize {
        self.beam_index
    }

    #[must_use]
    pub fn edge_index(&self) -> usize {
        self.edge_index
    }

    #[must_use]
    pub fn anchor(&self) -> &Point {
        &self.anchor
    }

    #[must_use]
    pub fn starboard_vector(&self) -> Vector2 {
        self.starboard_vector
    }

    /// Perpendicular of the starboard vector, pointing into the facet.
    #[must_use]
    pub fn forward_vector(&self) -> Vector2 {
        self.forward_vector
    }

    #[must_use]
    pub fn parity(&self) -> u8 {
        self.parity
    }

    /// Forward boundary extents (one or two).
    #[must_use]
    pub fn extents(&self) -> &[OrientedSegment] {
        &self.extents
    }

    /// Polygon vertices (4 or 5 points).
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    /// Containment test against the beam's own polygon.
    #[must_use]
    pub fn is_inside(&self, point: &Point) -> bool {
        self.polygon.is_inside(point)
    }

    /// Default brightness: 1.2 for parity 0 (bright), 0.8 for parity 1 (dim).
    ///
    /// Used unless a pattern-driven override color is supplied externally by
    /// beam identity.
    #[must_use]
    pub fn fill_color_multiplier(&self) -> f64 {
        if self.parity == 0 {
            1.2
        } else {
            0.8
        }
    }

    /// The single representative coordinate for pattern evaluation, half a
    /// beam width forward of the anchor.
    #[must_use]
    pub fn basis_point(&self) -> Point {
        self.anchor.translate(&(self.forward_vector * 0.5))
    }

    /// Sample points within the beam.
    ///
    /// Always includes the basis sample at `0.5w` forward of the anchor. A
    /// second sample at `1.5w` is added only when the point at `2w` forward
    /// still lies inside the beam polygon, so density grows only where the
    /// beam is long enough.
    #[must_use]
    pub fn generate_samples(&self) -> Vec<Point> {
        let mut samples = vec![self.basis_point()];

        let probe = self.anchor.translate(&(self.forward_vector * 2.0));
        if self.is_inside(&probe) {
            samples.push(self.anchor.translate(&(self.forward_vector * 1.5)));
        }

        samples
    }
}

/// Derives the beam polygon from its extents.
///
/// One extent yields a quadrilateral. Two extents yield either a
/// quadrilateral (when the same extent is nearer on both sides) or a
/// pentagon whose tip is the bounded intersection of the two extents;
/// parallel or non-overlapping extents substitute the midpoint of the two
/// port endpoints so construction never fails.
fn compute_vertices(
    extents: &[OrientedSegment],
    anchor: &Point,
    starboard_vector: &Vector2,
) -> Vec<Point> {
    let half = starboard_vector * 0.5;
    let baseline_port = anchor.translate(&(-half));
    let baseline_starboard = anchor.translate(&half);

    let quad = |extent: &OrientedSegment| {
        vec![
            baseline_port.clone(),
            baseline_starboard.clone(),
            extent.starboard().clone(),
            extent.port().clone(),
        ]
    };

    if extents.len() == 1 {
        return quad(&extents[0]);
    }

    let port_nearer = usize::from(
        baseline_port.distance(extents[0].port()) >= baseline_port.distance(extents[1].port()),
    );
    let starboard_nearer = usize::from(
        baseline_starboard.distance(extents[0].starboard())
            >= baseline_starboard.distance(extents[1].starboard()),
    );

    if port_nearer == starboard_nearer {
        return quad(&extents[port_nearer]);
    }

    let tip = extents[0]
        .intersection(&extents[1], false)
        .unwrap_or_else(|| extents[0].port().midpoint_to(extents[1].port()));

    vec![
        baseline_port,
        baseline_starboard,
        extents[starboard_nearer].starboard().clone(),
        tip,
        extents[port_nearer].port().clone(),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LuminetError;

    fn extent(port: Point, starboard: Point) -> OrientedSegment {
        OrientedSegment::new(port, starboard)
    }

    fn single_extent_beam() -> Beam {
        Beam::new(
            vec![extent(Point::new(0.0, 10.0), Point::new(5.0, 10.0))],
            0,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap()
    }

    #[test]
    fn single_extent_rectangle_vertices() {
        let beam = single_extent_beam();
        let vertices = beam.vertices();
        assert_eq!(vertices.len(), 4);

        let expected = [(0.0, 0.0), (5.0, 0.0), (5.0, 10.0), (0.0, 10.0)];
        for (v, (x, y)) in vertices.iter().zip(expected) {
            assert!((v.x() - x).abs() < 1e-12, "vertices={vertices:?}");
            assert!((v.y() - y).abs() < 1e-12, "vertices={vertices:?}");
        }
    }

    #[test]
    fn forward_vector_perpendicular_to_starboard() {
        let beam = single_extent_beam();
        let forward = beam.forward_vector();
        assert!(forward.x.abs() < 1e-12);
        assert!((forward.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn beam_id_tuple() {
        let beam = Beam::new(
            vec![extent(Point::new(0.0, 1.0), Point::new(1.0, 1.0))],
            3,
            2,
            Point::new(0.5, 0.0),
            Vector2::new(1.0, 0.0),
            1,
            11,
            1,
        )
        .unwrap();
        assert_eq!(beam.beam_id(), (11, 1, 2, 3));
    }

    #[test]
    fn zero_extents_rejected() {
        let err = Beam::new(
            Vec::new(),
            0,
            0,
            Point::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap_err();
        let LuminetError::Construction(ConstructionError::UnsupportedExtentCount {
            count, ..
        }) = err
        else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(count, 0);
    }

    #[test]
    fn three_extents_rejected_with_context() {
        let extents = vec![
            extent(Point::new(0.0, 10.0), Point::new(5.0, 10.0)),
            extent(Point::new(0.0, 20.0), Point::new(5.0, 20.0)),
            extent(Point::new(0.0, 30.0), Point::new(5.0, 30.0)),
        ];
        let err = Beam::new(
            extents,
            4,
            2,
            Point::new(0.0, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            10,
            1,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("extent count 3"), "message={message}");
        assert!(message.contains("10:1:2:4"), "message={message}");
    }

    #[test]
    fn dual_extents_same_side_degrades_to_quad() {
        // Both sides of extent 0 are nearer to the baseline than extent 1.
        let beam = Beam::new(
            vec![
                extent(Point::new(0.0, 10.0), Point::new(5.0, 10.0)),
                extent(Point::new(0.0, 20.0), Point::new(5.0, 20.0)),
            ],
            0,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap();
        let vertices = beam.vertices();
        assert_eq!(vertices.len(), 4);
        assert!((vertices[2].y() - 10.0).abs() < 1e-12);
        assert!((vertices[3].y() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn dual_extents_split_decision_makes_pentagon() {
        // Extent 0 is nearer on the port side, extent 1 on the starboard
        // side; the boundaries cross above the baseline.
        let beam = Beam::new(
            vec![
                extent(Point::new(0.0, 4.0), Point::new(5.0, 14.0)),
                extent(Point::new(0.0, 14.0), Point::new(5.0, 4.0)),
            ],
            0,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap();
        let vertices = beam.vertices();
        assert_eq!(vertices.len(), 5);
        // Tip is the extent crossing at (2.5, 9).
        assert!((vertices[3].x() - 2.5).abs() < 1e-12, "vertices={vertices:?}");
        assert!((vertices[3].y() - 9.0).abs() < 1e-12, "vertices={vertices:?}");
        // Nearer starboard point comes from extent 1, nearer port from extent 0.
        assert!((vertices[2].y() - 4.0).abs() < 1e-12);
        assert!((vertices[4].y() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn fill_multiplier_by_parity() {
        let bright = single_extent_beam();
        assert!((bright.fill_color_multiplier() - 1.2).abs() < 1e-12);

        let dim = Beam::new(
            vec![extent(Point::new(0.0, 10.0), Point::new(5.0, 10.0))],
            1,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            1,
            0,
            0,
        )
        .unwrap();
        assert!((dim.fill_color_multiplier() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn basis_point_half_width_forward() {
        let beam = single_extent_beam();
        let basis = beam.basis_point();
        assert!((basis.x() - 2.5).abs() < 1e-12);
        assert!((basis.y() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn samples_adapt_to_beam_depth() {
        // Tall beam (10 units, width 5): the 2w probe at y=10 sits on the
        // boundary; a 20-unit extent keeps it strictly inside.
        let tall = Beam::new(
            vec![extent(Point::new(0.0, 20.0), Point::new(5.0, 20.0))],
            0,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap();
        let samples = tall.generate_samples();
        assert_eq!(samples.len(), 2);
        assert!((samples[0].y() - 2.5).abs() < 1e-12);
        assert!((samples[1].y() - 7.5).abs() < 1e-12);

        // Shallow beam: probe at 2w falls outside, single sample.
        let shallow = Beam::new(
            vec![extent(Point::new(0.0, 6.0), Point::new(5.0, 6.0))],
            0,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap();
        assert_eq!(shallow.generate_samples().len(), 1);
    }

    #[test]
    fn containment_of_own_polygon() {
        let beam = single_extent_beam();
        assert!(beam.is_inside(&Point::new(2.5, 5.0)));
        assert!(!beam.is_inside(&Point::new(7.5, 5.0)));
    }

    #[test]
    fn pentagon_tip_from_bounded_intersection() {
        let beam = Beam::new(
            vec![
                extent(Point::new(-1.0, 6.0), Point::new(5.0, 20.0)),
                extent(Point::new(-1.0, 20.0), Point::new(5.0, 6.0)),
            ],
            0,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap();
        // Boundaries cross at (2, 13), within both segments: pentagon tip.
        let vertices = beam.vertices();
        assert_eq!(vertices.len(), 5);
        assert!((vertices[3].x() - 2.0).abs() < 1e-9);
        assert!((vertices[3].y() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_extents_use_port_midpoint_tip() {
        // Parallel extents with split nearness: extent 0 is nearer on the
        // port side, extent 1 on the starboard side. No intersection exists,
        // so the tip falls back to the midpoint of the two port endpoints.
        let beam = Beam::new(
            vec![
                extent(Point::new(0.0, 10.0), Point::new(9.0, 10.0)),
                extent(Point::new(-4.0, 10.5), Point::new(5.0, 10.5)),
            ],
            0,
            0,
            Point::new(2.5, 0.0),
            Vector2::new(5.0, 0.0),
            0,
            0,
            0,
        )
        .unwrap();
        let vertices = beam.vertices();
        assert_eq!(vertices.len(), 5);
        assert!((vertices[3].x() + 2.0).abs() < 1e-12, "vertices={vertices:?}");
        assert!((vertices[3].y() - 10.25).abs() < 1e-12, "vertices={vertices:?}");
    }
}
