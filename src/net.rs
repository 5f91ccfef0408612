use crate::error::{ConstructionError, Result};
use crate::geometry::beam::Beam;
use crate::geometry::point::Point;
use crate::geometry::triangle::Triangle;

/// Beam counts used when the loader supplies none, mapped to the canonical
/// edge order `[MAJOR_STARBOARD, MINOR_STARBOARD, MINOR_PORT, MAJOR_PORT]`.
pub const DEFAULT_BEAM_COUNTS: [usize; 4] = [7, 4, 4, 7];

/// Input contract for building a [`Net`].
///
/// Filled in by an external configuration loader: color names are already
/// resolved to opaque tags on the points, and vertex indices reference the
/// shared point list. The engine re-validates indices but performs no file
/// or color handling of its own.
#[derive(Debug, Clone)]
pub struct NetConfig {
    /// Shared vertex pool; triangles reference it by index.
    pub points: Vec<Point>,
    /// Pentagon apex used for triangle orientation detection.
    pub apex: (f64, f64),
    /// Triangle vertex index triples, grouped by series.
    pub series: Vec<Vec<[usize; 3]>>,
    /// Per-edge beam counts forwarded to every facet.
    pub beam_counts: [usize; 4],
}

impl NetConfig {
    /// Creates a config with the default beam counts.
    #[must_use]
    pub fn new(points: Vec<Point>, apex: (f64, f64), series: Vec<Vec<[usize; 3]>>) -> Self {
        Self {
            points,
            apex,
            series,
            beam_counts: DEFAULT_BEAM_COUNTS,
        }
    }
}

/// Summary counts over a built net.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetStats {
    pub points: usize,
    pub triangles: usize,
    pub facets: usize,
    pub beams: usize,
}

/// The fully built pattern net: every triangle, facet and beam, constructed
/// eagerly and immutable afterwards.
///
/// Downstream collaborators (array builder, renderer, streaming server)
/// only read, walking beams in the fixed triangle → facet → edge → beam
/// nesting order exposed by [`Net::iter_beams`].
#[derive(Debug, Clone)]
pub struct Net {
    points: Vec<Point>,
    apex: Point,
    triangles: Vec<Triangle>,
}

impl Net {
    /// Builds the net from a loader-supplied config.
    ///
    /// Triangle ids follow the original numbering scheme:
    /// `(series_index + 1) * 10 + position_in_series`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::VertexIndexOutOfRange`] for a triangle
    /// referencing a missing point, and propagates facet/beam construction
    /// errors.
    pub fn build(config: &NetConfig) -> Result<Self> {
        let apex = Point::new(config.apex.0, config.apex.1);

        let mut triangles = Vec::new();
        for (series_index, series) in config.series.iter().enumerate() {
            for (position, triple) in series.iter().enumerate() {
                for &index in triple {
                    if index >= config.points.len() {
                        return Err(ConstructionError::VertexIndexOutOfRange {
                            index,
                            point_count: config.points.len(),
                            series: series_index,
                            triangle: position,
                        }
                        .into());
                    }
                }

                let triangle_id = (series_index + 1) * 10 + position;
                triangles.push(Triangle::new(
                    config.points[triple[0]].clone(),
                    config.points[triple[1]].clone(),
                    config.points[triple[2]].clone(),
                    triangle_id,
                    apex.clone(),
                    config.beam_counts,
                )?);
            }
        }

        Ok(Self {
            points: config.points.clone(),
            apex,
            triangles,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn apex(&self) -> &Point {
        &self.apex
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Every beam in the fixed triangle → facet → edge → beam nesting
    /// order. This is the walk downstream address maps are keyed on.
    pub fn iter_beams(&self) -> impl Iterator<Item = &Beam> {
        self.triangles
            .iter()
            .flat_map(|triangle| triangle.facets())
            .flat_map(|facet| facet.beams())
            .flat_map(|edge_beams| edge_beams.iter())
    }

    #[must_use]
    pub fn beam_count(&self) -> usize {
        self.iter_beams().count()
    }

    #[must_use]
    pub fn stats(&self) -> NetStats {
        NetStats {
            points: self.points.len(),
            triangles: self.triangles.len(),
            facets: self.triangles.iter().map(|t| t.facets().len()).sum(),
            beams: self.beam_count(),
        }
    }
}
