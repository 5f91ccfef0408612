use crate::error::ConstructionError;

use super::element::{Bounds, LinearElement};
use super::point::Point;

/// Semantic endpoint label for an [`OrientedSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Port,
    Starboard,
}

/// A segment whose endpoints carry semantic labels.
///
/// Used for beam extents, where "port" and "starboard" identify which side
/// of the beam baseline each boundary point belongs to. Behaves as a
/// segment for intersection queries.
#[derive(Debug, Clone)]
pub struct OrientedSegment {
    port: Point,
    starboard: Point,
}

impl OrientedSegment {
    #[must_use]
    pub fn new(port: Point, starboard: Point) -> Self {
        Self { port, starboard }
    }

    /// Builds an oriented segment from labeled endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidEndpointLabels`] unless exactly
    /// one point per label is supplied.
    pub fn from_labeled(labeled: &[(Label, Point)]) -> Result<Self, ConstructionError> {
        let ports: Vec<&Point> = labeled
            .iter()
            .filter(|(label, _)| *label == Label::Port)
            .map(|(_, p)| p)
            .collect();
        let starboards: Vec<&Point> = labeled
            .iter()
            .filter(|(label, _)| *label == Label::Starboard)
            .map(|(_, p)| p)
            .collect();

        if ports.len() != 1 || starboards.len() != 1 {
            return Err(ConstructionError::InvalidEndpointLabels {
                ports: ports.len(),
                starboards: starboards.len(),
            });
        }

        Ok(Self {
            port: ports[0].clone(),
            starboard: starboards[0].clone(),
        })
    }

    /// Endpoint by semantic label.
    #[must_use]
    pub fn point(&self, label: Label) -> &Point {
        match label {
            Label::Port => &self.port,
            Label::Starboard => &self.starboard,
        }
    }

    #[must_use]
    pub fn port(&self) -> &Point {
        &self.port
    }

    #[must_use]
    pub fn starboard(&self) -> &Point {
        &self.starboard
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.port.distance(&self.starboard)
    }
}

impl LinearElement for OrientedSegment {
    fn start(&self) -> &Point {
        &self.port
    }

    fn end(&self) -> &Point {
        &self.starboard
    }

    fn bounds(&self) -> Bounds {
        Bounds::Segment
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn labeled_construction() {
        let seg = OrientedSegment::from_labeled(&[
            (Label::Starboard, Point::new(5.0, 0.0)),
            (Label::Port, Point::new(0.0, 0.0)),
        ])
        .unwrap();
        assert!((seg.point(Label::Port).x()).abs() < 1e-12);
        assert!((seg.point(Label::Starboard).x() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_labels_rejected() {
        let err = OrientedSegment::from_labeled(&[
            (Label::Port, Point::new(0.0, 0.0)),
            (Label::Port, Point::new(5.0, 0.0)),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConstructionError::InvalidEndpointLabels {
                ports: 2,
                starboards: 0
            }
        ));
    }

    #[test]
    fn missing_label_rejected() {
        let err =
            OrientedSegment::from_labeled(&[(Label::Starboard, Point::new(1.0, 1.0))]).unwrap_err();
        assert!(matches!(
            err,
            ConstructionError::InvalidEndpointLabels {
                ports: 0,
                starboards: 1
            }
        ));
    }

    #[test]
    fn intersects_as_segment() {
        let a = OrientedSegment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let b = OrientedSegment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
        let hit = a.intersection(&b, false).unwrap();
        assert!((hit.x() - 1.0).abs() < 1e-12);
        assert!((hit.y() - 1.0).abs() < 1e-12);
    }
}
