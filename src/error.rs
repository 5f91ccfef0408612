use thiserror::Error;

/// Top-level error type for the luminet subdivision engine.
#[derive(Debug, Error)]
pub enum LuminetError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Fatal validation errors raised while building geometry.
///
/// Geometric degeneracies (zero-length edges, parallel intersections,
/// opposite bisector arms, zero-perimeter triangles) are recovered locally
/// with documented fallbacks and never appear here.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error(
        "oriented segment requires exactly one port and one starboard endpoint, \
         got {ports} port and {starboards} starboard"
    )]
    InvalidEndpointLabels { ports: usize, starboards: usize },

    #[error(
        "unsupported extent count {count} for beam {face}:{facet}:{edge}:{beam} \
         (expected 1 or 2)"
    )]
    UnsupportedExtentCount {
        count: usize,
        face: usize,
        facet: usize,
        edge: usize,
        beam: usize,
    },

    #[error(
        "vertex index {index} out of range for net with {point_count} points \
         (series {series}, triangle {triangle})"
    )]
    VertexIndexOutOfRange {
        index: usize,
        point_count: usize,
        series: usize,
        triangle: usize,
    },
}

/// Convenience type alias for results using [`LuminetError`].
pub type Result<T> = std::result::Result<T, LuminetError>;
