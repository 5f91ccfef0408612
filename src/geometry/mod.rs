pub mod angle;
pub mod beam;
pub mod element;
pub mod facet;
pub mod oriented_segment;
pub mod point;
pub mod polygon;
pub mod triangle;

pub use angle::Angle;
pub use beam::{Beam, BeamId};
pub use element::{Bounds, Line, LinearElement, Ray, Segment};
pub use facet::{EdgeType, Facet};
pub use oriented_segment::{Label, OrientedSegment};
pub use point::Point;
pub use polygon::Polygon;
pub use triangle::{Orientation, Triangle};
