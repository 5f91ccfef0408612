pub mod error;
pub mod geometry;
pub mod math;
pub mod net;

pub use error::{ConstructionError, LuminetError, Result};
