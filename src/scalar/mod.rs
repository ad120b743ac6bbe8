//! Geometry scalar types.

mod path;
mod point;
mod polygon;

pub use path::Path;
pub use point::Point;
pub(crate) use polygon::validate_closed;
pub use polygon::Polygon;
