//! The textual literal syntax Postgres geometry columns use on the wire.
//!
//! A point is written `(x,y)`; paths and polygons are written as point
//! literals concatenated with no separator, e.g. `(1,1)(2,2)`.

mod reader;
mod writer;

pub use reader::{read_point, read_points};
pub use writer::{write_point, write_points};
