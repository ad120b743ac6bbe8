//! Planar geometry value types for Postgres geometry columns, plus the
//! textual literal codec used to move them across the wire.
//!
//! The [`scalar`] module holds the value types ([`Point`], [`Path`],
//! [`Polygon`]); the [`field`] module exposes the encode/decode surface a
//! host ORM calls during load/save cycles.
//!
//! ```
//! use pg_geometry::{GeometryField, Point, PointField};
//!
//! let field = PointField;
//! assert_eq!(field.encode(&Point::new(1, 1)).unwrap(), "(1,1)");
//! assert_eq!(field.decode("(-1.5,1.5)").unwrap(), Point::new(-1.5, 1.5));
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod datatypes;
pub mod error;
pub mod field;
pub mod io;
pub mod scalar;

pub use datatypes::GeometryType;
pub use error::{PgGeometryError, PgGeometryResult};
pub use field::{GeometryField, PathField, PointField, PolygonField};
pub use scalar::{Path, Point, Polygon};
