//! The codec surface a host ORM field layer calls during load/save cycles.
//!
//! Each field is a pure, stateless converter between an in-memory geometry
//! value and the column literal embedded in outgoing statements. The host
//! framework owns SQL generation and I/O; it hands the raw column text to
//! [`GeometryField::decode`] on load and embeds the string returned by
//! [`GeometryField::encode`] on save.

use crate::datatypes::GeometryType;
use crate::error::PgGeometryResult;
use crate::io::literal::{read_point, read_points, write_point, write_points};
use crate::scalar::{validate_closed, Point};

/// Conversion between a geometry value and its column literal.
///
/// All methods are reentrant; implementations hold no state across calls.
pub trait GeometryField {
    /// The in-memory value this field persists.
    type Value;

    /// The geometry kind of the backing column.
    fn geometry_type(&self) -> GeometryType;

    /// Encode a value as the literal for an outgoing statement.
    ///
    /// A validation failure here must abort the save that requested it.
    fn encode(&self, value: &Self::Value) -> PgGeometryResult<String>;

    /// Decode the raw column text returned by the database.
    fn decode(&self, raw: &str) -> PgGeometryResult<Self::Value>;

    /// Decode a nullable column: `None` passes through unchanged.
    fn decode_opt(&self, raw: Option<&str>) -> PgGeometryResult<Option<Self::Value>> {
        raw.map(|raw| self.decode(raw)).transpose()
    }

    /// The column type name for the given backend engine identifier.
    fn db_type(&self, engine: &str) -> PgGeometryResult<&'static str> {
        self.geometry_type().column_type(engine)
    }
}

/// Field for a single point stored in a `point` column.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointField;

impl GeometryField for PointField {
    type Value = Point;

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn encode(&self, value: &Point) -> PgGeometryResult<String> {
        Ok(write_point(value))
    }

    fn decode(&self, raw: &str) -> PgGeometryResult<Point> {
        read_point(raw)
    }
}

/// Field for an open point sequence stored in a `path` column.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathField;

impl GeometryField for PathField {
    type Value = Vec<Point>;

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Path
    }

    fn encode(&self, value: &Vec<Point>) -> PgGeometryResult<String> {
        Ok(write_points(value))
    }

    fn decode(&self, raw: &str) -> PgGeometryResult<Vec<Point>> {
        read_points(raw)
    }
}

/// Field for a self-closing point sequence stored in a `polygon` column.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonField;

impl GeometryField for PolygonField {
    type Value = Vec<Point>;

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    /// Verifies the closure invariant before writing anything; a sequence
    /// whose first and last points differ fails the save.
    fn encode(&self, value: &Vec<Point>) -> PgGeometryResult<String> {
        validate_closed(value)?;
        Ok(write_points(value))
    }

    fn decode(&self, raw: &str) -> PgGeometryResult<Vec<Point>> {
        read_points(raw)
    }
}
