//! Geometry column kinds and their Postgres type names.

use std::fmt::Display;

use crate::error::{PgGeometryError, PgGeometryResult};

/// The geometry column kinds this crate can persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// A single 2D coordinate, stored in a `point` column.
    Point,

    /// An open sequence of points, stored in a `path` column.
    Path,

    /// A self-closing sequence of points, stored in a `polygon` column.
    Polygon,
}

impl GeometryType {
    /// The Postgres type name for this geometry kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::Path => "path",
            GeometryType::Polygon => "polygon",
        }
    }

    /// Resolve the column type name for the given backend engine identifier.
    ///
    /// Only Postgres backends are supported; the engine string is matched
    /// rather than a live connection object so resolution stays independently
    /// testable. Anything that does not identify a Postgres engine or driver
    /// is [`PgGeometryError::UnsupportedBackend`].
    pub fn column_type(&self, engine: &str) -> PgGeometryResult<&'static str> {
        if is_postgres_engine(engine) {
            Ok(self.type_name())
        } else {
            Err(PgGeometryError::UnsupportedBackend(engine.to_string()))
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

fn is_postgres_engine(engine: &str) -> bool {
    let engine = engine.to_ascii_lowercase();
    engine.contains("postgres") || engine.contains("psycopg")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(GeometryType::Point.type_name(), "point");
        assert_eq!(GeometryType::Path.type_name(), "path");
        assert_eq!(GeometryType::Polygon.type_name(), "polygon");
    }

    #[test]
    fn postgres_engines() {
        for engine in [
            "postgres",
            "postgresql",
            "django.db.backends.postgresql_psycopg2",
            "psycopg2",
            "PostgreSQL",
        ] {
            assert_eq!(GeometryType::Path.column_type(engine).unwrap(), "path");
        }
    }

    #[test]
    fn unsupported_engines() {
        for engine in ["sqlite", "mysql", "oracle", ""] {
            let err = GeometryType::Polygon.column_type(engine).unwrap_err();
            assert!(matches!(err, PgGeometryError::UnsupportedBackend(_)));
        }
    }
}
