//! Defines [`PgGeometryError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PgGeometryError {
    /// Malformed geometry literal handed to a decoder.
    ///
    /// Never recovered or defaulted; the load that produced the literal
    /// fails.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A geometry value rejected at encode time, e.g. a polygon whose first
    /// and last points differ. The save that triggered the encode must
    /// abort.
    #[error("{0}")]
    Validation(String),

    /// A column type was requested for a database backend other than
    /// Postgres. There is no fallback literal format.
    #[error("Unsupported database backend: {0}")]
    UnsupportedBackend(String),
}

/// Crate-specific result type.
pub type PgGeometryResult<T> = std::result::Result<T, PgGeometryError>;
