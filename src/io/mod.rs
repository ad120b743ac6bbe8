//! Reader and writer implementations for the Postgres representations of
//! geometry values.

pub mod literal;
#[cfg(feature = "postgres")]
pub mod postgres;
