//! `sqlx` bindings for the geometry scalars against Postgres columns.
//!
//! Values decode from either wire format: text goes through the literal
//! reader, binary through the server's send formats (a point is two
//! big-endian `f64`; a path prefixes a closed-flag byte and a point count; a
//! polygon prefixes a point count). Parameters are encoded in binary, and a
//! polygon verifies its closure invariant before anything is written, so a
//! non-closed value aborts the bind. Nullable columns are `Option<T>` and
//! handled by `sqlx` itself.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueFormat, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

use crate::io::literal::{read_point, read_points};
use crate::scalar::{Path, Point, Polygon};

impl Type<Postgres> for Point {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("point")
    }
}

impl Encode<'_, Postgres> for Point {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        write_point_binary(buf, self)?;
        Ok(IsNull::No)
    }
}

impl<'r> Decode<'r, Postgres> for Point {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        match value.format() {
            PgValueFormat::Text => Ok(read_point(value.as_str()?)?),
            PgValueFormat::Binary => {
                let mut buf = Cursor::new(value.as_bytes()?);
                Ok(read_point_binary(&mut buf)?)
            }
        }
    }
}

impl Type<Postgres> for Path {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("path")
    }
}

impl Encode<'_, Postgres> for Path {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        // Always an open path; closed paths are not modeled.
        buf.write_u8(0)?;
        write_points_binary(buf, self.points())?;
        Ok(IsNull::No)
    }
}

impl<'r> Decode<'r, Postgres> for Path {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        match value.format() {
            PgValueFormat::Text => Ok(Path::new(read_points(value.as_str()?)?)),
            PgValueFormat::Binary => {
                let mut buf = Cursor::new(value.as_bytes()?);
                let _closed = buf.read_u8()?;
                Ok(Path::new(read_points_binary(&mut buf)?))
            }
        }
    }
}

impl Type<Postgres> for Polygon {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("polygon")
    }
}

impl Encode<'_, Postgres> for Polygon {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        self.validate()?;
        write_points_binary(buf, self.points())?;
        Ok(IsNull::No)
    }
}

impl<'r> Decode<'r, Postgres> for Polygon {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        match value.format() {
            PgValueFormat::Text => Ok(Polygon::new(read_points(value.as_str()?)?)),
            PgValueFormat::Binary => {
                let mut buf = Cursor::new(value.as_bytes()?);
                Ok(Polygon::new(read_points_binary(&mut buf)?))
            }
        }
    }
}

fn write_point_binary(buf: &mut PgArgumentBuffer, point: &Point) -> Result<(), BoxDynError> {
    buf.write_f64::<BigEndian>(point.x())?;
    buf.write_f64::<BigEndian>(point.y())?;
    Ok(())
}

fn write_points_binary(buf: &mut PgArgumentBuffer, points: &[Point]) -> Result<(), BoxDynError> {
    buf.write_i32::<BigEndian>(i32::try_from(points.len())?)?;
    for point in points {
        write_point_binary(buf, point)?;
    }
    Ok(())
}

fn read_point_binary(buf: &mut Cursor<&[u8]>) -> Result<Point, BoxDynError> {
    let x = buf.read_f64::<BigEndian>()?;
    let y = buf.read_f64::<BigEndian>()?;
    Ok(Point::new(x, y))
}

fn read_points_binary(buf: &mut Cursor<&[u8]>) -> Result<Vec<Point>, BoxDynError> {
    let count = usize::try_from(buf.read_i32::<BigEndian>()?)?;
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(read_point_binary(buf)?);
    }
    Ok(points)
}
