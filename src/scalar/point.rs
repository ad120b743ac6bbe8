use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PgGeometryError;
use crate::io::literal::{read_point, write_point};

/// An immutable 2D coordinate.
///
/// Equality is structural and exact: two points are equal iff both
/// coordinates compare equal, with no epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Construct a point from two numbers.
    ///
    /// Integer arguments are widened to `f64`, so `Point::new(1, 1)` and
    /// `Point::new(1.0, 1.0)` are the same value.
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }

    /// The x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_point(self))
    }
}

impl FromStr for Point {
    type Err = PgGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_point(s)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for geo_types::Coord<f64> {
    fn from(value: Point) -> Self {
        geo_types::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<geo_types::Coord<f64>> for Point {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        geo_types::Point::new(value.x, value.y)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::new(value.x(), value.y())
    }
}
