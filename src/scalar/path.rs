use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PgGeometryError;
use crate::io::literal::{read_points, write_points};
use crate::scalar::Point;

/// An open ordered sequence of points.
///
/// Insertion order is significant; the sequence may be empty and has no
/// closure requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Construct a path from a point sequence.
    pub fn new(points: Vec<Point>) -> Self {
        Path { points }
    }

    /// The points of this path, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the path, returning its point sequence.
    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }

    /// The number of points in this path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_points(&self.points))
    }
}

impl FromStr for Path {
    type Err = PgGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::new(read_points(s)?))
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Path::new(points)
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Path::new(iter.into_iter().collect())
    }
}

impl From<Path> for geo_types::LineString<f64> {
    fn from(value: Path) -> Self {
        geo_types::LineString::new(value.points.into_iter().map(Into::into).collect())
    }
}

impl From<geo_types::LineString<f64>> for Path {
    fn from(value: geo_types::LineString<f64>) -> Self {
        value.into_iter().map(Point::from).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_parse_round_trip() {
        let path = Path::new(vec![Point::new(1, 1), Point::new(2, 2)]);
        assert_eq!(path.to_string(), "(1,1)(2,2)");
        assert_eq!("(1,1)(2,2)".parse::<Path>().unwrap(), path);
    }

    #[test]
    fn empty() {
        let path = Path::default();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
        assert_eq!("".parse::<Path>().unwrap(), path);
    }

    #[test]
    fn to_geo() {
        let path = Path::new(vec![Point::new(0, 0), Point::new(1.5, -1.5)]);
        let line: geo_types::LineString<f64> = path.clone().into();
        assert_eq!(Path::from(line), path);
    }
}
