use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PgGeometryError, PgGeometryResult};
use crate::io::literal::{read_points, write_points};
use crate::scalar::Point;

/// An ordered sequence of points whose first and last elements must be
/// structurally equal.
///
/// Closure is enforced when the value is encoded for a column, not at
/// construction, so a polygon can be built up incrementally and only has to
/// be closed by the time it is persisted. There is no [`std::fmt::Display`]
/// impl for the same reason: rendering a polygon is fallible, and
/// [`Polygon::to_literal`] is the one encode path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Construct a polygon from a point sequence, closed or not.
    pub fn new(points: Vec<Point>) -> Self {
        Polygon { points }
    }

    /// The points of this polygon, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the polygon, returning its point sequence.
    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }

    /// The number of points in this polygon.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first point equals the last. Empty polygons are not
    /// closed.
    pub fn is_closed(&self) -> bool {
        validate_closed(&self.points).is_ok()
    }

    /// Check the closure invariant, as done before every encode.
    pub fn validate(&self) -> PgGeometryResult<()> {
        validate_closed(&self.points)
    }

    /// Encode this polygon as its column literal, verifying closure first.
    pub fn to_literal(&self) -> PgGeometryResult<String> {
        self.validate()?;
        Ok(write_points(&self.points))
    }
}

/// Reject point sequences that do not close on themselves.
///
/// Empty sequences are rejected as well: a Postgres polygon carries at
/// least one point, so there is nothing an empty value could mean.
pub(crate) fn validate_closed(points: &[Point]) -> PgGeometryResult<()> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if first == last => Ok(()),
        (Some(_), Some(_)) => Err(PgGeometryError::Validation(
            "Not self-closing polygon".to_string(),
        )),
        _ => Err(PgGeometryError::Validation(
            "Polygon must contain at least one point".to_string(),
        )),
    }
}

impl FromStr for Polygon {
    type Err = PgGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Polygon::new(read_points(s)?))
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Polygon::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polygon::new(iter.into_iter().collect())
    }
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(value: Polygon) -> Self {
        let exterior = geo_types::LineString::new(
            value.points.into_iter().map(Into::into).collect(),
        );
        geo_types::Polygon::new(exterior, vec![])
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    /// Keeps the exterior ring only; interior rings are not modeled.
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, _interiors) = value.into_inner();
        exterior.into_iter().map(Point::from).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn closed() -> Polygon {
        Polygon::new(vec![Point::new(1, 1), Point::new(2, 2), Point::new(1, 1)])
    }

    #[test]
    fn literal_round_trip() {
        let polygon = closed();
        let literal = polygon.to_literal().unwrap();
        assert_eq!(literal, "(1,1)(2,2)(1,1)");
        assert_eq!(literal.parse::<Polygon>().unwrap(), polygon);
    }

    #[test]
    fn not_self_closing() {
        let polygon = Polygon::new(vec![Point::new(1, 1), Point::new(2, 2)]);
        assert!(!polygon.is_closed());

        let err = polygon.to_literal().unwrap_err();
        assert_eq!(err.to_string(), "Not self-closing polygon");
    }

    #[test]
    fn empty_rejected() {
        let polygon = Polygon::new(vec![]);
        assert!(!polygon.is_closed());
        assert!(matches!(
            polygon.to_literal().unwrap_err(),
            PgGeometryError::Validation(_)
        ));
    }

    #[test]
    fn single_point_is_closed() {
        let polygon = Polygon::new(vec![Point::new(1, 1)]);
        assert!(polygon.is_closed());
        assert_eq!(polygon.to_literal().unwrap(), "(1,1)");
    }

    #[test]
    fn parse_does_not_validate() {
        // Closure is an encode-time rule; loads of open sequences succeed.
        let polygon = "(1,1)(2,2)".parse::<Polygon>().unwrap();
        assert!(!polygon.is_closed());
    }

    #[test]
    fn to_geo() {
        let polygon: geo_types::Polygon<f64> = closed().into();
        assert_eq!(Polygon::from(polygon), closed());
    }
}
