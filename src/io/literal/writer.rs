use crate::scalar::Point;

/// Write a single point as its column literal, `(x,y)`.
///
/// Coordinates use Rust's shortest round-trip float formatting, so `1.0`
/// comes out as `1` and parses back to the same value.
pub fn write_point(point: &Point) -> String {
    format!("({},{})", point.x(), point.y())
}

/// Write a sequence of points as a path/polygon column literal.
///
/// Point literals are concatenated with no separator; an empty sequence
/// writes the empty string.
pub fn write_points(points: &[Point]) -> String {
    points.iter().map(write_point).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_literals() {
        assert_eq!(write_point(&Point::new(1, 1)), "(1,1)");
        assert_eq!(write_point(&Point::new(-1.5, 1.5)), "(-1.5,1.5)");
        assert_eq!(write_point(&Point::new(0.5, -0.5)), "(0.5,-0.5)");
    }

    #[test]
    fn point_sequences() {
        assert_eq!(write_points(&[]), "");
        assert_eq!(write_points(&[Point::new(1, 1)]), "(1,1)");
        assert_eq!(
            write_points(&[Point::new(1, 1), Point::new(2, 2), Point::new(1, 1)]),
            "(1,1)(2,2)(1,1)"
        );
    }
}
