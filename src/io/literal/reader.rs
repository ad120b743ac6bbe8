use crate::error::{PgGeometryError, PgGeometryResult};
use crate::scalar::Point;

/// Read a single point from its column literal.
///
/// The literal must be exactly `(<x>,<y>)`: one opening parenthesis, one
/// comma, one closing parenthesis, no whitespace. Coordinates are
/// optionally-signed decimals and may omit a leading zero (`.5`, `-.5`).
pub fn read_point(s: &str) -> PgGeometryResult<Point> {
    let inner = s
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| PgGeometryError::Parse(format!("invalid point literal: {s:?}")))?;
    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| PgGeometryError::Parse(format!("invalid point literal: {s:?}")))?;
    Ok(Point::new(read_coordinate(x, s)?, read_coordinate(y, s)?))
}

/// Read a path/polygon column literal into its point sequence.
///
/// The literal is zero or more point literals concatenated with no
/// separator. Any leftover text between or around the points fails the
/// whole read.
pub fn read_points(s: &str) -> PgGeometryResult<Vec<Point>> {
    let mut points = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let end = rest.find(')').ok_or_else(|| {
            PgGeometryError::Parse(format!("unterminated point in geometry literal: {s:?}"))
        })?;
        let (token, tail) = rest.split_at(end + 1);
        points.push(read_point(token)?);
        rest = tail;
    }
    Ok(points)
}

fn read_coordinate(raw: &str, literal: &str) -> PgGeometryResult<f64> {
    raw.parse::<f64>().map_err(|_| {
        PgGeometryError::Parse(format!(
            "invalid coordinate {raw:?} in geometry literal {literal:?}"
        ))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_literals() {
        let values = [
            ("(1,1)", Point::new(1, 1)),
            ("(-1,1)", Point::new(-1, 1)),
            ("(1,-1)", Point::new(1, -1)),
            ("(-1,-1)", Point::new(-1, -1)),
            ("(1.5,1.5)", Point::new(1.5, 1.5)),
            ("(-1.5,1.5)", Point::new(-1.5, 1.5)),
            ("(1.5,-1.5)", Point::new(1.5, -1.5)),
            ("(-1.5,-1.5)", Point::new(-1.5, -1.5)),
            ("(.5,.5)", Point::new(0.5, 0.5)),
            ("(-.5,.5)", Point::new(-0.5, 0.5)),
            ("(.5,-.5)", Point::new(0.5, -0.5)),
            ("(-.5,-.5)", Point::new(-0.5, -0.5)),
        ];

        for (literal, expected) in values {
            assert_eq!(read_point(literal).unwrap(), expected, "{literal}");
        }
    }

    #[test]
    fn malformed_point_literals() {
        for literal in [
            "",
            "1,1",
            "(1,1",
            "1,1)",
            "(1)",
            "(1,2,3)",
            "(1, 1)",
            " (1,1)",
            "(a,b)",
            "(1,1)(2,2)",
        ] {
            let err = read_point(literal).unwrap_err();
            assert!(matches!(err, PgGeometryError::Parse(_)), "{literal:?}");
        }
    }

    #[test]
    fn point_sequences() {
        assert_eq!(read_points("").unwrap(), vec![]);
        assert_eq!(read_points("(1,1)").unwrap(), vec![Point::new(1, 1)]);
        assert_eq!(
            read_points("(1,1)(2,2)(1,1)").unwrap(),
            vec![Point::new(1, 1), Point::new(2, 2), Point::new(1, 1)]
        );
    }

    #[test]
    fn malformed_point_sequences() {
        for literal in ["(1,1),(2,2)", "(1,1)(2,2", "(1,1) (2,2)", "x(1,1)"] {
            let err = read_points(literal).unwrap_err();
            assert!(matches!(err, PgGeometryError::Parse(_)), "{literal:?}");
        }
    }
}
