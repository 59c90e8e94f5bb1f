use std::{fmt, fs, io::Read};

use crate::{Error, Result, io::options::SolverOptions, node::Point};

/// Parsed point set for one solver run. Owned here; read-only to every
/// other component, which references points by index.
#[derive(Clone, Debug)]
pub struct SolverInput {
    points: Vec<Point>,
}

impl SolverInput {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Reads points from the `--input` file, or stdin when no file is set.
    pub fn from_options(options: &SolverOptions) -> Result<Self> {
        let raw = if options.input.is_empty() {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(&options.input)?
        };

        Ok(Self::new(parse_points(&raw)?))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn points_len(&self) -> usize {
        self.points.len()
    }
}

impl fmt::Display for SolverInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "points={}", self.points.len())
    }
}

/// Parses the count-header point format: the first whitespace-separated
/// token is the point count, followed by exactly that many `x y` pairs.
/// Coordinates must be finite.
fn parse_points(raw: &str) -> Result<Vec<Point>> {
    let mut tokens = raw.split_whitespace();
    let count_tok = tokens
        .next()
        .ok_or_else(|| Error::invalid_input("No points provided."))?;
    let count: usize = count_tok
        .parse()
        .map_err(|_| Error::invalid_input(format!("Invalid point count: {count_tok}")))?;

    let mut points = Vec::with_capacity(count);
    for idx in 0..count {
        let x = parse_coordinate(&mut tokens, idx, "x")?;
        let y = parse_coordinate(&mut tokens, idx, "y")?;
        let point = Point::new(x, y);
        if !point.is_valid() {
            return Err(Error::invalid_input(format!(
                "Point {idx}: coordinates must be finite: {point}"
            )));
        }
        points.push(point);
    }

    if tokens.next().is_some() {
        return Err(Error::invalid_input(format!(
            "Expected {count} points but input has trailing tokens"
        )));
    }

    Ok(points)
}

fn parse_coordinate<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    idx: usize,
    axis: &str,
) -> Result<f64> {
    let tok = tokens
        .next()
        .ok_or_else(|| Error::invalid_input(format!("Point {idx}: missing {axis} coordinate")))?;
    tok.parse()
        .map_err(|_| Error::invalid_input(format!("Point {idx}: invalid {axis} coordinate: {tok}")))
}

#[cfg(test)]
mod tests {
    use super::parse_points;
    use crate::node::Point;

    #[test]
    fn parses_count_header_and_pairs() {
        let points = parse_points("3\n0.0 0.0\n1.5 2.0\n-3.0 4.25\n").expect("parse points");
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point::new(1.5, 2.0));
        assert_eq!(points[2], Point::new(-3.0, 4.25));
    }

    #[test]
    fn accepts_arbitrary_whitespace_between_tokens() {
        let points = parse_points("2 1.0 2.0\t3.0\n4.0").expect("parse points");
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn zero_count_yields_an_empty_set() {
        let points = parse_points("0\n").expect("parse points");
        assert!(points.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_points(" \n\t ").expect_err("empty input should fail");
        assert!(err.to_string().contains("No points provided."));
    }

    #[test]
    fn rejects_non_numeric_count() {
        let err = parse_points("many\n1 2\n").expect_err("bad count should fail");
        assert!(err.to_string().contains("Invalid point count: many"));
    }

    #[test]
    fn rejects_missing_coordinate() {
        let err = parse_points("2\n1.0 2.0\n3.0").expect_err("truncated pair should fail");
        assert!(err.to_string().contains("Point 1: missing y coordinate"));
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let err = parse_points("1\nfoo 2.0\n").expect_err("bad coordinate should fail");
        assert!(err.to_string().contains("Point 0: invalid x coordinate: foo"));
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let err = parse_points("1\nNaN 2.0\n").expect_err("NaN should fail");
        assert!(err.to_string().contains("coordinates must be finite"));

        let err = parse_points("1\n1.0 inf\n").expect_err("infinity should fail");
        assert!(err.to_string().contains("coordinates must be finite"));
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = parse_points("1\n1.0 2.0\n3.0 4.0\n").expect_err("extra pair should fail");
        assert!(err.to_string().contains("trailing tokens"));
    }
}
