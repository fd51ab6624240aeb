//! Whitespace-delimited XYZ point file support
//!
//! Each non-blank line holds exactly three whitespace-separated floating
//! point fields `x y z`. There is no header row and no comment syntax; blank
//! lines are skipped. Row order is preserved exactly.

use pointview_core::{Error, Point3f, PointSet, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Reader for whitespace-delimited `x y z` files
pub struct XyzReader;

impl XyzReader {
    /// Read a point set from a file.
    ///
    /// Fails with [`Error::MissingInput`] when the file does not exist and
    /// with [`Error::EmptyInput`] when it contains no rows, so callers can
    /// branch on the variant instead of inspecting message text. The file
    /// handle is released before this function returns.
    pub fn read_point_set<P: AsRef<Path>>(path: P) -> Result<PointSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::MissingInput {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;

        let points = Self::parse_points(BufReader::new(file))?;
        if points.is_empty() {
            return Err(Error::EmptyInput {
                path: path.display().to_string(),
            });
        }
        Ok(points)
    }

    /// Parse rows from any buffered source. The result may be empty.
    pub fn parse_points<R: BufRead>(reader: R) -> Result<PointSet> {
        let mut points = PointSet::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            points.push(Self::parse_row(index + 1, &line)?);
        }
        Ok(points)
    }

    /// Parse one `x y z` row. `line_no` is 1-based and reported in errors.
    fn parse_row(line_no: usize, line: &str) -> Result<Point3f> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(Error::MalformedRow {
                line: line_no,
                message: format!("expected 3 fields, found {}", fields.len()),
            });
        }

        let mut coords = [0.0f32; 3];
        for (coord, field) in coords.iter_mut().zip(&fields) {
            *coord = field.parse::<f32>().map_err(|_| Error::MalformedRow {
                line: line_no,
                message: format!("invalid number {:?}", field),
            })?;
        }
        Ok(Point3f::new(coords[0], coords[1], coords[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<PointSet> {
        XyzReader::parse_points(input.as_bytes())
    }

    #[test]
    fn parses_rows_in_order() {
        let points = parse("0.0 0.0 0.0\n1.0 1.0 2.0\n-1.0 0.5 1.5\n").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(points[1], Point3f::new(1.0, 1.0, 2.0));
        assert_eq!(points[2], Point3f::new(-1.0, 0.5, 1.5));
    }

    #[test]
    fn accepts_tabs_and_repeated_spaces() {
        let points = parse("1.0\t2.0   3.0\n").unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], Point3f::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn accepts_scientific_notation() {
        let points = parse("1e-3 -2.5e2 0.0\n").unwrap();
        assert_eq!(points[0], Point3f::new(0.001, -250.0, 0.0));
    }

    #[test]
    fn skips_blank_lines() {
        let points = parse("\n1.0 2.0 3.0\n   \n4.0 5.0 6.0\n\n").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point3f::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn empty_source_parses_to_empty_set() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n \n").unwrap().is_empty());
    }

    #[test]
    fn single_row_parses_to_singleton() {
        let points = parse("0.25 -0.75 1.25\n").unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], Point3f::new(0.25, -0.75, 1.25));
    }

    #[test]
    fn non_numeric_token_is_malformed() {
        let err = parse("1.0 abc 3.0\n").unwrap_err();
        match err {
            Error::MalformedRow { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("abc"));
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = parse("1.0 2.0 3.0\n4.0 5.0\n").unwrap_err();
        match err {
            Error::MalformedRow { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("found 2"));
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn extra_field_is_malformed() {
        let err = parse("1.0 2.0 3.0 4.0\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn blank_lines_do_not_shift_reported_line_numbers() {
        let err = parse("1.0 2.0 3.0\n\n\nx y z\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRow { line: 4, .. }));
    }
}
