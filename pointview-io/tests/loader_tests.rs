//! End-to-end loader tests against real files on disk.

use pointview_core::{Error, Point3f};
use pointview_io::XyzReader;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pointview-io-{name}"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_example_file() {
    let path = temp_file("example.txt", "0.0 0.0 0.0\n1.0 1.0 2.0\n-1.0 0.5 1.5\n");
    let points = XyzReader::read_point_set(&path).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0], Point3f::new(0.0, 0.0, 0.0));
    assert_eq!(points[1], Point3f::new(1.0, 1.0, 2.0));
    assert_eq!(points[2], Point3f::new(-1.0, 0.5, 1.5));

    // z span that drives the color scale is taken from the unmodified rows
    let bounds = points.bounds().unwrap();
    assert_eq!(bounds.min.z, 0.0);
    assert_eq!(bounds.max.z, 2.0);

    let _ = fs::remove_file(path);
}

#[test]
fn single_row_file_loads_as_one_point() {
    let path = temp_file("single.txt", "0.5 -0.5 2.5\n");
    let points = XyzReader::read_point_set(&path).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0], Point3f::new(0.5, -0.5, 2.5));
    let _ = fs::remove_file(path);
}

#[test]
fn empty_file_is_empty_input() {
    let path = temp_file("empty.txt", "");
    let err = XyzReader::read_point_set(&path).unwrap_err();
    assert!(matches!(err, Error::EmptyInput { .. }));
    let _ = fs::remove_file(path);
}

#[test]
fn whitespace_only_file_is_empty_input() {
    let path = temp_file("blank.txt", "\n   \n\t\n");
    let err = XyzReader::read_point_set(&path).unwrap_err();
    assert!(matches!(err, Error::EmptyInput { .. }));
    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_is_missing_input() {
    let path = std::env::temp_dir().join("pointview-io-does-not-exist.txt");
    let err = XyzReader::read_point_set(&path).unwrap_err();
    match err {
        Error::MissingInput { path: reported } => {
            assert!(reported.contains("does-not-exist"));
        }
        other => panic!("expected MissingInput, got {other:?}"),
    }
}

#[test]
fn malformed_file_reports_offending_line() {
    let path = temp_file("malformed.txt", "1.0 2.0 3.0\n1.0 abc 3.0\n");
    let err = XyzReader::read_point_set(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { line: 2, .. }));
    let _ = fs::remove_file(path);
}

#[test]
fn generated_points_round_trip_unaltered() {
    let mut rng = StdRng::seed_from_u64(0x9e3779b9);
    let triples: Vec<[f32; 3]> = (0..64)
        .map(|_| {
            [
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            ]
        })
        .collect();

    let contents: String = triples
        .iter()
        .map(|[x, y, z]| format!("{x} {y} {z}\n"))
        .collect();
    let path = temp_file("roundtrip.txt", &contents);

    let points = XyzReader::read_point_set(&path).unwrap();
    assert_eq!(points.len(), triples.len());
    for (point, [x, y, z]) in points.iter().zip(&triples) {
        // f32 Display output re-parses to the identical value
        assert_eq!(point.x, *x);
        assert_eq!(point.y, *y);
        assert_eq!(point.z, *z);
    }

    let _ = fs::remove_file(path);
}
