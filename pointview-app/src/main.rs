//! Scatter display for producer-generated point files.
//!
//! Reads `points.txt` from the working directory and shows the points in an
//! interactive 3D window. All failures are reported as printed diagnostics
//! and a non-zero exit status; nothing escapes as a panic.

use std::process::ExitCode;

use pointview_core::Error;
use pointview_io::XyzReader;
use pointview_visualization::{show, ViewerConfig};

/// Fixed handoff path written by the point generator
const INPUT_PATH: &str = "points.txt";

fn main() -> ExitCode {
    println!("Reading points from {INPUT_PATH}...");
    let points = match XyzReader::read_point_set(INPUT_PATH) {
        Ok(points) => points,
        Err(err) => return fail(&err),
    };

    if let Some(bounds) = points.bounds() {
        println!(
            "Loaded {} points (z range {:.3} to {:.3})",
            points.len(),
            bounds.min.z,
            bounds.max.z
        );
    }

    println!("Creating 3D visualization...");
    print_controls();

    if let Err(err) = show(&points, &ViewerConfig::default()) {
        return fail(&err);
    }

    println!("Visualization finished.");
    ExitCode::SUCCESS
}

fn fail(err: &Error) -> ExitCode {
    for line in failure_report(err) {
        println!("{line}");
    }
    ExitCode::FAILURE
}

/// Diagnostic lines for a failed run, one message per error kind
fn failure_report(err: &Error) -> Vec<String> {
    match err {
        Error::MissingInput { path } => vec![
            format!("Error: {path} was not found."),
            "Run the point generator first so it can write its output.".to_string(),
        ],
        Error::EmptyInput { path } => {
            vec![format!("{path} is empty; there is nothing to plot.")]
        }
        other => vec![format!("Error while plotting: {other}")],
    }
}

fn print_controls() {
    println!("Controls:");
    println!("  Drag:        orbit around the points");
    println!("  Right-drag:  pan");
    println!("  Scroll:      zoom");
    println!("  R:           reset the view");
    println!("  Close the window to exit");
}
