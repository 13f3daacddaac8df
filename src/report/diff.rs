//! Build-over-build comparison output.
//!
//! Green for improvements, red for regressions, yellow for no change. The
//! direction of "better" follows each metric's orientation.

use std::error::Error;

use metashift::aggregate::{BuildDiff, MetricDelta, compare};
use metashift::{Configuration, FactContainer, Orientation, Project};

use crate::report_helpers::{print_json_stdout, separator};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Deltas smaller than this are shown as unchanged.
const EPSILON: f64 = 0.0005;

pub fn run(
    previous: &Project,
    current: &Project,
    config: &Configuration,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let diff = compare(previous, current, config);
    if json {
        print_json_stdout(&diff)
    } else {
        print_report(current.name(), &diff);
        Ok(())
    }
}

/// Format a signed integer delta with color and sign prefix.
fn colored_int_delta(delta: i64) -> String {
    if delta > 0 {
        format!("{GREEN}+{delta}{RESET}")
    } else if delta < 0 {
        format!("{RED}{delta}{RESET}")
    } else {
        format!("{YELLOW} 0{RESET}")
    }
}

/// Format a ratio delta, colored by whether it moved the good way.
pub(crate) fn colored_ratio_delta(m: &MetricDelta) -> String {
    let Some(delta) = m.delta() else {
        return "-".to_string();
    };
    if delta.abs() < EPSILON {
        return format!("{YELLOW} 0.000{RESET}");
    }
    let color = match (m.metric.orientation(), delta > 0.0) {
        (Orientation::Positive, true) | (Orientation::Negative, false) => GREEN,
        _ => RED,
    };
    format!("{color}{delta:+.3}{RESET}")
}

fn format_side(ratio: Option<f64>, qualified: bool) -> String {
    match ratio {
        Some(r) if qualified => format!("{r:.3} +"),
        Some(r) => format!("{r:.3} !"),
        None => "-".to_string(),
    }
}

fn print_report(name: &str, diff: &BuildDiff) {
    let separator = separator(64);

    println!("Build Diff: {BOLD}{name}{RESET}");
    println!("{separator}");
    println!(
        " Recipes: {} → {}  ({})    Files: {} → {}  ({})",
        diff.size_before.recipes,
        diff.size_after.recipes,
        colored_int_delta(diff.size.recipes),
        diff.size_before.files,
        diff.size_after.files,
        colored_int_delta(diff.size.files),
    );
    println!(
        " LOC: {} → {}  ({})    Functions: {} → {}  ({})",
        diff.size_before.lines,
        diff.size_after.lines,
        colored_int_delta(diff.size.lines),
        diff.size_before.functions,
        diff.size_after.functions,
        colored_int_delta(diff.size.functions),
    );
    println!("{separator}");
    println!(
        " {:<20} {:>10}   {:>10}   {:>8}",
        "Metric", "Before", "After", "Delta"
    );
    println!("{separator}");
    for m in &diff.metrics {
        println!(
            " {:<20} {:>10}   {:>10}   {}",
            m.metric.label(),
            format_side(m.before, m.before_qualified),
            format_side(m.after, m.after_qualified),
            colored_ratio_delta(m),
        );
    }
    println!("{separator}");
}
