use std::error::Error;

use metashift::{
    BuildStatus, BuildStatusResolver, Configuration, FactContainer, Project, StatusReport,
};

use crate::report_helpers::{format_ratio, print_json_stdout, separator};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn colored_status(status: BuildStatus) -> String {
    match status {
        BuildStatus::Ok => format!("{GREEN}{status}{RESET}"),
        BuildStatus::Degraded => format!("{RED}{status}{RESET}"),
    }
}

/// Resolve and print the verdict. Returns it so the caller can pick the
/// exit status.
pub fn run(
    project: &Project,
    config: &Configuration,
    json: bool,
) -> Result<BuildStatus, Box<dyn Error>> {
    let report = BuildStatusResolver::new(config).resolve(project);
    if json {
        print_json_stdout(&report)?;
    } else {
        print_report(project, &report);
    }
    Ok(report.combined())
}

fn print_report(project: &Project, report: &StatusReport) {
    let separator = separator(60);

    println!("Build Status: {BOLD}{}{RESET}", project.name());
    println!("{separator}");
    println!(
        " {:<20} {:>10}   {:<13}   {:<8}",
        "Metric", "Ratio", "Mode", "State"
    );
    println!("{separator}");
    for s in report.metrics() {
        let mode = if s.fatal { "fatal" } else { "informational" };
        let state = if s.evaluation.is_available() {
            colored_status(s.status)
        } else {
            "n/a".to_string()
        };
        println!(
            " {:<20} {:>10}   {:<13}   {}",
            s.metric.label(),
            format_ratio(&s.evaluation),
            mode,
            state,
        );
    }
    println!("{separator}");
    println!(" Combined: {}", colored_status(report.combined()));
    let degraded: Vec<&str> = report.degraded().map(|s| s.metric.label()).collect();
    if !degraded.is_empty() {
        println!(" Degraded by: {}", degraded.join(", "));
    }
}
