use std::error::Error;

use metashift::aggregate::{Grade, TreemapEntry, overall_treemap, treemap};
use metashift::{Configuration, Evaluator, Metric, Project};

use crate::report_helpers::{format_thousands, max_name_width, print_json_stdout, separator};

pub fn run(
    project: &Project,
    config: &Configuration,
    metric: Option<Metric>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let entries = match metric {
        Some(m) => treemap(project, &Evaluator::new(m, config)),
        None => overall_treemap(project, config),
    };
    if json {
        print_json_stdout(&entries)
    } else {
        let title = metric.map_or("Qualified Metrics", Metric::label);
        print_report(title, &entries);
        Ok(())
    }
}

fn print_report(title: &str, entries: &[TreemapEntry]) {
    let separator = separator(60);
    let width = max_name_width(entries.iter().map(|e| e.name.as_str()), 6).min(36);

    println!("Treemap: {title}");
    println!("{separator}");
    println!(" {:<width$} {:>8} {:>7}  {:<8}", "Recipe", "LOC", "Value", "Grade");
    println!("{separator}");
    for e in entries {
        println!(
            " {:<width$} {:>8} {:>7.3}  {:<8}",
            e.name,
            format_thousands(e.lines_of_code),
            e.value,
            e.grade.map_or("-", Grade::as_str),
        );
    }
    println!("{separator}");
}
