use std::collections::BTreeMap;
use std::error::Error;

use serde::Serialize;

use metashift::aggregate::{
    DataSummary, Statistics, distribution, file_summaries, project_evaluation, recipe_summaries,
    statistics,
};
use metashift::dups::clone_locations;
use metashift::metrics::Distribution;
use metashift::{Configuration, Evaluation, Evaluator, FactContainer, Metric, Project};

use crate::report_helpers::{
    format_ratio, format_thousands, max_name_width, print_json_stdout, qualified_mark, separator,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary<'a> {
    metric: Metric,
    scope: &'a str,
    evaluation: Evaluation,
    distribution: Distribution,
    statistics: Option<Statistics>,
    rows: Vec<DataSummary>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    copies: BTreeMap<String, Vec<String>>,
}

/// Other locations of each file's duplicated blocks, as `recipe:file`.
pub(crate) fn copies_of(recipe: &dyn FactContainer) -> BTreeMap<String, Vec<String>> {
    clone_locations(recipe)
        .into_iter()
        .map(|((_, file), there)| {
            let places = there
                .into_iter()
                .map(|(recipe, file)| format!("{recipe}:{file}"))
                .collect();
            (file.to_string(), places)
        })
        .collect()
}

/// Summarize one metric per recipe, or per file of `recipe`.
pub fn run(
    project: &Project,
    config: &Configuration,
    metric: Metric,
    recipe: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let evaluator = Evaluator::new(metric, config);
    let summary = match recipe {
        Some(name) => {
            let recipe = project
                .get(name)
                .ok_or_else(|| format!("no recipe named '{name}' in {}", project.name()))?;
            JsonSummary {
                metric,
                scope: recipe.name(),
                evaluation: evaluator.evaluate(recipe),
                distribution: evaluator.distribution(recipe),
                statistics: None,
                rows: file_summaries(recipe, &evaluator),
                copies: if metric == Metric::Duplications {
                    copies_of(recipe)
                } else {
                    BTreeMap::new()
                },
            }
        }
        None => JsonSummary {
            metric,
            scope: project.name(),
            evaluation: project_evaluation(project, &evaluator),
            distribution: distribution(project, &evaluator),
            statistics: statistics(project, &evaluator),
            rows: recipe_summaries(project, &evaluator),
            copies: BTreeMap::new(),
        },
    };

    if json {
        print_json_stdout(&summary)?;
    } else {
        print_report(&summary);
    }
    Ok(())
}

pub(crate) fn format_distribution(d: &Distribution) -> String {
    d.parts()
        .iter()
        .map(|p| {
            format!(
                "{} {} ({:.1}%)",
                p.label,
                format_thousands(p.count),
                d.share(p.label) * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report(summary: &JsonSummary) {
    let separator = separator(78);
    let width = max_name_width(summary.rows.iter().map(|r| r.name.as_str()), 6).min(40);

    println!("{}: {}", summary.metric.label(), summary.scope);
    println!("{separator}");
    println!(
        " Ratio: {} {}   ({})",
        format_ratio(&summary.evaluation),
        qualified_mark(&summary.evaluation),
        format_distribution(&summary.distribution),
    );
    if let Some(s) = &summary.statistics {
        println!(
            " Recipes: {}   min {:.3}   avg {:.3}   max {:.3}   threshold {:.3}",
            s.count, s.min, s.average, s.max, s.threshold
        );
    }
    println!("{separator}");

    if summary.rows.is_empty() {
        println!(" No entries.");
        return;
    }
    println!(
        " {:<width$} {:>8} {:>10}  {}",
        "Name", "LOC", "Ratio", "Distribution"
    );
    println!("{separator}");
    for row in &summary.rows {
        let name = if row.name.chars().count() > width {
            let tail: String = row.name.chars().rev().take(width - 3).collect();
            format!("...{}", tail.chars().rev().collect::<String>())
        } else {
            row.name.clone()
        };
        println!(
            " {:<width$} {:>8} {:>9}{} {}",
            name,
            format_thousands(row.lines_of_code),
            format_ratio(&row.evaluation),
            qualified_mark(&row.evaluation),
            format_distribution(&row.distribution),
        );
    }
    println!("{separator}");

    if !summary.copies.is_empty() {
        println!(" Copies of duplicated blocks:");
        for (file, places) in &summary.copies {
            println!("   {file} -> {}", places.join(", "));
        }
        println!("{separator}");
    }
}
