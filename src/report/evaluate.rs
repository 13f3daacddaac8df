use std::error::Error;

use serde::Serialize;

use metashift::aggregate::{
    EvaluationSummary, QualifiedRecipes, evaluation_summaries, project_evaluation,
    qualified_recipes,
};
use metashift::metrics::CodeSizeSummary;
use metashift::{
    Configuration, Evaluation, Evaluator, FactContainer, Metric, Orientation, Project,
    RecipeEvaluator,
};

use crate::report_helpers::{
    format_ratio, format_thousands, max_name_width, print_json_stdout, qualified_mark, separator,
};

/// Project-level evaluation of one metric with its recipe counts.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectMetric {
    pub metric: Metric,
    pub evaluation: Evaluation,
    pub recipes_available: u64,
    pub recipes_qualified: u64,
}

pub(crate) fn project_metrics(project: &Project, config: &Configuration) -> Vec<ProjectMetric> {
    let counts: QualifiedRecipes = qualified_recipes(project, config);
    Evaluator::all(config)
        .iter()
        .map(|evaluator| {
            let count = counts.get(evaluator.metric());
            ProjectMetric {
                metric: evaluator.metric(),
                evaluation: project_evaluation(project, evaluator),
                recipes_available: count.available,
                recipes_qualified: count.qualified,
            }
        })
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonEvaluation<'a> {
    project: &'a str,
    size: CodeSizeSummary,
    metrics: Vec<ProjectMetric>,
    recipes: Vec<EvaluationSummary>,
}

pub fn run(project: &Project, config: &Configuration, json: bool) -> Result<(), Box<dyn Error>> {
    let metrics = project_metrics(project, config);
    if json {
        return print_json_stdout(&JsonEvaluation {
            project: project.name(),
            size: CodeSizeSummary::of(project),
            metrics,
            recipes: evaluation_summaries(project, config),
        });
    }
    print_report(project, config, &metrics);
    Ok(())
}

fn print_report(project: &Project, config: &Configuration, metrics: &[ProjectMetric]) {
    let separator = separator(72);
    let size = CodeSizeSummary::of(project);

    println!("Quality Evaluation: {}", project.name());
    println!("{separator}");
    println!(
        " Recipes: {}   Files: {}   LOC: {}   Functions: {}",
        project.len(),
        format_thousands(size.files),
        format_thousands(size.lines),
        format_thousands(size.functions),
    );
    println!("{separator}");
    println!(
        " {:<20} {:>10} {:>10}   {:<3} {:>9}",
        "Metric", "Ratio", "Threshold", "", "Recipes"
    );
    println!("{separator}");
    for m in metrics {
        println!(
            " {:<20} {:>10} {:>10}   {:<3} {:>4}/{:<4}",
            m.metric.label(),
            format_ratio(&m.evaluation),
            format_threshold(&m.evaluation),
            qualified_mark(&m.evaluation),
            m.recipes_qualified,
            m.recipes_available,
        );
    }
    println!("{separator}");

    let overall = RecipeEvaluator::new(config);
    let width = max_name_width(project.iter().map(|r| r.name()), 6).min(40);
    println!();
    println!(" {:<width$} {:>10} {:>10}", "Recipe", "LOC", "Qualified");
    println!("{separator}");
    for recipe in project {
        let e = overall.evaluate(recipe);
        println!(
            " {:<width$} {:>10} {:>6}/{:<3}",
            recipe.name(),
            format_thousands(recipe.lines_of_code()),
            e.numerator(),
            e.denominator(),
        );
    }
    println!("{separator}");
}

fn format_threshold(e: &Evaluation) -> String {
    match e.orientation() {
        Orientation::Positive => format!(">={:.0}%", e.threshold() * 100.0),
        Orientation::Negative => format!("<={:.3}", e.threshold()),
    }
}
