//! Cross-recipe aggregation.
//!
//! Per-recipe evaluation fans out over recipes with rayon and is
//! collected in recipe order; every rollup (project evaluation,
//! statistics, distributions, summaries) runs on the collected results.
//!
//! Note the difference between evaluating a [`Project`] as one container
//! (`evaluator.evaluate(&project)`, which pools every fact) and
//! [`project_evaluation`], which pools only recipes where the metric is
//! available.

mod diff;
mod statistics;
mod summary;
mod treemap;

use std::collections::BTreeMap;

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::Configuration;
use crate::container::{Project, Recipe};
use crate::metrics::{Distribution, Evaluation, Evaluator, Metric};

pub use diff::{BuildDiff, MetricDelta, compare};
pub use statistics::{Statistics, statistics};
pub use summary::{
    DataSummary, EvaluationSummary, evaluation_summaries, file_summaries, recipe_summaries,
};
pub use treemap::{Grade, TreemapEntry, overall_treemap, ratio_to_grade, treemap};

/// Evaluate `evaluator` on every recipe, in recipe order.
pub fn recipe_evaluations<'a>(
    project: &'a Project,
    evaluator: &Evaluator,
) -> Vec<(&'a Recipe, Evaluation)> {
    project
        .recipes()
        .par_iter()
        .map(|r| (r, evaluator.evaluate(r)))
        .collect()
}

/// Sum numerators and denominators over the recipes where the metric is
/// available, and qualify the sums against the evaluator's threshold.
pub fn project_evaluation(project: &Project, evaluator: &Evaluator) -> Evaluation {
    let (available, numerator, denominator) = recipe_evaluations(project, evaluator)
        .into_iter()
        .filter(|(_, e)| e.is_available())
        .fold((false, 0, 0), |(_, n, d), (_, e)| {
            (true, n + e.numerator(), d + e.denominator())
        });
    Evaluation::new(
        available,
        numerator,
        denominator,
        evaluator.orientation(),
        evaluator.threshold(),
        evaluator.tolerance(),
    )
}

/// Component-wise sum of every recipe's distribution. Per-recipe rules
/// such as cache lookup deduplication apply before summing.
pub fn distribution(project: &Project, evaluator: &Evaluator) -> Distribution {
    project
        .recipes()
        .par_iter()
        .map(|r| evaluator.distribution(r))
        .collect::<Vec<_>>()
        .iter()
        .fold(Distribution::default(), |acc, d| acc.merge(d))
}

/// How many recipes measure and pass a metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecipeCount {
    pub available: u64,
    pub qualified: u64,
}

/// Per-metric recipe counts plus how many recipes ran unit tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualifiedRecipes {
    pub recipes: u64,
    pub tested: u64,
    pub metrics: BTreeMap<Metric, RecipeCount>,
}

impl QualifiedRecipes {
    pub fn get(&self, metric: Metric) -> RecipeCount {
        self.metrics.get(&metric).copied().unwrap_or_default()
    }
}

pub fn qualified_recipes(project: &Project, config: &Configuration) -> QualifiedRecipes {
    let metrics: BTreeMap<Metric, RecipeCount> = Evaluator::all(config)
        .iter()
        .map(|evaluator| {
            let count = recipe_evaluations(project, evaluator).into_iter().fold(
                RecipeCount::default(),
                |acc, (_, e)| RecipeCount {
                    available: acc.available + u64::from(e.is_available()),
                    qualified: acc.qualified + u64::from(e.is_qualified()),
                },
            );
            (evaluator.metric(), count)
        })
        .collect();

    let counter = QualifiedRecipes {
        recipes: project.len() as u64,
        tested: metrics
            .get(&Metric::UnitTests)
            .map_or(0, |c| c.available),
        metrics,
    };
    info!(
        "{} recipes, {} with unit tests",
        counter.recipes, counter.tested
    );
    counter
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
