use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::Configuration;
use crate::container::{FactContainer, Project, Recipe};
use crate::metrics::{Distribution, Evaluation, Evaluator, Metric};

/// One metric's rollup for a recipe or for one file of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSummary {
    pub name: String,
    pub lines_of_code: u64,
    pub distribution: Distribution,
    pub evaluation: Evaluation,
}

impl DataSummary {
    pub fn of(c: &dyn FactContainer, evaluator: &Evaluator) -> Self {
        Self {
            name: c.name().to_string(),
            lines_of_code: c.lines_of_code(),
            distribution: evaluator.distribution(c),
            evaluation: evaluator.evaluate(c),
        }
    }
}

/// One summary per recipe, in recipe order.
pub fn recipe_summaries(project: &Project, evaluator: &Evaluator) -> Vec<DataSummary> {
    project
        .recipes()
        .par_iter()
        .map(|r| DataSummary::of(r, evaluator))
        .collect()
}

/// One summary per file carrying the metric's facts, sorted by file.
/// Empty for metrics not tied to files.
pub fn file_summaries(recipe: &Recipe, evaluator: &Evaluator) -> Vec<DataSummary> {
    evaluator
        .files(recipe)
        .into_iter()
        .map(|file| DataSummary::of(&recipe.file_view(file), evaluator))
        .collect()
}

/// Every metric's evaluation for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub name: String,
    pub lines_of_code: u64,
    #[serde(flatten)]
    pub evaluations: BTreeMap<Metric, Evaluation>,
}

impl EvaluationSummary {
    pub fn of(c: &dyn FactContainer, evaluators: &[Evaluator]) -> Self {
        Self {
            name: c.name().to_string(),
            lines_of_code: c.lines_of_code(),
            evaluations: evaluators
                .iter()
                .map(|e| (e.metric(), e.evaluate(c)))
                .collect(),
        }
    }

    pub fn get(&self, metric: Metric) -> Option<&Evaluation> {
        self.evaluations.get(&metric)
    }
}

pub fn evaluation_summaries(project: &Project, config: &Configuration) -> Vec<EvaluationSummary> {
    let evaluators = Evaluator::all(config);
    project
        .recipes()
        .par_iter()
        .map(|r| EvaluationSummary::of(r, &evaluators))
        .collect()
}
