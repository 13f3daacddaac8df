use serde::Serialize;

use super::recipe_evaluations;
use crate::container::Project;
use crate::metrics::Evaluator;

/// Min, average and max of the ratios of the recipes where a metric is
/// available, next to the threshold they are judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub min: f64,
    pub average: f64,
    pub max: f64,
    pub count: usize,
    pub threshold: f64,
}

impl Statistics {
    /// `None` when there are no ratios: no data is not the same as zero.
    pub fn from_ratios(ratios: impl IntoIterator<Item = f64>, threshold: f64) -> Option<Self> {
        let mut count = 0;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for ratio in ratios {
            count += 1;
            sum += ratio;
            min = min.min(ratio);
            max = max.max(ratio);
        }
        (count > 0).then(|| Self {
            min,
            average: sum / count as f64,
            max,
            count,
            threshold,
        })
    }
}

/// Statistics of one metric across the recipes of a project. Recipes
/// where the metric is unavailable are left out, not counted as zero.
pub fn statistics(project: &Project, evaluator: &Evaluator) -> Option<Statistics> {
    let ratios = recipe_evaluations(project, evaluator)
        .into_iter()
        .filter(|(_, e)| e.is_available())
        .map(|(_, e)| e.ratio());
    Statistics::from_ratios(ratios, evaluator.threshold())
}
