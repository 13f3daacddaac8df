//! Comparison of two builds of the same project.
//!
//! Produces a `BuildDiff` with the code size change and, per metric, the
//! before/after project evaluation with a signed ratio delta.

use serde::Serialize;

use super::project_evaluation;
use crate::config::Configuration;
use crate::container::Project;
use crate::metrics::{CodeSizeDelta, CodeSizeSummary, Evaluation, Evaluator, Metric, Orientation};

/// Before/after ratio of one metric. A side is `None` when the metric
/// was unavailable in that build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub metric: Metric,
    pub before: Option<f64>,
    pub after: Option<f64>,
    pub before_qualified: bool,
    pub after_qualified: bool,
}

impl MetricDelta {
    /// Signed change of the ratio, when both builds measured the metric.
    pub fn delta(&self) -> Option<f64> {
        Some(self.after? - self.before?)
    }

    /// True when the ratio moved in the metric's good direction.
    pub fn improved(&self) -> bool {
        match (self.delta(), self.metric.orientation()) {
            (Some(d), Orientation::Positive) => d > 0.0,
            (Some(d), Orientation::Negative) => d < 0.0,
            (None, _) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDiff {
    pub size_before: CodeSizeSummary,
    pub size_after: CodeSizeSummary,
    pub size: CodeSizeDelta,
    pub metrics: Vec<MetricDelta>,
}

fn available_ratio(e: &Evaluation) -> Option<f64> {
    e.is_available().then(|| e.ratio())
}

/// Compare the project evaluations of two builds.
pub fn compare(previous: &Project, current: &Project, config: &Configuration) -> BuildDiff {
    let size_before = CodeSizeSummary::of(previous);
    let size_after = CodeSizeSummary::of(current);
    let metrics = Evaluator::all(config)
        .iter()
        .map(|evaluator| {
            let before = project_evaluation(previous, evaluator);
            let after = project_evaluation(current, evaluator);
            MetricDelta {
                metric: evaluator.metric(),
                before: available_ratio(&before),
                after: available_ratio(&after),
                before_qualified: before.is_qualified(),
                after_qualified: after.is_qualified(),
            }
        })
        .collect();

    BuildDiff {
        size_before,
        size_after,
        size: CodeSizeDelta::between(Some(&size_before), Some(&size_after)),
        metrics,
    }
}
