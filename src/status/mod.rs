//! Build status resolution.
//!
//! Each metric is either informational or fatal. A fatal metric that was
//! measured and failed its threshold degrades the build; the combined
//! verdict is the worst of the eleven per-metric states.

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::aggregate::project_evaluation;
use crate::config::Configuration;
use crate::container::{FactContainer, Project};
use crate::metrics::{Evaluation, Evaluator, Metric};

/// Verdict of one metric or of the whole build, ordered `Ok < Degraded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildStatus {
    #[default]
    Ok,
    Degraded,
}

impl BuildStatus {
    /// The worse of two verdicts.
    pub fn combine(self, other: BuildStatus) -> BuildStatus {
        self.max(other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Degraded => "DEGRADED",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStatus {
    pub metric: Metric,
    pub evaluation: Evaluation,
    pub fatal: bool,
    pub status: BuildStatus,
}

impl MetricStatus {
    pub fn new(metric: Metric, evaluation: Evaluation, fatal: bool) -> Self {
        let degraded = fatal && evaluation.is_available() && !evaluation.is_qualified();
        Self {
            metric,
            evaluation,
            fatal,
            status: if degraded {
                BuildStatus::Degraded
            } else {
                BuildStatus::Ok
            },
        }
    }
}

/// Worst-of-N over per-metric states. An empty list is `Ok`.
pub fn fold<'a>(statuses: impl IntoIterator<Item = &'a MetricStatus>) -> BuildStatus {
    statuses
        .into_iter()
        .fold(BuildStatus::Ok, |acc, s| acc.combine(s.status))
}

/// Every metric's state plus the combined verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    combined: BuildStatus,
    metrics: Vec<MetricStatus>,
}

impl StatusReport {
    pub fn new(metrics: Vec<MetricStatus>) -> Self {
        Self {
            combined: fold(&metrics),
            metrics,
        }
    }

    pub fn combined(&self) -> BuildStatus {
        self.combined
    }

    pub fn metrics(&self) -> &[MetricStatus] {
        &self.metrics
    }

    pub fn get(&self, metric: Metric) -> Option<&MetricStatus> {
        self.metrics.iter().find(|s| s.metric == metric)
    }

    /// Metrics that degrade the build.
    pub fn degraded(&self) -> impl Iterator<Item = &MetricStatus> {
        self.metrics
            .iter()
            .filter(|s| s.status == BuildStatus::Degraded)
    }
}

pub struct BuildStatusResolver {
    evaluators: Vec<(Evaluator, bool)>,
}

impl BuildStatusResolver {
    pub fn new(config: &Configuration) -> Self {
        Self {
            evaluators: Evaluator::all(config)
                .into_iter()
                .map(|e| (e, config.is_fatal(e.metric())))
                .collect(),
        }
    }

    /// Evaluate all eleven metrics over the project, even once one has
    /// degraded the build.
    pub fn resolve(&self, project: &Project) -> StatusReport {
        let statuses: Vec<MetricStatus> = self
            .evaluators
            .iter()
            .map(|(evaluator, fatal)| {
                let evaluation = project_evaluation(project, evaluator);
                let status = MetricStatus::new(evaluator.metric(), evaluation, *fatal);
                debug!("{}: {} (fatal={})", status.metric, status.status, status.fatal);
                status
            })
            .collect();
        let report = StatusReport::new(statuses);
        info!("{}: build status {}", project.name(), report.combined());
        report
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
