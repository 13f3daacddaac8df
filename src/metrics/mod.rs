//! The eleven quality metrics and their evaluation.
//!
//! Every metric is evaluated by the same [`Evaluator`]: a rule from the
//! catalog in `rules.rs` (numerator, denominator, availability) bound to
//! the configured threshold and tolerance. Evaluations are recomputed on
//! every call; nothing is cached on the containers.

mod distribution;
mod evaluation;
mod overall;
mod rules;
mod size;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::config::Configuration;
use crate::container::FactContainer;

pub use distribution::{Distribution, Part};
pub use evaluation::{Evaluation, Orientation};
pub use overall::RecipeEvaluator;
pub use size::{CodeSizeDelta, CodeSizeSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    PremirrorCache,
    SharedStateCache,
    RecipeViolations,
    Comments,
    CodeViolations,
    Complexity,
    Duplications,
    UnitTests,
    StatementCoverage,
    BranchCoverage,
    MutationTests,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Self::PremirrorCache,
        Self::SharedStateCache,
        Self::RecipeViolations,
        Self::Comments,
        Self::CodeViolations,
        Self::Complexity,
        Self::Duplications,
        Self::UnitTests,
        Self::StatementCoverage,
        Self::BranchCoverage,
        Self::MutationTests,
    ];

    /// camelCase name used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PremirrorCache => "premirrorCache",
            Self::SharedStateCache => "sharedStateCache",
            Self::RecipeViolations => "recipeViolations",
            Self::Comments => "comments",
            Self::CodeViolations => "codeViolations",
            Self::Complexity => "complexity",
            Self::Duplications => "duplications",
            Self::UnitTests => "unitTests",
            Self::StatementCoverage => "statementCoverage",
            Self::BranchCoverage => "branchCoverage",
            Self::MutationTests => "mutationTests",
        }
    }

    /// Upper snake case name used in storage keys.
    pub fn key(self) -> &'static str {
        match self {
            Self::PremirrorCache => "PREMIRROR_CACHE",
            Self::SharedStateCache => "SHARED_STATE_CACHE",
            Self::RecipeViolations => "RECIPE_VIOLATIONS",
            Self::Comments => "COMMENTS",
            Self::CodeViolations => "CODE_VIOLATIONS",
            Self::Complexity => "COMPLEXITY",
            Self::Duplications => "DUPLICATIONS",
            Self::UnitTests => "UNIT_TESTS",
            Self::StatementCoverage => "STATEMENT_COVERAGE",
            Self::BranchCoverage => "BRANCH_COVERAGE",
            Self::MutationTests => "MUTATION_TESTS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PremirrorCache => "Premirror Cache",
            Self::SharedStateCache => "Shared State Cache",
            Self::RecipeViolations => "Recipe Violations",
            Self::Comments => "Comments",
            Self::CodeViolations => "Code Violations",
            Self::Complexity => "Complexity",
            Self::Duplications => "Duplications",
            Self::UnitTests => "Unit Tests",
            Self::StatementCoverage => "Statement Coverage",
            Self::BranchCoverage => "Branch Coverage",
            Self::MutationTests => "Mutation Tests",
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            Self::RecipeViolations
            | Self::CodeViolations
            | Self::Complexity
            | Self::Duplications => Orientation::Negative,
            _ => Orientation::Positive,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the camelCase name, the storage key, or kebab-case
/// (`unit-tests`).
impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown metric '{s}'"))
    }
}

/// One metric's rule bound to its threshold and tolerance.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    metric: Metric,
    rule: &'static rules::Rule,
    threshold: f64,
    tolerance: u64,
}

impl Evaluator {
    pub fn new(metric: Metric, config: &Configuration) -> Self {
        Self::with_threshold(metric, config.threshold(metric), config.tolerance(metric))
    }

    pub fn with_threshold(metric: Metric, threshold: f64, tolerance: u64) -> Self {
        Self {
            metric,
            rule: rules::rule(metric),
            threshold,
            tolerance,
        }
    }

    /// Evaluators for all eleven metrics, in catalog order.
    pub fn all(config: &Configuration) -> Vec<Evaluator> {
        Metric::ALL
            .into_iter()
            .map(|m| Self::new(m, config))
            .collect()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn orientation(&self) -> Orientation {
        self.metric.orientation()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    pub fn evaluate(&self, c: &dyn FactContainer) -> Evaluation {
        let available = self.rule.availability.check(c);
        let numerator = (self.rule.numerator)(c, self.tolerance);
        let denominator = (self.rule.denominator)(c, self.tolerance);
        let evaluation = Evaluation::new(
            available,
            numerator,
            denominator,
            self.orientation(),
            self.threshold,
            self.tolerance,
        );
        debug!(
            "{} {}: {}/{} available={} qualified={}",
            c.name(),
            self.metric,
            numerator,
            denominator,
            evaluation.is_available(),
            evaluation.is_qualified()
        );
        evaluation
    }

    pub fn distribution(&self, c: &dyn FactContainer) -> Distribution {
        (self.rule.distribution)(c, self.tolerance)
    }

    /// Files carrying this metric's facts; empty for metrics that are
    /// not tied to files (caches, unit tests).
    pub fn files<'a>(&self, c: &'a dyn FactContainer) -> BTreeSet<&'a str> {
        c.files(self.rule.file_kinds)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
