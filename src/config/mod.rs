//! Evaluation criteria: one threshold and one fatal toggle per metric,
//! plus the tolerances that pre-filter complexity and duplication samples.
//!
//! Percentage thresholds are whole numbers in `0..=100`; violation
//! thresholds are densities (violations per line). A `*_fatal` toggle
//! makes an unqualified metric degrade the build instead of only being
//! reported.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::Metric;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(default = "default_cache_threshold")]
    pub premirror_cache_threshold: u32,
    #[serde(default)]
    pub premirror_cache_fatal: bool,

    #[serde(default = "default_cache_threshold")]
    pub shared_state_cache_threshold: u32,
    #[serde(default)]
    pub shared_state_cache_fatal: bool,

    /// Maximum recipe violations per recipe line.
    #[serde(default = "default_violation_density")]
    pub recipe_violations_threshold: f64,
    #[serde(default)]
    pub recipe_violations_fatal: bool,

    #[serde(default = "default_comments_threshold")]
    pub comments_threshold: u32,
    #[serde(default)]
    pub comments_fatal: bool,

    /// Maximum code violations per source line.
    #[serde(default = "default_violation_density")]
    pub code_violations_threshold: f64,
    #[serde(default)]
    pub code_violations_fatal: bool,

    /// Functions at or above this complexity count as complex.
    #[serde(default = "default_tolerance")]
    pub complexity_tolerance: u64,
    #[serde(default = "default_negative_threshold")]
    pub complexity_threshold: u32,
    #[serde(default)]
    pub complexity_fatal: bool,

    /// Duplicated blocks shorter than this are ignored.
    #[serde(default = "default_tolerance")]
    pub duplications_tolerance: u64,
    #[serde(default = "default_negative_threshold")]
    pub duplications_threshold: u32,
    #[serde(default)]
    pub duplications_fatal: bool,

    #[serde(default = "default_unit_tests_threshold")]
    pub unit_tests_threshold: u32,
    #[serde(default)]
    pub unit_tests_fatal: bool,

    #[serde(default = "default_statement_coverage_threshold")]
    pub statement_coverage_threshold: u32,
    #[serde(default)]
    pub statement_coverage_fatal: bool,

    #[serde(default = "default_branch_coverage_threshold")]
    pub branch_coverage_threshold: u32,
    #[serde(default)]
    pub branch_coverage_fatal: bool,

    #[serde(default = "default_mutation_tests_threshold")]
    pub mutation_tests_threshold: u32,
    #[serde(default)]
    pub mutation_tests_fatal: bool,
}

fn default_cache_threshold() -> u32 {
    80
}

fn default_violation_density() -> f64 {
    0.1
}

fn default_comments_threshold() -> u32 {
    20
}

fn default_tolerance() -> u64 {
    10
}

fn default_negative_threshold() -> u32 {
    10
}

fn default_unit_tests_threshold() -> u32 {
    95
}

fn default_statement_coverage_threshold() -> u32 {
    80
}

fn default_branch_coverage_threshold() -> u32 {
    40
}

fn default_mutation_tests_threshold() -> u32 {
    85
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            premirror_cache_threshold: default_cache_threshold(),
            premirror_cache_fatal: false,
            shared_state_cache_threshold: default_cache_threshold(),
            shared_state_cache_fatal: false,
            recipe_violations_threshold: default_violation_density(),
            recipe_violations_fatal: false,
            comments_threshold: default_comments_threshold(),
            comments_fatal: false,
            code_violations_threshold: default_violation_density(),
            code_violations_fatal: false,
            complexity_tolerance: default_tolerance(),
            complexity_threshold: default_negative_threshold(),
            complexity_fatal: false,
            duplications_tolerance: default_tolerance(),
            duplications_threshold: default_negative_threshold(),
            duplications_fatal: false,
            unit_tests_threshold: default_unit_tests_threshold(),
            unit_tests_fatal: false,
            statement_coverage_threshold: default_statement_coverage_threshold(),
            statement_coverage_fatal: false,
            branch_coverage_threshold: default_branch_coverage_threshold(),
            branch_coverage_fatal: false,
            mutation_tests_threshold: default_mutation_tests_threshold(),
            mutation_tests_fatal: false,
        }
    }
}

impl Configuration {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reject percentages above 100 and densities that are negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("premirror_cache_threshold", self.premirror_cache_threshold),
            (
                "shared_state_cache_threshold",
                self.shared_state_cache_threshold,
            ),
            ("comments_threshold", self.comments_threshold),
            ("complexity_threshold", self.complexity_threshold),
            ("duplications_threshold", self.duplications_threshold),
            ("unit_tests_threshold", self.unit_tests_threshold),
            (
                "statement_coverage_threshold",
                self.statement_coverage_threshold,
            ),
            ("branch_coverage_threshold", self.branch_coverage_threshold),
            ("mutation_tests_threshold", self.mutation_tests_threshold),
        ];
        for (field, value) in percentages {
            if value > 100 {
                return Err(Error::invalid_config(
                    field,
                    format!("{value} is not a percentage (0-100)"),
                ));
            }
        }

        let densities = [
            ("recipe_violations_threshold", self.recipe_violations_threshold),
            ("code_violations_threshold", self.code_violations_threshold),
        ];
        for (field, value) in densities {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(
                    field,
                    format!("{value} is not a non-negative density"),
                ));
            }
        }
        Ok(())
    }

    /// Threshold of `metric` as a fraction, or as a density for the
    /// violation metrics.
    pub fn threshold(&self, metric: Metric) -> f64 {
        let percent = match metric {
            Metric::PremirrorCache => self.premirror_cache_threshold,
            Metric::SharedStateCache => self.shared_state_cache_threshold,
            Metric::RecipeViolations => return self.recipe_violations_threshold,
            Metric::Comments => self.comments_threshold,
            Metric::CodeViolations => return self.code_violations_threshold,
            Metric::Complexity => self.complexity_threshold,
            Metric::Duplications => self.duplications_threshold,
            Metric::UnitTests => self.unit_tests_threshold,
            Metric::StatementCoverage => self.statement_coverage_threshold,
            Metric::BranchCoverage => self.branch_coverage_threshold,
            Metric::MutationTests => self.mutation_tests_threshold,
        };
        f64::from(percent) / 100.0
    }

    /// Sample pre-filter of `metric`; zero for metrics without one.
    pub fn tolerance(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Complexity => self.complexity_tolerance,
            Metric::Duplications => self.duplications_tolerance,
            _ => 0,
        }
    }

    pub fn is_fatal(&self, metric: Metric) -> bool {
        match metric {
            Metric::PremirrorCache => self.premirror_cache_fatal,
            Metric::SharedStateCache => self.shared_state_cache_fatal,
            Metric::RecipeViolations => self.recipe_violations_fatal,
            Metric::Comments => self.comments_fatal,
            Metric::CodeViolations => self.code_violations_fatal,
            Metric::Complexity => self.complexity_fatal,
            Metric::Duplications => self.duplications_fatal,
            Metric::UnitTests => self.unit_tests_fatal,
            Metric::StatementCoverage => self.statement_coverage_fatal,
            Metric::BranchCoverage => self.branch_coverage_fatal,
            Metric::MutationTests => self.mutation_tests_fatal,
        }
    }

    pub fn with_fatal(mut self, metric: Metric, fatal: bool) -> Self {
        let slot = match metric {
            Metric::PremirrorCache => &mut self.premirror_cache_fatal,
            Metric::SharedStateCache => &mut self.shared_state_cache_fatal,
            Metric::RecipeViolations => &mut self.recipe_violations_fatal,
            Metric::Comments => &mut self.comments_fatal,
            Metric::CodeViolations => &mut self.code_violations_fatal,
            Metric::Complexity => &mut self.complexity_fatal,
            Metric::Duplications => &mut self.duplications_fatal,
            Metric::UnitTests => &mut self.unit_tests_fatal,
            Metric::StatementCoverage => &mut self.statement_coverage_fatal,
            Metric::BranchCoverage => &mut self.branch_coverage_fatal,
            Metric::MutationTests => &mut self.mutation_tests_fatal,
        };
        *slot = fatal;
        self
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
