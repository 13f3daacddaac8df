use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::Configuration;
use crate::container::{FactContainer, Project};
use crate::metrics::{Evaluation, Evaluator, Orientation, RecipeEvaluator};

/// Seven-step visualization bucket, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Best,
    Better,
    Good,
    Ordinary,
    Bad,
    Worse,
    Worst,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Self::Best,
        Self::Better,
        Self::Good,
        Self::Ordinary,
        Self::Bad,
        Self::Worse,
        Self::Worst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Best => "BEST",
            Self::Better => "BETTER",
            Self::Good => "GOOD",
            Self::Ordinary => "ORDINARY",
            Self::Bad => "BAD",
            Self::Worse => "WORSE",
            Self::Worst => "WORST",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a ratio into one of seven grades.
///
/// Positive metrics: ratio 1.0 is `Best`, 0.5 is `Ordinary`, 0.0 is `Worst`.
/// Negative metrics: ratio 0.0 is `Best`, anything at or above 6/7 is
/// `Worst`. Each bucket spans 1/7 of the ratio range.
pub fn ratio_to_grade(ratio: f64, orientation: Orientation) -> Grade {
    let badness = match orientation {
        Orientation::Positive => 1.0 - ratio,
        Orientation::Negative => ratio,
    };
    let bucket = (badness * Grade::ALL.len() as f64).floor();
    if bucket.is_nan() || bucket <= 0.0 {
        Grade::Best
    } else {
        Grade::ALL[(bucket as usize).min(Grade::ALL.len() - 1)]
    }
}

/// One tile of a treemap: area from lines of code, color from grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapEntry {
    pub name: String,
    pub lines_of_code: u64,
    pub value: f64,
    /// `None` when the metric is unavailable for this recipe.
    pub grade: Option<Grade>,
}

impl TreemapEntry {
    fn of(c: &dyn FactContainer, evaluation: &Evaluation) -> Self {
        Self {
            name: c.name().to_string(),
            lines_of_code: c.lines_of_code(),
            value: evaluation.ratio(),
            grade: evaluation
                .is_available()
                .then(|| ratio_to_grade(evaluation.ratio(), evaluation.orientation())),
        }
    }
}

/// One entry per recipe, including recipes without code or without the
/// metric.
pub fn treemap(project: &Project, evaluator: &Evaluator) -> Vec<TreemapEntry> {
    project
        .recipes()
        .par_iter()
        .map(|r| TreemapEntry::of(r, &evaluator.evaluate(r)))
        .collect()
}

/// Treemap of the fraction of qualified metrics per recipe.
pub fn overall_treemap(project: &Project, config: &Configuration) -> Vec<TreemapEntry> {
    let evaluator = RecipeEvaluator::new(config);
    project
        .recipes()
        .par_iter()
        .map(|r| TreemapEntry::of(r, &evaluator.evaluate(r)))
        .collect()
}
