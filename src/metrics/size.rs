//! Code size totals and their change between two builds.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::container::FactContainer;
use crate::facts::{Fact, FactKind};

/// Totals over every `CodeSize` fact of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSizeSummary {
    pub recipes: u64,
    pub files: u64,
    pub lines: u64,
    pub functions: u64,
    pub classes: u64,
}

impl CodeSizeSummary {
    pub fn of(c: &dyn FactContainer) -> Self {
        let mut recipes = BTreeSet::new();
        let mut files = BTreeSet::new();
        let mut summary = Self::default();
        for fact in c.query(FactKind::CodeSize) {
            if let Fact::CodeSize(s) = fact {
                recipes.insert(s.recipe.as_str());
                files.insert((s.recipe.as_str(), s.file.as_str()));
                summary.lines += s.lines;
                summary.functions += s.functions;
                summary.classes += s.classes;
            }
        }
        summary.recipes = recipes.len() as u64;
        summary.files = files.len() as u64;
        summary
    }
}

/// Signed change of each code size total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSizeDelta {
    pub recipes: i64,
    pub files: i64,
    pub lines: i64,
    pub functions: i64,
    pub classes: i64,
}

impl CodeSizeDelta {
    /// Change from `previous` to `current`. A missing side counts as zero.
    pub fn between(previous: Option<&CodeSizeSummary>, current: Option<&CodeSizeSummary>) -> Self {
        let before = previous.copied().unwrap_or_default();
        let after = current.copied().unwrap_or_default();
        let diff = |a: u64, b: u64| a as i64 - b as i64;
        Self {
            recipes: diff(after.recipes, before.recipes),
            files: diff(after.files, before.files),
            lines: diff(after.lines, before.lines),
            functions: diff(after.functions, before.functions),
            classes: diff(after.classes, before.classes),
        }
    }
}
