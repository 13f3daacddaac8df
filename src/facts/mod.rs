//! Typed measurement records produced by the report parsers.
//!
//! A [`Fact`] is one immutable observation (a cache lookup, a covered
//! branch, a failed test, ...) tagged with the recipe it belongs to.
//! Every variant carries its own payload struct; [`FactKind`] is the tag
//! used by containers to index and query facts without inspecting them.

mod records;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use records::{
    CacheLookup, CodeSize, CommentCount, ComplexitySample, CoverageLine, DuplicateBlock,
    DuplicatedRange, MutationOutcome, MutationStatus, RecipeSize, Severity, TestOutcome,
    TestStatus, Violation,
};

/// Tag identifying the kind of a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactKind {
    PremirrorCache,
    SharedStateCache,
    CodeSize,
    RecipeSize,
    CodeViolation,
    RecipeViolation,
    Comment,
    Complexity,
    Duplication,
    StatementCoverage,
    BranchCoverage,
    UnitTest,
    MutationTest,
}

impl FactKind {
    pub const ALL: [FactKind; 13] = [
        Self::PremirrorCache,
        Self::SharedStateCache,
        Self::CodeSize,
        Self::RecipeSize,
        Self::CodeViolation,
        Self::RecipeViolation,
        Self::Comment,
        Self::Complexity,
        Self::Duplication,
        Self::StatementCoverage,
        Self::BranchCoverage,
        Self::UnitTest,
        Self::MutationTest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PremirrorCache => "premirrorCache",
            Self::SharedStateCache => "sharedStateCache",
            Self::CodeSize => "codeSize",
            Self::RecipeSize => "recipeSize",
            Self::CodeViolation => "codeViolation",
            Self::RecipeViolation => "recipeViolation",
            Self::Comment => "comment",
            Self::Complexity => "complexity",
            Self::Duplication => "duplication",
            Self::StatementCoverage => "statementCoverage",
            Self::BranchCoverage => "branchCoverage",
            Self::UnitTest => "unitTest",
            Self::MutationTest => "mutationTest",
        }
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measurement record. Equality, ordering and hashing are by value,
/// so identical records reported twice collapse when deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fact {
    PremirrorCache(CacheLookup),
    SharedStateCache(CacheLookup),
    CodeSize(CodeSize),
    RecipeSize(RecipeSize),
    CodeViolation(Violation),
    RecipeViolation(Violation),
    Comment(CommentCount),
    Complexity(ComplexitySample),
    Duplication(DuplicatedRange),
    StatementCoverage(CoverageLine),
    BranchCoverage(CoverageLine),
    UnitTest(TestOutcome),
    MutationTest(MutationOutcome),
}

impl Fact {
    pub fn kind(&self) -> FactKind {
        match self {
            Self::PremirrorCache(_) => FactKind::PremirrorCache,
            Self::SharedStateCache(_) => FactKind::SharedStateCache,
            Self::CodeSize(_) => FactKind::CodeSize,
            Self::RecipeSize(_) => FactKind::RecipeSize,
            Self::CodeViolation(_) => FactKind::CodeViolation,
            Self::RecipeViolation(_) => FactKind::RecipeViolation,
            Self::Comment(_) => FactKind::Comment,
            Self::Complexity(_) => FactKind::Complexity,
            Self::Duplication(_) => FactKind::Duplication,
            Self::StatementCoverage(_) => FactKind::StatementCoverage,
            Self::BranchCoverage(_) => FactKind::BranchCoverage,
            Self::UnitTest(_) => FactKind::UnitTest,
            Self::MutationTest(_) => FactKind::MutationTest,
        }
    }

    /// Name of the recipe that produced this fact.
    pub fn recipe(&self) -> &str {
        match self {
            Self::PremirrorCache(c) | Self::SharedStateCache(c) => &c.recipe,
            Self::CodeSize(s) => &s.recipe,
            Self::RecipeSize(s) => &s.recipe,
            Self::CodeViolation(v) | Self::RecipeViolation(v) => &v.recipe,
            Self::Comment(c) => &c.recipe,
            Self::Complexity(c) => &c.recipe,
            Self::Duplication(d) => &d.recipe,
            Self::StatementCoverage(c) | Self::BranchCoverage(c) => &c.recipe,
            Self::UnitTest(t) => &t.recipe,
            Self::MutationTest(m) => &m.recipe,
        }
    }

    /// Source file the fact refers to, if it is tied to one.
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::PremirrorCache(_) | Self::SharedStateCache(_) | Self::UnitTest(_) => None,
            Self::CodeSize(s) => Some(&s.file),
            Self::RecipeSize(s) => Some(&s.file),
            Self::CodeViolation(v) | Self::RecipeViolation(v) => Some(&v.file),
            Self::Comment(c) => Some(&c.file),
            Self::Complexity(c) => Some(&c.file),
            Self::Duplication(d) => Some(&d.file),
            Self::StatementCoverage(c) | Self::BranchCoverage(c) => Some(&c.file),
            Self::MutationTest(m) => Some(&m.file),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
