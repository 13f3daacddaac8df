//! Per-metric reduction rules.
//!
//! Each metric is a numerator rule, a denominator rule, an availability
//! predicate and a distribution over the same facts. The generic
//! [`Evaluator`](super::Evaluator) binds one of these to a threshold and
//! tolerance; nothing here knows about configuration.
use std::collections::BTreeSet;

use super::{Distribution, Metric};
use crate::container::FactContainer;
use crate::dups;
use crate::facts::{CacheLookup, Fact, FactKind, MutationStatus, Severity, TestStatus};

/// Which presence predicate decides whether a metric was measured.
#[derive(Debug)]
pub(crate) enum Availability {
    /// At least one fact of the kind exists.
    Present(FactKind),
    /// Every listed kind was scanned, even if it found nothing.
    Scanned(&'static [FactKind]),
}

impl Availability {
    pub fn check(&self, c: &dyn FactContainer) -> bool {
        match self {
            Self::Present(kind) => c.has_facts(*kind),
            Self::Scanned(kinds) => kinds.iter().all(|k| c.scanned(*k)),
        }
    }
}

/// Reduces a container to a count. The second argument is the tolerance.
type Extractor = fn(&dyn FactContainer, u64) -> u64;

#[derive(Debug)]
pub(crate) struct Rule {
    /// Kinds whose facts are grouped by file for per-file summaries.
    pub file_kinds: &'static [FactKind],
    pub availability: Availability,
    pub numerator: Extractor,
    pub denominator: Extractor,
    pub distribution: fn(&dyn FactContainer, u64) -> Distribution,
}

pub(crate) fn rule(metric: Metric) -> &'static Rule {
    match metric {
        Metric::PremirrorCache => &PREMIRROR_CACHE,
        Metric::SharedStateCache => &SHARED_STATE_CACHE,
        Metric::RecipeViolations => &RECIPE_VIOLATIONS,
        Metric::Comments => &COMMENTS,
        Metric::CodeViolations => &CODE_VIOLATIONS,
        Metric::Complexity => &COMPLEXITY,
        Metric::Duplications => &DUPLICATIONS,
        Metric::UnitTests => &UNIT_TESTS,
        Metric::StatementCoverage => &STATEMENT_COVERAGE,
        Metric::BranchCoverage => &BRANCH_COVERAGE,
        Metric::MutationTests => &MUTATION_TESTS,
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────

static PREMIRROR_CACHE: Rule = Rule {
    file_kinds: &[],
    availability: Availability::Present(FactKind::PremirrorCache),
    numerator: |c, _| cache_hits(c, FactKind::PremirrorCache),
    denominator: |c, _| cache_lookups(c, FactKind::PremirrorCache),
    distribution: |c, _| cache_distribution(c, FactKind::PremirrorCache),
};

static SHARED_STATE_CACHE: Rule = Rule {
    file_kinds: &[],
    availability: Availability::Present(FactKind::SharedStateCache),
    numerator: |c, _| cache_hits(c, FactKind::SharedStateCache),
    denominator: |c, _| cache_lookups(c, FactKind::SharedStateCache),
    distribution: |c, _| cache_distribution(c, FactKind::SharedStateCache),
};

static RECIPE_VIOLATIONS: Rule = Rule {
    file_kinds: &[FactKind::RecipeSize, FactKind::RecipeViolation],
    availability: Availability::Scanned(&[FactKind::RecipeSize, FactKind::RecipeViolation]),
    numerator: |c, _| count(c, FactKind::RecipeViolation),
    denominator: |c, _| size_lines(c, FactKind::RecipeSize),
    distribution: |c, _| violation_distribution(c, FactKind::RecipeViolation),
};

static COMMENTS: Rule = Rule {
    file_kinds: &[FactKind::Comment],
    availability: Availability::Scanned(&[FactKind::CodeSize, FactKind::Comment]),
    numerator: |c, _| comment_lines(c),
    denominator: |c, _| commented_file_lines(c),
    distribution: |c, _| {
        let comments = comment_lines(c);
        let total = commented_file_lines(c);
        Distribution::new(&[
            ("comment", comments),
            ("code", total.saturating_sub(comments)),
        ])
    },
};

static CODE_VIOLATIONS: Rule = Rule {
    file_kinds: &[FactKind::CodeSize, FactKind::CodeViolation],
    availability: Availability::Scanned(&[FactKind::CodeSize, FactKind::CodeViolation]),
    numerator: |c, _| count(c, FactKind::CodeViolation),
    denominator: |c, _| size_lines(c, FactKind::CodeSize),
    distribution: |c, _| violation_distribution(c, FactKind::CodeViolation),
};

static COMPLEXITY: Rule = Rule {
    file_kinds: &[FactKind::Complexity],
    availability: Availability::Scanned(&[FactKind::CodeSize, FactKind::Complexity]),
    numerator: complex_functions,
    denominator: |c, _| count(c, FactKind::Complexity),
    distribution: |c, tolerance| {
        let complex = complex_functions(c, tolerance);
        let total = count(c, FactKind::Complexity);
        Distribution::new(&[
            ("complex", complex),
            ("simple", total.saturating_sub(complex)),
        ])
    },
};

static DUPLICATIONS: Rule = Rule {
    file_kinds: &[FactKind::CodeSize, FactKind::Duplication],
    availability: Availability::Scanned(&[FactKind::CodeSize, FactKind::Duplication]),
    numerator: dups::duplicated_lines,
    denominator: |c, _| size_lines(c, FactKind::CodeSize),
    distribution: |c, tolerance| {
        let duplicated = dups::duplicated_lines(c, tolerance);
        let total = size_lines(c, FactKind::CodeSize);
        Distribution::new(&[
            ("duplicated", duplicated),
            ("unique", total.saturating_sub(duplicated)),
        ])
    },
};

static UNIT_TESTS: Rule = Rule {
    file_kinds: &[],
    availability: Availability::Present(FactKind::UnitTest),
    numerator: |c, _| tests(c, Some(TestStatus::Passed)),
    denominator: |c, _| tests(c, None),
    distribution: |c, _| {
        Distribution::new(&[
            ("passed", tests(c, Some(TestStatus::Passed))),
            ("failed", tests(c, Some(TestStatus::Failed))),
            ("error", tests(c, Some(TestStatus::Error))),
            ("skipped", tests(c, Some(TestStatus::Skipped))),
        ])
    },
};

static STATEMENT_COVERAGE: Rule = Rule {
    file_kinds: &[FactKind::StatementCoverage],
    availability: Availability::Scanned(&[FactKind::StatementCoverage, FactKind::UnitTest]),
    numerator: |c, _| coverage(c, FactKind::StatementCoverage, Some(true)),
    denominator: |c, _| coverage(c, FactKind::StatementCoverage, None),
    distribution: |c, _| coverage_distribution(c, FactKind::StatementCoverage),
};

static BRANCH_COVERAGE: Rule = Rule {
    file_kinds: &[FactKind::BranchCoverage],
    availability: Availability::Scanned(&[FactKind::BranchCoverage, FactKind::UnitTest]),
    numerator: |c, _| coverage(c, FactKind::BranchCoverage, Some(true)),
    denominator: |c, _| coverage(c, FactKind::BranchCoverage, None),
    distribution: |c, _| coverage_distribution(c, FactKind::BranchCoverage),
};

static MUTATION_TESTS: Rule = Rule {
    file_kinds: &[FactKind::MutationTest],
    availability: Availability::Present(FactKind::MutationTest),
    numerator: |c, _| mutations(c, Some(MutationStatus::Killed)),
    denominator: |c, _| mutations(c, None),
    distribution: |c, _| {
        Distribution::new(&[
            ("killed", mutations(c, Some(MutationStatus::Killed))),
            ("survived", mutations(c, Some(MutationStatus::Survived))),
            ("skipped", mutations(c, Some(MutationStatus::Skipped))),
        ])
    },
};

// ─── Extractors ──────────────────────────────────────────────────────────

fn count(c: &dyn FactContainer, kind: FactKind) -> u64 {
    c.query(kind).count() as u64
}

/// Lookups deduplicated by value. Lookups carry their recipe, so this
/// never merges lookups from different recipes.
fn distinct_lookups(c: &dyn FactContainer, kind: FactKind) -> BTreeSet<&CacheLookup> {
    c.query(kind)
        .filter_map(|f| match f {
            Fact::PremirrorCache(l) | Fact::SharedStateCache(l) => Some(l),
            _ => None,
        })
        .collect()
}

fn cache_lookups(c: &dyn FactContainer, kind: FactKind) -> u64 {
    distinct_lookups(c, kind).len() as u64
}

fn cache_hits(c: &dyn FactContainer, kind: FactKind) -> u64 {
    distinct_lookups(c, kind).iter().filter(|l| l.hit).count() as u64
}

fn cache_distribution(c: &dyn FactContainer, kind: FactKind) -> Distribution {
    let lookups = distinct_lookups(c, kind);
    let hits = lookups.iter().filter(|l| l.hit).count() as u64;
    Distribution::new(&[("hits", hits), ("misses", lookups.len() as u64 - hits)])
}

fn size_lines(c: &dyn FactContainer, kind: FactKind) -> u64 {
    c.query(kind)
        .map(|f| match f {
            Fact::CodeSize(s) => s.lines,
            Fact::RecipeSize(s) => s.lines,
            _ => 0,
        })
        .sum()
}

fn violations(c: &dyn FactContainer, kind: FactKind, severity: Severity) -> u64 {
    c.query(kind)
        .filter(|f| match f {
            Fact::CodeViolation(v) | Fact::RecipeViolation(v) => v.severity == severity,
            _ => false,
        })
        .count() as u64
}

fn violation_distribution(c: &dyn FactContainer, kind: FactKind) -> Distribution {
    Distribution::new(&[
        ("major", violations(c, kind, Severity::Major)),
        ("minor", violations(c, kind, Severity::Minor)),
        ("info", violations(c, kind, Severity::Info)),
    ])
}

fn comment_lines(c: &dyn FactContainer) -> u64 {
    c.query(FactKind::Comment)
        .map(|f| match f {
            Fact::Comment(cc) => cc.comment_lines,
            _ => 0,
        })
        .sum()
}

fn commented_file_lines(c: &dyn FactContainer) -> u64 {
    c.query(FactKind::Comment)
        .map(|f| match f {
            Fact::Comment(cc) => cc.lines,
            _ => 0,
        })
        .sum()
}

fn complex_functions(c: &dyn FactContainer, tolerance: u64) -> u64 {
    c.query(FactKind::Complexity)
        .filter(|f| matches!(f, Fact::Complexity(s) if s.value >= tolerance))
        .count() as u64
}

fn tests(c: &dyn FactContainer, status: Option<TestStatus>) -> u64 {
    c.query(FactKind::UnitTest)
        .filter(|f| match (f, status) {
            (Fact::UnitTest(t), Some(s)) => t.status == s,
            (Fact::UnitTest(_), None) => true,
            _ => false,
        })
        .count() as u64
}

fn coverage(c: &dyn FactContainer, kind: FactKind, covered: Option<bool>) -> u64 {
    c.query(kind)
        .filter(|f| match (f, covered) {
            (Fact::StatementCoverage(l) | Fact::BranchCoverage(l), Some(want)) => l.covered == want,
            (Fact::StatementCoverage(_) | Fact::BranchCoverage(_), None) => true,
            _ => false,
        })
        .count() as u64
}

fn coverage_distribution(c: &dyn FactContainer, kind: FactKind) -> Distribution {
    Distribution::new(&[
        ("covered", coverage(c, kind, Some(true))),
        ("uncovered", coverage(c, kind, Some(false))),
    ])
}

fn mutations(c: &dyn FactContainer, status: Option<MutationStatus>) -> u64 {
    c.query(FactKind::MutationTest)
        .filter(|f| match (f, status) {
            (Fact::MutationTest(m), Some(s)) => m.status == s,
            (Fact::MutationTest(_), None) => true,
            _ => false,
        })
        .count() as u64
}
