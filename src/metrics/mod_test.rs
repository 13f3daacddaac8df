use super::*;
use crate::container::{Project, Recipe};
use crate::facts::{Fact, FactKind, MutationStatus, Severity, TestStatus};

const RECIPE1: &str = "A-1.0.0-r0";
const RECIPE2: &str = "B-1.0.0-r0";

/// Every percentage threshold at `percent`, densities at `percent / 100`,
/// both tolerances at `tolerance`.
fn uniform(percent: u32, tolerance: u64) -> Configuration {
    let density = f64::from(percent) / 100.0;
    Configuration {
        premirror_cache_threshold: percent,
        shared_state_cache_threshold: percent,
        recipe_violations_threshold: density,
        comments_threshold: percent,
        code_violations_threshold: density,
        complexity_tolerance: tolerance,
        complexity_threshold: percent,
        duplications_tolerance: tolerance,
        duplications_threshold: percent,
        unit_tests_threshold: percent,
        statement_coverage_threshold: percent,
        branch_coverage_threshold: percent,
        mutation_tests_threshold: percent,
        ..Configuration::default()
    }
}

fn recipe(facts: Vec<Fact>) -> Recipe {
    let mut r = Recipe::new(RECIPE1);
    r.extend(facts);
    r
}

fn scanned(kinds: &[FactKind], facts: Vec<Fact>) -> Recipe {
    let mut r = recipe(facts);
    for kind in kinds {
        r.mark_scanned(*kind);
    }
    r
}

fn eval(metric: Metric, c: &dyn FactContainer) -> Evaluation {
    Evaluator::new(metric, &uniform(50, 5)).evaluate(c)
}

fn assert_eval(e: Evaluation, available: bool, numerator: u64, denominator: u64, qualified: bool) {
    assert_eq!(e.is_available(), available, "available");
    assert_eq!(e.numerator(), numerator, "numerator");
    assert_eq!(e.denominator(), denominator, "denominator");
    assert_eq!(e.is_qualified(), qualified, "qualified");
}

// ─── Metric catalog ──────────────────────────────────────────────────────

#[test]
fn eleven_metrics_in_catalog_order() {
    assert_eq!(Metric::ALL.len(), 11);
    assert_eq!(Metric::ALL[0], Metric::PremirrorCache);
    assert_eq!(Metric::ALL[10], Metric::MutationTests);
}

#[test]
fn orientations() {
    let negative: Vec<Metric> = Metric::ALL
        .into_iter()
        .filter(|m| m.orientation() == Orientation::Negative)
        .collect();
    assert_eq!(
        negative,
        vec![
            Metric::RecipeViolations,
            Metric::CodeViolations,
            Metric::Complexity,
            Metric::Duplications
        ]
    );
}

#[test]
fn metric_names_parse_back() {
    for metric in Metric::ALL {
        assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        assert_eq!(metric.key().parse::<Metric>(), Ok(metric));
    }
    assert_eq!("unit-tests".parse::<Metric>(), Ok(Metric::UnitTests));
    assert!("coverage".parse::<Metric>().is_err());
}

#[test]
fn evaluator_takes_threshold_and_tolerance_from_config() {
    let config = Configuration {
        complexity_threshold: 25,
        complexity_tolerance: 12,
        ..Configuration::default()
    };
    let e = Evaluator::new(Metric::Complexity, &config);
    assert!((e.threshold() - 0.25).abs() < 1e-9);
    assert_eq!(e.tolerance(), 12);
    assert_eq!(e.orientation(), Orientation::Negative);
}

// ─── Premirror / shared state cache ──────────────────────────────────────

#[test]
fn premirror_never_scanned() {
    assert_eval(eval(Metric::PremirrorCache, &recipe(vec![])), false, 0, 0, false);
}

#[test]
fn premirror_scanned_but_empty() {
    let r = scanned(&[FactKind::PremirrorCache], vec![]);
    assert_eval(eval(Metric::PremirrorCache, &r), false, 0, 0, false);
}

#[test]
fn premirror_counts_distinct_lookups() {
    let r = recipe(vec![
        Fact::premirror_cache(RECIPE1, "A", true),
        Fact::premirror_cache(RECIPE1, "A", true),
        Fact::premirror_cache(RECIPE1, "B", false),
    ]);
    assert_eval(eval(Metric::PremirrorCache, &r), true, 1, 2, true);
    let d = Evaluator::new(Metric::PremirrorCache, &uniform(50, 5)).distribution(&r);
    assert_eq!(d, Distribution::new(&[("hits", 1), ("misses", 1)]));
}

#[test]
fn premirror_ignores_shared_state_lookups() {
    let r = recipe(vec![Fact::shared_state_cache(RECIPE1, "A", "do_fetch", true)]);
    assert_eval(eval(Metric::PremirrorCache, &r), false, 0, 0, false);
}

#[test]
fn shared_state_never_scanned() {
    let r = recipe(vec![Fact::premirror_cache(RECIPE1, "A", true)]);
    assert_eval(eval(Metric::SharedStateCache, &r), false, 0, 0, false);
}

#[test]
fn shared_state_scanned_but_empty() {
    let r = scanned(&[FactKind::SharedStateCache], vec![]);
    assert_eval(eval(Metric::SharedStateCache, &r), false, 0, 0, false);
}

#[test]
fn shared_state_below_threshold() {
    let r = recipe(vec![
        Fact::shared_state_cache(RECIPE1, "A", "do_compile", true),
        Fact::shared_state_cache(RECIPE1, "B", "do_compile", false),
        Fact::shared_state_cache(RECIPE1, "C", "do_compile", false),
    ]);
    assert_eval(eval(Metric::SharedStateCache, &r), true, 1, 3, false);
}

#[test]
fn cache_lookups_are_distinct_per_recipe() {
    let mut r2 = Recipe::new(RECIPE2);
    r2.add(Fact::premirror_cache(RECIPE2, "A", true));
    let project = Project::from_recipes(
        "P",
        vec![recipe(vec![Fact::premirror_cache(RECIPE1, "A", true)]), r2],
    )
    .unwrap();
    assert_eval(eval(Metric::PremirrorCache, &project), true, 2, 2, true);
}

// ─── Recipe violations ───────────────────────────────────────────────────

#[test]
fn recipe_violations_never_scanned() {
    let r = recipe(vec![Fact::recipe_size(RECIPE1, "a.bb", 10)]);
    assert_eval(eval(Metric::RecipeViolations, &r), false, 0, 10, false);
}

#[test]
fn recipe_violations_scanned_but_empty() {
    let r = scanned(
        &[FactKind::RecipeViolation],
        vec![Fact::recipe_size(RECIPE1, "a.bb", 10)],
    );
    assert_eval(eval(Metric::RecipeViolations, &r), true, 0, 10, true);
}

#[test]
fn recipe_violations_use_recipe_size_not_code_size() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.c", 100, 0, 0),
        Fact::recipe_size(RECIPE1, "a.bb", 1),
        Fact::recipe_violation(RECIPE1, "a.bb", 1, Severity::Major),
        Fact::recipe_violation(RECIPE1, "a.bb", 1, Severity::Minor),
        Fact::recipe_violation(RECIPE1, "a.bb", 1, Severity::Info),
    ]);
    let e = eval(Metric::RecipeViolations, &r);
    assert_eval(e, true, 3, 1, false);
    assert!((e.ratio() - 3.0).abs() < 1e-9);
}

// ─── Comments ────────────────────────────────────────────────────────────

#[test]
fn comments_never_scanned_without_code_size() {
    let r = recipe(vec![Fact::comment(RECIPE1, "a.c", 10, 3)]);
    let e = eval(Metric::Comments, &r);
    assert_eval(e, false, 3, 10, false);
    assert!((e.ratio() - 0.3).abs() < 1e-9);
}

#[test]
fn comments_scanned_but_empty() {
    let r = scanned(
        &[FactKind::Comment],
        vec![Fact::code_size(RECIPE1, "a.c", 10, 1, 0)],
    );
    assert_eval(eval(Metric::Comments, &r), false, 0, 0, false);
}

#[test]
fn comments_ratio() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.c", 10, 1, 0),
        Fact::comment(RECIPE1, "a.c", 10, 5),
        Fact::code_size(RECIPE1, "b.c", 10, 1, 0),
        Fact::comment(RECIPE1, "b.c", 10, 0),
    ]);
    assert_eval(eval(Metric::Comments, &r), true, 5, 20, false);
    let d = Evaluator::new(Metric::Comments, &uniform(50, 5)).distribution(&r);
    assert_eq!(d, Distribution::new(&[("comment", 5), ("code", 15)]));
}

// ─── Code violations ─────────────────────────────────────────────────────

#[test]
fn code_violations_never_scanned() {
    let r = recipe(vec![Fact::code_size(RECIPE1, "a.c", 10, 1, 0)]);
    assert_eval(eval(Metric::CodeViolations, &r), false, 0, 10, false);
}

#[test]
fn code_violations_scanned_but_empty() {
    let r = scanned(
        &[FactKind::CodeViolation],
        vec![Fact::code_size(RECIPE1, "a.c", 10, 1, 0)],
    );
    assert_eval(eval(Metric::CodeViolations, &r), true, 0, 10, true);
}

#[test]
fn code_violations_without_code_size_are_unavailable() {
    let r = recipe(vec![Fact::code_violation(RECIPE1, "a.c", 1, Severity::Major)]);
    assert_eval(eval(Metric::CodeViolations, &r), false, 1, 0, false);
}

#[test]
fn single_major_violation_on_one_line_is_unqualified() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.c", 1, 0, 0),
        Fact::code_violation(RECIPE1, "a.c", 1, Severity::Major),
    ]);
    let e = eval(Metric::CodeViolations, &r);
    assert_eval(e, true, 1, 1, false);
    assert!((e.ratio() - 1.0).abs() < 1e-9);
    assert_eq!(e.orientation(), Orientation::Negative);
}

#[test]
fn code_violation_distribution_by_severity() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.c", 10, 0, 0),
        Fact::code_violation(RECIPE1, "a.c", 1, Severity::Major),
        Fact::code_violation(RECIPE1, "a.c", 2, Severity::Minor),
        Fact::code_violation(RECIPE1, "a.c", 3, Severity::Minor),
        Fact::code_violation(RECIPE1, "a.c", 4, Severity::Info),
    ]);
    let d = Evaluator::new(Metric::CodeViolations, &uniform(50, 5)).distribution(&r);
    assert_eq!(
        d,
        Distribution::new(&[("major", 1), ("minor", 2), ("info", 1)])
    );
    assert_eq!(d.total(), 4);
}

// ─── Complexity ──────────────────────────────────────────────────────────

#[test]
fn complexity_never_scanned() {
    let r = recipe(vec![Fact::code_size(RECIPE1, "a.c", 10, 1, 0)]);
    assert_eval(eval(Metric::Complexity, &r), false, 0, 0, false);
}

#[test]
fn complexity_scanned_but_empty() {
    let r = scanned(
        &[FactKind::Complexity],
        vec![Fact::code_size(RECIPE1, "a.c", 10, 1, 0)],
    );
    assert_eval(eval(Metric::Complexity, &r), false, 0, 0, false);
}

#[test]
fn complexity_needs_code_size_scanned() {
    let r = recipe(vec![Fact::complexity(RECIPE1, "a.c", "f", 1)]);
    assert_eval(eval(Metric::Complexity, &r), false, 0, 1, false);
}

#[test]
fn complexity_counts_functions_at_or_above_tolerance() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.c", 10, 3, 0),
        Fact::complexity(RECIPE1, "a.c", "f", 4),
        Fact::complexity(RECIPE1, "a.c", "g", 5),
        Fact::complexity(RECIPE1, "a.c", "h", 10),
    ]);
    assert_eval(eval(Metric::Complexity, &r), true, 2, 3, false);
    let d = Evaluator::new(Metric::Complexity, &uniform(50, 5)).distribution(&r);
    assert_eq!(d, Distribution::new(&[("complex", 2), ("simple", 1)]));
}

// ─── Duplications ────────────────────────────────────────────────────────

#[test]
fn duplications_never_scanned() {
    let r = recipe(vec![Fact::code_size(RECIPE1, "a.c", 10, 1, 0)]);
    assert_eval(eval(Metric::Duplications, &r), false, 0, 10, false);
}

#[test]
fn duplications_scanned_but_empty() {
    let r = scanned(
        &[FactKind::Duplication],
        vec![Fact::code_size(RECIPE1, "a.c", 10, 1, 0)],
    );
    assert_eval(eval(Metric::Duplications, &r), true, 0, 10, true);
}

#[test]
fn duplications_count_union_of_ranges() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.c", 100, 1, 0),
        Fact::duplication(RECIPE1, "a.c", 100, 0, 50),
        Fact::duplication(RECIPE1, "a.c", 100, 30, 80),
    ]);
    let e = Evaluator::with_threshold(Metric::Duplications, 0.5, 0).evaluate(&r);
    assert_eval(e, true, 80, 100, false);
    let d = Evaluator::with_threshold(Metric::Duplications, 0.5, 0).distribution(&r);
    assert_eq!(d, Distribution::new(&[("duplicated", 80), ("unique", 20)]));
}

// ─── Unit tests ──────────────────────────────────────────────────────────

#[test]
fn unit_tests_never_scanned() {
    assert_eval(eval(Metric::UnitTests, &recipe(vec![])), false, 0, 0, false);
}

#[test]
fn unit_tests_scanned_but_empty() {
    let r = scanned(&[FactKind::UnitTest], vec![]);
    assert_eval(eval(Metric::UnitTests, &r), false, 0, 0, false);
}

#[test]
fn unit_tests_pass_rate() {
    let r = recipe(vec![
        Fact::unit_test(RECIPE1, "s", "a", TestStatus::Passed),
        Fact::unit_test(RECIPE1, "s", "b", TestStatus::Failed),
        Fact::unit_test(RECIPE1, "s", "c", TestStatus::Error),
        Fact::unit_test(RECIPE1, "s", "d", TestStatus::Skipped),
    ]);
    assert_eval(eval(Metric::UnitTests, &r), true, 1, 4, false);
    let d = Evaluator::new(Metric::UnitTests, &uniform(50, 5)).distribution(&r);
    assert_eq!(
        d,
        Distribution::new(&[("passed", 1), ("failed", 1), ("error", 1), ("skipped", 1)])
    );
}

// ─── Coverage ────────────────────────────────────────────────────────────

#[test]
fn statement_coverage_never_scanned() {
    let r = scanned(&[FactKind::UnitTest], vec![]);
    assert_eval(eval(Metric::StatementCoverage, &r), false, 0, 0, false);
}

#[test]
fn statement_coverage_scanned_but_empty() {
    let r = scanned(&[FactKind::StatementCoverage, FactKind::UnitTest], vec![]);
    assert_eval(eval(Metric::StatementCoverage, &r), false, 0, 0, false);
}

#[test]
fn statement_coverage_requires_tests_scanned() {
    let r = recipe(vec![
        Fact::statement_coverage(RECIPE1, "a.c", 1, true),
        Fact::statement_coverage(RECIPE1, "a.c", 2, false),
    ]);
    assert_eval(eval(Metric::StatementCoverage, &r), false, 1, 2, false);

    let r = scanned(
        &[FactKind::UnitTest],
        vec![
            Fact::statement_coverage(RECIPE1, "a.c", 1, true),
            Fact::statement_coverage(RECIPE1, "a.c", 2, false),
        ],
    );
    assert_eval(eval(Metric::StatementCoverage, &r), true, 1, 2, true);
}

#[test]
fn branch_coverage_never_scanned() {
    let r = recipe(vec![Fact::statement_coverage(RECIPE1, "a.c", 1, true)]);
    assert_eval(eval(Metric::BranchCoverage, &r), false, 0, 0, false);
}

#[test]
fn branch_coverage_scanned_but_empty() {
    let r = scanned(&[FactKind::BranchCoverage, FactKind::UnitTest], vec![]);
    assert_eval(eval(Metric::BranchCoverage, &r), false, 0, 0, false);
}

#[test]
fn branch_coverage_ratio_and_distribution() {
    let r = recipe(vec![
        Fact::unit_test(RECIPE1, "s", "a", TestStatus::Passed),
        Fact::branch_coverage(RECIPE1, "a.c", 1, 0, true),
        Fact::branch_coverage(RECIPE1, "a.c", 1, 1, false),
        Fact::branch_coverage(RECIPE1, "a.c", 2, 0, false),
    ]);
    assert_eval(eval(Metric::BranchCoverage, &r), true, 1, 3, false);
    let d = Evaluator::new(Metric::BranchCoverage, &uniform(50, 5)).distribution(&r);
    assert_eq!(d, Distribution::new(&[("covered", 1), ("uncovered", 2)]));
}

// ─── Mutation tests ──────────────────────────────────────────────────────

#[test]
fn mutation_tests_never_scanned() {
    assert_eval(eval(Metric::MutationTests, &recipe(vec![])), false, 0, 0, false);
}

#[test]
fn mutation_tests_scanned_but_empty() {
    let r = scanned(&[FactKind::MutationTest], vec![]);
    assert_eval(eval(Metric::MutationTests, &r), false, 0, 0, false);
}

#[test]
fn mutation_kill_rate() {
    let r = recipe(vec![
        Fact::mutation_test(RECIPE1, "a.c", 1, MutationStatus::Killed),
        Fact::mutation_test(RECIPE1, "a.c", 2, MutationStatus::Killed),
        Fact::mutation_test(RECIPE1, "a.c", 3, MutationStatus::Survived),
        Fact::mutation_test(RECIPE1, "a.c", 4, MutationStatus::Skipped),
    ]);
    assert_eval(eval(Metric::MutationTests, &r), true, 2, 4, true);
    let d = Evaluator::new(Metric::MutationTests, &uniform(50, 5)).distribution(&r);
    assert_eq!(
        d,
        Distribution::new(&[("killed", 2), ("survived", 1), ("skipped", 1)])
    );
}

// ─── Files, overall grade, code size ─────────────────────────────────────

#[test]
fn files_follow_metric_kinds() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.c", 10, 0, 0),
        Fact::code_violation(RECIPE1, "b.c", 1, Severity::Info),
        Fact::comment(RECIPE1, "c.c", 10, 1),
        Fact::unit_test(RECIPE1, "s", "t", TestStatus::Passed),
    ]);
    let config = Configuration::default();
    let files: Vec<&str> = Evaluator::new(Metric::CodeViolations, &config)
        .files(&r)
        .into_iter()
        .collect();
    assert_eq!(files, vec!["a.c", "b.c"]);
    assert!(Evaluator::new(Metric::UnitTests, &config).files(&r).is_empty());
}

#[test]
fn recipe_evaluator_on_empty_project() {
    let project = Project::from_recipes("P", vec![Recipe::new(RECIPE1)]).unwrap();
    let e = RecipeEvaluator::new(&uniform(50, 5)).evaluate(&project);
    assert_eval(e, false, 0, 0, false);
}

#[test]
fn recipe_evaluator_single_recipe() {
    let r = recipe(vec![
        Fact::code_size(RECIPE1, "a.file", 10, 1, 1),
        Fact::premirror_cache(RECIPE1, "A", false),
        Fact::comment(RECIPE1, "a.file", 10, 1),
        Fact::unit_test(RECIPE1, "A", "A", TestStatus::Passed),
    ]);
    let e = RecipeEvaluator::new(&uniform(50, 5)).evaluate(&r);
    assert_eval(e, true, 1, 3, false);
}

#[test]
fn recipe_evaluator_over_project_combines_facts() {
    let mut r2 = Recipe::new(RECIPE2);
    r2.extend(vec![
        Fact::code_size(RECIPE2, "b.file", 10, 1, 1),
        Fact::comment(RECIPE2, "a.file", 10, 10),
        Fact::premirror_cache(RECIPE2, "B", true),
        Fact::unit_test(RECIPE2, "B", "B", TestStatus::Failed),
    ]);
    let r1 = recipe(vec![
        Fact::code_size(RECIPE1, "a.file", 10, 1, 1),
        Fact::premirror_cache(RECIPE1, "A", false),
        Fact::comment(RECIPE1, "a.file", 10, 1),
        Fact::unit_test(RECIPE1, "A", "A", TestStatus::Passed),
    ]);
    let project = Project::from_recipes("P", vec![r1, r2]).unwrap();
    let e = RecipeEvaluator::new(&uniform(50, 5)).evaluate(&project);
    assert_eval(e, true, 3, 3, true);
}

#[test]
fn code_size_summary_counts_distinct_recipes_and_files() {
    let mut r2 = Recipe::new(RECIPE2);
    r2.add(Fact::code_size(RECIPE2, "a.c", 5, 1, 0));
    let project = Project::from_recipes(
        "P",
        vec![
            recipe(vec![
                Fact::code_size(RECIPE1, "a.c", 10, 2, 1),
                Fact::code_size(RECIPE1, "b.c", 20, 3, 0),
            ]),
            r2,
        ],
    )
    .unwrap();
    let s = CodeSizeSummary::of(&project);
    assert_eq!(
        s,
        CodeSizeSummary {
            recipes: 2,
            files: 3,
            lines: 35,
            functions: 6,
            classes: 1,
        }
    );
}

#[test]
fn code_size_delta_between_builds() {
    let before = CodeSizeSummary {
        recipes: 2,
        files: 3,
        lines: 35,
        functions: 6,
        classes: 1,
    };
    let after = CodeSizeSummary {
        recipes: 2,
        files: 2,
        lines: 40,
        functions: 6,
        classes: 0,
    };
    let d = CodeSizeDelta::between(Some(&before), Some(&after));
    assert_eq!(
        d,
        CodeSizeDelta {
            recipes: 0,
            files: -1,
            lines: 5,
            functions: 0,
            classes: -1,
        }
    );
    assert_eq!(CodeSizeDelta::between(None, Some(&after)).lines, 40);
    assert_eq!(CodeSizeDelta::between(Some(&before), None).recipes, -2);
}
