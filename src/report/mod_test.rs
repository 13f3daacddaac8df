use metashift::aggregate::MetricDelta;
use metashift::facts::{DuplicateBlock, Severity, TestStatus};
use metashift::metrics::Distribution;
use metashift::{Configuration, Fact, Metric, Project, Recipe};

use super::diff::colored_ratio_delta;
use super::evaluate::project_metrics;
use super::summary::{copies_of, format_distribution};

const A: &str = "A-1.0.0-r0";
const B: &str = "B-1.0.0-r0";

fn project() -> Project {
    let mut a = Recipe::new(A);
    a.extend([
        Fact::code_size(A, "a.c", 10, 1, 0),
        Fact::code_violation(A, "a.c", 1, Severity::Major),
        Fact::unit_test(A, "s", "t", TestStatus::Passed),
    ]);
    let mut b = Recipe::new(B);
    b.extend([Fact::unit_test(B, "s", "t", TestStatus::Failed)]);
    Project::from_recipes("p", [a, b]).unwrap()
}

fn delta(metric: Metric, before: Option<f64>, after: Option<f64>) -> MetricDelta {
    MetricDelta {
        metric,
        before,
        after,
        before_qualified: false,
        after_qualified: false,
    }
}

#[test]
fn project_metrics_cover_every_metric() {
    let metrics = project_metrics(&project(), &Configuration::default());
    assert_eq!(metrics.len(), Metric::ALL.len());

    let unit = metrics
        .iter()
        .find(|m| m.metric == Metric::UnitTests)
        .unwrap();
    assert_eq!(unit.evaluation.numerator(), 1);
    assert_eq!(unit.evaluation.denominator(), 2);
    assert_eq!(unit.recipes_available, 2);
    assert_eq!(unit.recipes_qualified, 1);

    let cv = metrics
        .iter()
        .find(|m| m.metric == Metric::CodeViolations)
        .unwrap();
    assert_eq!(cv.recipes_available, 1);
}

#[test]
fn ratio_delta_colors_follow_orientation() {
    let better_coverage = colored_ratio_delta(&delta(Metric::UnitTests, Some(0.5), Some(0.75)));
    assert!(better_coverage.contains("\x1b[32m"));
    assert!(better_coverage.contains("+0.250"));

    let more_violations =
        colored_ratio_delta(&delta(Metric::CodeViolations, Some(0.1), Some(0.2)));
    assert!(more_violations.contains("\x1b[31m"));

    let fewer_violations =
        colored_ratio_delta(&delta(Metric::CodeViolations, Some(0.2), Some(0.1)));
    assert!(fewer_violations.contains("\x1b[32m"));
    assert!(fewer_violations.contains("-0.100"));
}

#[test]
fn ratio_delta_unchanged_or_missing() {
    let same = colored_ratio_delta(&delta(Metric::Comments, Some(0.3), Some(0.3)));
    assert!(same.contains("\x1b[33m"));
    assert_eq!(
        colored_ratio_delta(&delta(Metric::Comments, None, Some(0.3))),
        "-"
    );
}

#[test]
fn distribution_shows_share_of_total() {
    let d = Distribution::new(&[("passed", 3), ("failed", 1)]);
    assert_eq!(format_distribution(&d), "passed 3 (75.0%), failed 1 (25.0%)");
}

#[test]
fn copies_name_the_other_locations() {
    let mut a = Recipe::new(A);
    a.extend([
        Fact::duplication_of(
            A,
            "a.c",
            100,
            0,
            20,
            vec![
                DuplicateBlock::new(A, "b.c", 5, 25),
                DuplicateBlock::new(B, "a.c", 0, 20),
            ],
        ),
        Fact::duplication(A, "b.c", 100, 5, 25),
    ]);
    let copies = copies_of(&a);
    assert_eq!(copies.len(), 1);
    assert_eq!(
        copies["a.c"],
        vec![format!("{A}:b.c"), format!("{B}:a.c")]
    );
}
