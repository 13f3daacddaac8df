use super::*;
use proptest::prelude::*;

#[test]
fn total_sums_parts() {
    let d = Distribution::new(&[("passed", 3), ("failed", 1), ("error", 0), ("skipped", 2)]);
    assert_eq!(d.total(), 6);
    assert_eq!(d.count("failed"), Some(1));
    assert_eq!(d.count("missing"), None);
}

#[test]
fn share_of_empty_is_zero() {
    let d = Distribution::new(&[("covered", 0), ("uncovered", 0)]);
    assert_eq!(d.share("covered"), 0.0);
}

#[test]
fn share_is_fraction_of_total() {
    let d = Distribution::new(&[("covered", 3), ("uncovered", 1)]);
    assert!((d.share("covered") - 0.75).abs() < 1e-9);
}

#[test]
fn merge_adds_componentwise() {
    let a = Distribution::new(&[("hits", 1), ("misses", 2)]);
    let b = Distribution::new(&[("hits", 10), ("misses", 20)]);
    assert_eq!(
        a.merge(&b),
        Distribution::new(&[("hits", 11), ("misses", 22)])
    );
}

#[test]
fn merge_with_empty_is_identity() {
    let a = Distribution::new(&[("hits", 1), ("misses", 2)]);
    assert_eq!(Distribution::default().merge(&a), a);
    assert_eq!(a.merge(&Distribution::default()), a);
}

#[test]
fn merge_with_other_labels_keeps_left() {
    let hits = Distribution::new(&[("hits", 1), ("misses", 2)]);
    let tests = Distribution::new(&[("passed", 5), ("failed", 6)]);
    assert_eq!(hits.merge(&tests), hits);

    let shorter = Distribution::new(&[("hits", 4)]);
    assert_eq!(hits.merge(&shorter), hits);
}

#[test]
fn serializes_as_label_map_with_total() {
    let d = Distribution::new(&[("major", 1), ("minor", 2), ("info", 3)]);
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v, serde_json::json!({"major": 1, "minor": 2, "info": 3, "total": 6}));
}

proptest! {
    #[test]
    fn total_is_sum_of_parts(a in 0u64..10_000, b in 0u64..10_000, c in 0u64..10_000) {
        let d = Distribution::new(&[("a", a), ("b", b), ("c", c)]);
        prop_assert_eq!(d.total(), a + b + c);
        let merged = d.merge(&d);
        prop_assert_eq!(merged.total(), 2 * (a + b + c));
    }
}
