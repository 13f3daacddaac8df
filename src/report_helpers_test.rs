use super::*;

#[test]
fn max_name_width_with_names() {
    let names = ["busybox-1.35-r0", "zlib-1.2-r0"];
    let w = max_name_width(names.into_iter(), 4);
    assert_eq!(w, "busybox-1.35-r0".len());
}

#[test]
fn max_name_width_empty() {
    let w = max_name_width(std::iter::empty(), 4);
    assert_eq!(w, 4);
}

#[test]
fn max_name_width_min_enforced() {
    let w = max_name_width(["a"].into_iter(), 10);
    assert_eq!(w, 10);
}

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}

#[test]
fn format_thousands_works() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(1234567), "1,234,567");
}

#[test]
fn format_ratio_by_orientation() {
    let coverage = Evaluation::new(true, 3, 4, Orientation::Positive, 0.8, 0);
    assert_eq!(format_ratio(&coverage), "75.0%");
    assert_eq!(qualified_mark(&coverage), "!");

    let density = Evaluation::new(true, 1, 8, Orientation::Negative, 0.5, 0);
    assert_eq!(format_ratio(&density), "0.125");
    assert_eq!(qualified_mark(&density), "+");
}

#[test]
fn format_ratio_unavailable() {
    let e = Evaluation::unavailable(Orientation::Positive, 0.8, 0);
    assert_eq!(format_ratio(&e), "-");
    assert_eq!(qualified_mark(&e), " ");
}
