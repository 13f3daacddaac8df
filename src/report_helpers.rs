use metashift::{Evaluation, Orientation};
use serde::Serialize;

/// Compute the max display width for names, with a minimum of `min`.
pub fn max_name_width<'a>(names: impl Iterator<Item = &'a str>, min: usize) -> usize {
    names
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(min)
        .max(min)
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a ratio: percent for positive metrics, density for negative
/// ones, `-` when unavailable.
pub fn format_ratio(e: &Evaluation) -> String {
    if !e.is_available() {
        return "-".to_string();
    }
    match e.orientation() {
        Orientation::Positive => format!("{:.1}%", e.ratio() * 100.0),
        Orientation::Negative => format!("{:.3}", e.ratio()),
    }
}

/// Short qualification marker for table cells.
pub fn qualified_mark(e: &Evaluation) -> &'static str {
    match (e.is_available(), e.is_qualified()) {
        (false, _) => " ",
        (true, true) => "+",
        (true, false) => "!",
    }
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
