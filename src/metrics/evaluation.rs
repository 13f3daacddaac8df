use std::fmt;

use serde::Serialize;

/// Whether a higher ratio is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Higher is better: qualified when `ratio >= threshold`.
    Positive,
    /// Lower is better: qualified when `ratio <= threshold`.
    Negative,
}

impl Orientation {
    pub fn satisfies(self, ratio: f64, threshold: f64) -> bool {
        match self {
            Self::Positive => ratio >= threshold,
            Self::Negative => ratio <= threshold,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of reducing a container for one metric.
///
/// `ratio` and `qualified` are derived at construction and fields are
/// read-only, so `ratio == 0.0` whenever `denominator == 0` and
/// `qualified` always implies `available`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    available: bool,
    numerator: u64,
    denominator: u64,
    ratio: f64,
    orientation: Orientation,
    threshold: f64,
    tolerance: u64,
    qualified: bool,
}

impl Evaluation {
    /// A zero denominator always yields an unavailable evaluation.
    pub fn new(
        available: bool,
        numerator: u64,
        denominator: u64,
        orientation: Orientation,
        threshold: f64,
        tolerance: u64,
    ) -> Self {
        let available = available && denominator > 0;
        let ratio = if denominator > 0 {
            numerator as f64 / denominator as f64
        } else {
            0.0
        };
        let qualified = available && orientation.satisfies(ratio, threshold);
        Self {
            available,
            numerator,
            denominator,
            ratio,
            orientation,
            threshold,
            tolerance,
            qualified,
        }
    }

    pub fn unavailable(orientation: Orientation, threshold: f64, tolerance: u64) -> Self {
        Self::new(false, 0, 0, orientation, threshold, tolerance)
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    pub fn is_qualified(&self) -> bool {
        self.qualified
    }
}

#[cfg(test)]
#[path = "evaluation_test.rs"]
mod tests;
