use log::warn;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One named count of a [`Distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub label: &'static str,
    pub count: u64,
}

/// Fixed-arity tuple of named counts, e.g. passed/failed/error/skipped.
/// Serialized as a map of label to count plus `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    parts: Vec<Part>,
}

impl Distribution {
    pub fn new(parts: &[(&'static str, u64)]) -> Self {
        Self {
            parts: parts
                .iter()
                .map(|&(label, count)| Part { label, count })
                .collect(),
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn total(&self) -> u64 {
        self.parts.iter().map(|p| p.count).sum()
    }

    pub fn count(&self, label: &str) -> Option<u64> {
        self.parts.iter().find(|p| p.label == label).map(|p| p.count)
    }

    /// Share of `label` in the total, 0.0 for an empty distribution.
    pub fn share(&self, label: &str) -> f64 {
        let total = self.total();
        match self.count(label) {
            Some(count) if total > 0 => count as f64 / total as f64,
            _ => 0.0,
        }
    }

    /// Component-wise sum. An empty distribution is the identity. Both
    /// sides must carry the same labels in the same order; otherwise the
    /// left-hand side is returned unchanged.
    pub fn merge(&self, other: &Distribution) -> Distribution {
        if self.parts.is_empty() {
            return other.clone();
        }
        if other.parts.is_empty() {
            return self.clone();
        }
        if !self.same_labels(other) {
            warn!(
                "cannot merge distributions with labels {:?} and {:?}",
                self.labels().collect::<Vec<_>>(),
                other.labels().collect::<Vec<_>>()
            );
            return self.clone();
        }
        Distribution {
            parts: self
                .parts
                .iter()
                .zip(&other.parts)
                .map(|(a, b)| Part {
                    label: a.label,
                    count: a.count + b.count,
                })
                .collect(),
        }
    }

    fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parts.iter().map(|p| p.label)
    }

    fn same_labels(&self, other: &Distribution) -> bool {
        self.labels().eq(other.labels())
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.parts.len() + 1))?;
        for part in &self.parts {
            map.serialize_entry(part.label, &part.count)?;
        }
        map.serialize_entry("total", &self.total())?;
        map.end()
    }
}

#[cfg(test)]
#[path = "distribution_test.rs"]
mod tests;
