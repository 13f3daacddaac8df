use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use super::FactContainer;
use crate::facts::{Fact, FactKind};

/// Facts collected for one build unit.
///
/// Facts are append-only. Adding a fact also marks its kind as scanned;
/// [`Recipe::mark_scanned`] records a scan that produced nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    name: String,
    facts: Vec<Fact>,
    index: BTreeMap<FactKind, Vec<usize>>,
    scanned: BTreeSet<FactKind>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add(&mut self, fact: Fact) {
        if fact.recipe() != self.name {
            warn!(
                "fact for recipe '{}' added to recipe '{}'",
                fact.recipe(),
                self.name
            );
        }
        let kind = fact.kind();
        self.index.entry(kind).or_default().push(self.facts.len());
        self.scanned.insert(kind);
        self.facts.push(fact);
    }

    pub fn mark_scanned(&mut self, kind: FactKind) {
        self.scanned.insert(kind);
    }

    /// All facts in insertion order.
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Kinds whose parsers ran over this recipe.
    pub fn scanned_kinds(&self) -> impl Iterator<Item = FactKind> + '_ {
        self.scanned.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// A recipe restricted to the facts of one file. Scan markers are
    /// inherited so availability rules behave as for the whole recipe.
    pub fn file_view(&self, file: &str) -> Recipe {
        let mut view = Recipe::new(file);
        view.scanned = self.scanned.clone();
        for fact in self.facts.iter().filter(|f| f.file() == Some(file)) {
            view.index
                .entry(fact.kind())
                .or_default()
                .push(view.facts.len());
            view.facts.push(fact.clone());
        }
        view
    }
}

impl Extend<Fact> for Recipe {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        for fact in iter {
            self.add(fact);
        }
    }
}

impl FactContainer for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn query(&self, kind: FactKind) -> Box<dyn Iterator<Item = &Fact> + '_> {
        match self.index.get(&kind) {
            Some(positions) => Box::new(positions.iter().map(|&i| &self.facts[i])),
            None => Box::new(std::iter::empty()),
        }
    }

    fn scanned(&self, kind: FactKind) -> bool {
        self.scanned.contains(&kind)
    }

    fn has_facts(&self, kind: FactKind) -> bool {
        self.index.get(&kind).is_some_and(|v| !v.is_empty())
    }
}
