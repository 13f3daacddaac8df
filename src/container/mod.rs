//! Composite fact containers.
//!
//! A [`Recipe`] owns facts directly; a [`Project`] owns recipes. Both
//! implement [`FactContainer`], so evaluators run unchanged over a single
//! recipe, a single file of a recipe, or the whole project.
//!
//! Two predicates are tracked separately per kind: `scanned` (the parser
//! for that kind ran over this container, possibly finding nothing) and
//! `has_facts` (at least one fact of that kind exists).

mod builder;
mod project;
mod recipe;

use std::collections::BTreeSet;

use crate::facts::{Fact, FactKind};

pub use builder::RecipeBuilder;
pub use project::Project;
pub use recipe::Recipe;

/// Read-only typed access to a tree of facts.
pub trait FactContainer: Sync {
    fn name(&self) -> &str;

    /// Facts of `kind` in recipe order, then insertion order.
    /// Each call starts a fresh iteration.
    fn query(&self, kind: FactKind) -> Box<dyn Iterator<Item = &Fact> + '_>;

    /// True if the parser for `kind` ran over this container.
    fn scanned(&self, kind: FactKind) -> bool;

    /// True if at least one fact of `kind` exists. Implies `scanned`.
    fn has_facts(&self, kind: FactKind) -> bool {
        self.query(kind).next().is_some()
    }

    /// Distinct files referenced by facts of the given kinds, sorted.
    fn files(&self, kinds: &[FactKind]) -> BTreeSet<&str> {
        kinds
            .iter()
            .flat_map(|k| self.query(*k))
            .filter_map(Fact::file)
            .collect()
    }

    /// Sum of the line counts of all source files.
    fn lines_of_code(&self) -> u64 {
        self.query(FactKind::CodeSize)
            .map(|f| match f {
                Fact::CodeSize(s) => s.lines,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
