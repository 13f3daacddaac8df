use parking_lot::Mutex;

use super::Recipe;
use crate::facts::{Fact, FactKind};

/// Population-phase handle for a recipe.
///
/// Many parser tasks may append through a shared `&RecipeBuilder`.
/// [`RecipeBuilder::build`] consumes it, so the resulting [`Recipe`] is
/// never written to again.
#[derive(Debug)]
pub struct RecipeBuilder {
    recipe: Mutex<Recipe>,
}

impl RecipeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            recipe: Mutex::new(Recipe::new(name)),
        }
    }

    pub fn add(&self, fact: Fact) {
        self.recipe.lock().add(fact);
    }

    /// Append a parser's whole output under one lock.
    pub fn add_all(&self, facts: impl IntoIterator<Item = Fact>) {
        let mut recipe = self.recipe.lock();
        recipe.extend(facts);
    }

    pub fn mark_scanned(&self, kind: FactKind) {
        self.recipe.lock().mark_scanned(kind);
    }

    pub fn build(self) -> Recipe {
        self.recipe.into_inner()
    }
}
