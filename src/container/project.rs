use std::collections::HashMap;

use super::{FactContainer, Recipe};
use crate::error::{Error, Result};
use crate::facts::{Fact, FactKind};

/// Ordered set of recipes, unique by name.
#[derive(Debug, Clone, Default)]
pub struct Project {
    name: String,
    recipes: Vec<Recipe>,
    positions: HashMap<String, usize>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a project from recipes, rejecting duplicate names.
    pub fn from_recipes(
        name: impl Into<String>,
        recipes: impl IntoIterator<Item = Recipe>,
    ) -> Result<Self> {
        let mut project = Self::new(name);
        for recipe in recipes {
            project.add(recipe)?;
        }
        Ok(project)
    }

    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        let name = recipe.name().to_string();
        if self.positions.contains_key(&name) {
            return Err(Error::DuplicateRecipe(name));
        }
        self.positions.insert(name, self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.positions.get(name).map(|&i| &self.recipes[i])
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Project {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

impl FactContainer for Project {
    fn name(&self) -> &str {
        &self.name
    }

    fn query(&self, kind: FactKind) -> Box<dyn Iterator<Item = &Fact> + '_> {
        Box::new(self.recipes.iter().flat_map(move |r| r.query(kind)))
    }

    fn scanned(&self, kind: FactKind) -> bool {
        self.recipes.iter().any(|r| r.scanned(kind))
    }

    fn has_facts(&self, kind: FactKind) -> bool {
        self.recipes.iter().any(|r| r.has_facts(kind))
    }
}
