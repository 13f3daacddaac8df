//! Project snapshots: the facts of one build saved as JSON.
//!
//! ```json
//! {"recipes": [{"name": "A-1.0-r0", "scanned": ["codeSize"], "facts": [...]}]}
//! ```
//!
//! `scanned` lists kinds whose parsers ran but may have produced nothing;
//! kinds with at least one fact are scanned regardless.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::container::{FactContainer, Project, Recipe};
use crate::error::{Error, Result};
use crate::facts::{Fact, FactKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    pub name: String,
    #[serde(default)]
    pub scanned: Vec<FactKind>,
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl RecipeSnapshot {
    pub fn of(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name().to_string(),
            scanned: recipe
                .scanned_kinds()
                .filter(|k| !recipe.has_facts(*k))
                .collect(),
            facts: recipe.facts().to_vec(),
        }
    }

    pub fn into_recipe(self) -> Recipe {
        let mut recipe = Recipe::new(self.name);
        for kind in self.scanned {
            recipe.mark_scanned(kind);
        }
        recipe.extend(self.facts);
        recipe
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub name: Option<String>,
    pub recipes: Vec<RecipeSnapshot>,
}

impl Snapshot {
    pub fn of(project: &Project) -> Self {
        Self {
            name: Some(project.name().to_string()),
            recipes: project.iter().map(RecipeSnapshot::of).collect(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let snapshot = Self::from_json_str(&text)?;
        info!(
            "{}: {} recipes",
            path.display(),
            snapshot.recipes.len()
        );
        Ok(snapshot)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the project. Fails on duplicate recipe names.
    pub fn into_project(self, default_name: &str) -> Result<Project> {
        let name = self.name.unwrap_or_else(|| default_name.to_string());
        Project::from_recipes(
            name,
            self.recipes.into_iter().map(RecipeSnapshot::into_recipe),
        )
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
