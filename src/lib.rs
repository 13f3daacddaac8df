//! Quality fact store and evaluation engine.
//!
//! Parsers feed typed [`Fact`]s into per-recipe containers. Evaluators
//! reduce a container to a numerator/denominator [`Evaluation`] judged
//! against a threshold, aggregators roll recipes up to project level, and
//! the [`BuildStatusResolver`] folds every metric into one build verdict.

pub mod aggregate;
pub mod config;
pub mod container;
pub mod dups;
pub mod error;
pub mod facts;
pub mod metrics;
pub mod persist;
pub mod snapshot;
pub mod status;

pub use config::Configuration;
pub use container::{FactContainer, Project, Recipe, RecipeBuilder};
pub use error::{Error, Result};
pub use facts::{Fact, FactKind};
pub use metrics::{Evaluation, Evaluator, Metric, Orientation, RecipeEvaluator};
pub use status::{BuildStatus, BuildStatusResolver, StatusReport};
