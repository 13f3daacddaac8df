//! Archiving of evaluation results into a key/value store.
//!
//! Keys are lists of segments joined with `:`, for example
//! `PROJECT:UNIT_TESTS:SUMMARIES` or `RECIPE:COMMENTS:SUMMARIES:A-1.0-r0`.

use std::collections::BTreeMap;

use log::debug;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::aggregate::{
    evaluation_summaries, file_summaries, overall_treemap, recipe_summaries, statistics, treemap,
};
use crate::config::Configuration;
use crate::container::{FactContainer, Project};
use crate::error::Result;
use crate::metrics::Evaluator;
use crate::status::StatusReport;

const PROJECT: &str = "PROJECT";
const RECIPE: &str = "RECIPE";
const SUMMARIES: &str = "SUMMARIES";
const TREEMAP: &str = "TREEMAP";
const STATISTICS: &str = "STATISTICS";
const STATUS: &str = "STATUS";

pub fn join_key(key: &[&str]) -> String {
    key.join(":")
}

/// Narrow put/get contract of a persistent store.
pub trait DataStore: Sync {
    fn put(&self, value: Value, key: &[&str]) -> Result<()>;
    fn get(&self, key: &[&str]) -> Option<Value>;

    fn has(&self, key: &[&str]) -> bool {
        self.get(key).is_some()
    }
}

/// In-process store, used by the binary and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    /// All entries as one JSON object keyed by joined key.
    pub fn to_json(&self) -> Value {
        let entries = self.entries.lock();
        Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Map<_, _>>(),
        )
    }
}

impl DataStore for MemoryStore {
    fn put(&self, value: Value, key: &[&str]) -> Result<()> {
        self.entries.lock().insert(join_key(key), value);
        Ok(())
    }

    fn get(&self, key: &[&str]) -> Option<Value> {
        self.entries.lock().get(&join_key(key)).cloned()
    }
}

/// Writes every project and per-metric rollup of a build into a store.
pub struct ArchiveWriter<'a, S: DataStore + ?Sized> {
    store: &'a S,
    config: &'a Configuration,
}

impl<'a, S: DataStore + ?Sized> ArchiveWriter<'a, S> {
    pub fn new(store: &'a S, config: &'a Configuration) -> Self {
        Self { store, config }
    }

    fn put(&self, value: &impl Serialize, key: &[&str]) -> Result<()> {
        self.store.put(serde_json::to_value(value)?, key)
    }

    pub fn write(&self, project: &Project, status: &StatusReport) -> Result<()> {
        self.write_summaries(project)?;
        self.put(&overall_treemap(project, self.config), &[PROJECT, TREEMAP])?;
        self.put(status, &[PROJECT, STATUS])?;
        for evaluator in Evaluator::all(self.config) {
            self.write_metric(project, &evaluator)?;
        }
        debug!("archived {} into the store", project.name());
        Ok(())
    }

    /// One row per recipe with the ratio of every metric.
    fn write_summaries(&self, project: &Project) -> Result<()> {
        let rows: Vec<Value> = evaluation_summaries(project, self.config)
            .into_iter()
            .map(|summary| {
                let mut row = Map::new();
                row.insert("name".into(), json!(summary.name));
                row.insert("linesOfCode".into(), json!(summary.lines_of_code));
                for (metric, evaluation) in &summary.evaluations {
                    row.insert(metric.as_str().into(), json!(evaluation.ratio()));
                }
                Value::Object(row)
            })
            .collect();
        self.store.put(Value::Array(rows), &[PROJECT, SUMMARIES])
    }

    fn write_metric(&self, project: &Project, evaluator: &Evaluator) -> Result<()> {
        let key = evaluator.metric().key();
        self.put(&recipe_summaries(project, evaluator), &[PROJECT, key, SUMMARIES])?;
        self.put(&treemap(project, evaluator), &[PROJECT, key, TREEMAP])?;
        self.put(&statistics(project, evaluator), &[PROJECT, key, STATISTICS])?;
        for recipe in project {
            let files = file_summaries(recipe, evaluator);
            if !files.is_empty() {
                self.put(&files, &[RECIPE, key, SUMMARIES, recipe.name()])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
