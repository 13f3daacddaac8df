/// CLI argument definitions for the `msq` command.
///
/// Every reporting subcommand reads a JSON project snapshot; thresholds
/// come from an optional TOML configuration file.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use metashift::Metric;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "msq", version, about = "Quality metrics over collected build facts")]
pub struct Cli {
    /// Log evaluation details (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML); missing keys take their defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by the reporting commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Project snapshot (JSON)
    pub snapshot: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate every metric for every recipe
    Evaluate {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Resolve the build verdict from the fatal metrics
    #[command(long_about = "\
Resolve the build verdict.

A metric degrades the build when it is configured as fatal, was measured
for the project and does not meet its threshold. Informational metrics are
reported but never change the verdict.

Exit status:
  0  verdict computed (OK, or DEGRADED without --fail-on-degraded)
  1  error reading the snapshot or configuration
  2  DEGRADED with --fail-on-degraded

Examples:
  msq status build.json
  msq status build.json --config quality.toml --fail-on-degraded")]
    Status {
        #[command(flatten)]
        common: CommonArgs,

        /// Exit with status 2 when the build is degraded
        #[arg(long)]
        fail_on_degraded: bool,
    },

    /// Per-recipe (or per-file) summary of one metric
    #[command(long_about = "\
Summarize one metric.

Without --recipe, prints one row per recipe followed by project
statistics (min, average, max over recipes where the metric is
available). With --recipe, prints one row per file of that recipe.

Metric names: premirrorCache, sharedStateCache, recipeViolations, comments,
codeViolations, complexity, duplications, unitTests, statementCoverage,
branchCoverage, mutationTests (kebab-case and UPPER_SNAKE also accepted).

Examples:
  msq summary build.json --metric unit-tests
  msq summary build.json --metric duplications --recipe busybox-1.35-r0")]
    Summary {
        #[command(flatten)]
        common: CommonArgs,

        /// Metric to summarize
        #[arg(short, long)]
        metric: Metric,

        /// Break one recipe down by file
        #[arg(short, long)]
        recipe: Option<String>,
    },

    /// Treemap data: size and grade per recipe
    Treemap {
        #[command(flatten)]
        common: CommonArgs,

        /// Metric to grade by (default: fraction of qualified metrics)
        #[arg(short, long)]
        metric: Option<Metric>,
    },

    /// Compare two builds of the same project
    Diff {
        #[command(flatten)]
        common: CommonArgs,

        /// Snapshot of the previous build
        #[arg(long)]
        previous: PathBuf,
    },

    /// Write every rollup to a JSON archive keyed like the report store
    Archive {
        /// Project snapshot (JSON)
        snapshot: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config,
}
