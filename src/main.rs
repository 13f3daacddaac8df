mod cli;
mod report;
mod report_helpers;

use std::error::Error;
use std::path::Path;

use clap::Parser;
use log::debug;

use cli::{Cli, Commands};
use metashift::persist::{ArchiveWriter, MemoryStore};
use metashift::snapshot::Snapshot;
use metashift::{BuildStatus, BuildStatusResolver, Configuration, Project};

/// Exit status of `msq status --fail-on-degraded` on a degraded build.
const DEGRADED_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Configuration, Box<dyn Error>> {
    let config = match path {
        Some(p) => Configuration::load(p)?,
        None => Configuration::default(),
    };
    debug!("configuration: {config:?}");
    Ok(config)
}

fn load_project(path: &Path) -> Result<Project, Box<dyn Error>> {
    let default_name = path
        .file_stem()
        .map_or_else(|| "project".to_string(), |s| s.to_string_lossy().into_owned());
    Ok(Snapshot::load(path)?.into_project(&default_name)?)
}

fn run(cli: Cli) -> Result<i32, Box<dyn Error>> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Evaluate { common } => {
            let project = load_project(&common.snapshot)?;
            report::evaluate(&project, &config, common.json)?;
        }
        Commands::Status {
            common,
            fail_on_degraded,
        } => {
            let project = load_project(&common.snapshot)?;
            let verdict = report::status(&project, &config, common.json)?;
            if fail_on_degraded && verdict == BuildStatus::Degraded {
                return Ok(DEGRADED_EXIT);
            }
        }
        Commands::Summary {
            common,
            metric,
            recipe,
        } => {
            let project = load_project(&common.snapshot)?;
            report::summary(&project, &config, metric, recipe.as_deref(), common.json)?;
        }
        Commands::Treemap { common, metric } => {
            let project = load_project(&common.snapshot)?;
            report::treemap(&project, &config, metric, common.json)?;
        }
        Commands::Diff { common, previous } => {
            let current = load_project(&common.snapshot)?;
            let previous = load_project(&previous)?;
            report::diff(&previous, &current, &config, common.json)?;
        }
        Commands::Archive { snapshot, output } => {
            let project = load_project(&snapshot)?;
            let status = BuildStatusResolver::new(&config).resolve(&project);
            let store = MemoryStore::new();
            ArchiveWriter::new(&store, &config).write(&project, &status)?;
            let text = serde_json::to_string_pretty(&store.to_json())?;
            match output {
                Some(path) => std::fs::write(&path, text)?,
                None => println!("{text}"),
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(0)
}
