//! Load both inventories, compare, write the report.

use crate::cli::Cli;
use crate::compare::Status;
use crate::config::CmddiffConfig;
use crate::inventory::{self, DEFAULT_INPUT_PATTERN, Inventory, LoadOutcome};
use crate::report::{self, DEFAULT_OUTPUT, DEFAULT_PRODUCT};
use crate::version::Scheme;
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything a run needs, after CLI flags and config have been merged
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source_a: String,
    pub source_b: String,
    pub data_dir: PathBuf,
    pub input_pattern: String,
    pub output: PathBuf,
    pub scheme: Scheme,
    pub product: String,
    pub verbose: bool,
}

impl Settings {
    /// Defaults for comparing `source_a` against `source_b`
    pub fn new(source_a: impl Into<String>, source_b: impl Into<String>) -> Self {
        Self {
            source_a: source_a.into(),
            source_b: source_b.into(),
            data_dir: PathBuf::from("."),
            input_pattern: DEFAULT_INPUT_PATTERN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            scheme: Scheme::default(),
            product: DEFAULT_PRODUCT.to_string(),
            verbose: false,
        }
    }

    /// CLI flags win over the config file, which wins over defaults
    pub fn resolve(cli: &Cli, config: &CmddiffConfig) -> Self {
        let defaults = Self::new(&cli.os1_name, &cli.os2_name);

        Self {
            data_dir: cli
                .data_dir
                .clone()
                .or_else(|| config.data_dir.clone())
                .unwrap_or(defaults.data_dir),
            input_pattern: config
                .input_pattern
                .clone()
                .unwrap_or(defaults.input_pattern),
            output: cli
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or(defaults.output),
            scheme: cli.scheme.or(config.scheme).unwrap_or(defaults.scheme),
            product: config.product.clone().unwrap_or(defaults.product),
            verbose: cli.verbose,
            ..defaults
        }
    }

    pub fn input_path(&self, source: &str) -> PathBuf {
        inventory::input_path(&self.data_dir, &self.input_pattern, source)
    }

    /// Resolved settings, one line each, for verbose output
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!(
                "Comparing '{}' to '{}' using {} ordering",
                self.source_a, self.source_b, self.scheme
            ),
            format!("Data directory: {}", self.data_dir.display()),
            format!("Input pattern: {}", self.input_pattern),
            format!("Output: {}", self.output.display()),
            format!("Product: {}", self.product),
        ]
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub commands: usize,
    pub counts: BTreeMap<Status, usize>,
    /// Sources whose inventory file was not found
    pub missing_sources: Vec<String>,
}

impl Summary {
    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }
}

/// Load one source, reporting progress and recoverable problems.
/// Returns false if the file was missing.
fn load_source(inventory: &mut Inventory, source: &str, path: &Path) -> Result<bool> {
    if path.exists() {
        println!("Reading data from {}...", path.display());
    }

    match inventory::load(inventory, source, path)? {
        LoadOutcome::Missing => {
            println!(
                "{} Data file not found for '{}'. Skipping. Searched for: {}",
                "Warning:".yellow(),
                source,
                path.display()
            );
            Ok(false)
        }
        LoadOutcome::Loaded { rows, skipped } => {
            for row in &skipped {
                println!(
                    "{} Skipping malformed row {} in {}.",
                    "Warning:".yellow(),
                    row,
                    path.display()
                );
            }
            if rows == 0 {
                println!(
                    "{} No commands found in {}.",
                    "Warning:".yellow(),
                    path.display()
                );
            }
            Ok(true)
        }
    }
}

/// Run a full comparison and write the report.
pub fn run(settings: &Settings) -> Result<Summary> {
    if settings.verbose {
        for line in settings.describe() {
            println!("{}", line.cyan());
        }
    }

    let mut inventory = Inventory::new();
    let mut missing_sources = Vec::new();

    for source in [&settings.source_a, &settings.source_b] {
        let path = settings.input_path(source);
        if !load_source(&mut inventory, source, &path)? {
            missing_sources.push(source.clone());
        }
    }

    let rows = report::build_rows(
        &inventory,
        &settings.source_a,
        &settings.source_b,
        &settings.scheme,
    )?;

    println!(
        "\nData read successfully. Now generating report at {}...",
        settings.output.display()
    );

    let header = report::header(&settings.product, &settings.source_a, &settings.source_b);
    report::write_report(&settings.output, &header, &rows)?;

    Ok(Summary {
        output: settings.output.clone(),
        commands: rows.len(),
        counts: report::count_by_status(&rows),
        missing_sources,
    })
}
