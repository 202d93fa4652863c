//! Command inventories and the tab-separated loader that fills them.
//!
//! One [`Inventory`] is shared by both sources: each load writes its versions
//! under its own source label, so the second load never clobbers the first.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name pattern for an inventory; `{source}` is replaced by the source label
pub const DEFAULT_INPUT_PATTERN: &str = "command_data_{source}.tsv";

/// Placeholder substituted with the source label in input patterns
pub const SOURCE_PLACEHOLDER: &str = "{source}";

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Versions recorded for a single command, keyed by source label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    versions: HashMap<String, String>,
}

impl Record {
    /// Raw version recorded by `source`, if any
    pub fn version(&self, source: &str) -> Option<&str> {
        self.versions.get(source).map(|s| s.as_str())
    }
}

/// All commands seen so far, ordered by command name
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    commands: BTreeMap<String, Record>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `version` for `command` under `source`
    pub fn insert(&mut self, source: &str, command: &str, version: &str) {
        self.commands
            .entry(command.to_string())
            .or_default()
            .versions
            .insert(source.to_string(), version.to_string());
    }

    pub fn get(&self, command: &str) -> Option<&Record> {
        self.commands.get(command)
    }

    /// Commands in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.commands.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// What happened when loading one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file does not exist; nothing was loaded
    Missing,
    Loaded {
        /// Number of rows recorded
        rows: usize,
        /// 1-based row numbers (header is row 1) skipped for having fewer than two fields
        skipped: Vec<usize>,
    },
}

/// Build the input path for `source` from a pattern containing `{source}`
pub fn input_path(data_dir: &Path, pattern: &str, source: &str) -> PathBuf {
    data_dir.join(pattern.replace(SOURCE_PLACEHOLDER, source))
}

/// Load a tab-separated inventory for `source` into `inventory`.
///
/// The first row is a header and is always discarded. Each following row
/// needs a name and a version; anything after the second field is ignored.
pub fn load(
    inventory: &mut Inventory,
    source: &str,
    path: &Path,
) -> Result<LoadOutcome, InventoryError> {
    if !path.exists() {
        return Ok(LoadOutcome::Missing);
    }

    let content = fs::read_to_string(path).map_err(|e| InventoryError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut rows = 0;
    let mut skipped = Vec::new();

    // Row numbers are 1-based and count the header
    for (index, line) in content.lines().enumerate().skip(1) {
        let row_number = index + 1;
        let fields = split_row(line);
        if fields.len() < 2 {
            skipped.push(row_number);
            continue;
        }

        inventory.insert(source, &fields[0], &fields[1]);
        rows += 1;
    }

    Ok(LoadOutcome::Loaded { rows, skipped })
}

/// Split one tab-separated line into fields.
///
/// Double-quoted fields may contain tabs; `""` inside quotes is a literal
/// quote. A blank line has no fields.
fn split_row(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            '\t' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                at_field_start = true;
            }
            _ => {
                field.push(c);
                at_field_start = false;
            }
        }
    }
    fields.push(field);

    fields
}
