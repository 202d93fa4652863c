//! Report rows and the semicolon-separated writer.

use crate::compare::{self, Status};
use crate::inventory::Inventory;
use crate::version::VersionScheme;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Field delimiter of the output file
pub const DELIMITER: char = ';';

/// Record terminator of the output file
pub const LINE_TERMINATOR: &str = "\r\n";

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "command_comparison.csv";

/// Default product name used in the version column headers
pub const DEFAULT_PRODUCT: &str = "macOS";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No command data was loaded. Aborting.")]
    NoData,

    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub command: String,
    pub display_a: String,
    pub display_b: String,
    pub status: Status,
}

impl Row {
    fn fields(&self) -> [&str; 4] {
        [
            self.command.as_str(),
            self.display_a.as_str(),
            self.display_b.as_str(),
            self.status.as_str(),
        ]
    }
}

/// Uppercase the first character and lowercase the rest ("SEQUOIA" -> "Sequoia")
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Column headers for a comparison of `source_a` against `source_b`
pub fn header(product: &str, source_a: &str, source_b: &str) -> [String; 4] {
    [
        "Command Name".to_string(),
        format!("{} {}", product, capitalize(source_a)),
        format!("{} {}", product, capitalize(source_b)),
        "Status".to_string(),
    ]
}

/// Compare every command in `inventory`, in name order.
pub fn build_rows(
    inventory: &Inventory,
    source_a: &str,
    source_b: &str,
    scheme: &dyn VersionScheme,
) -> Result<Vec<Row>, ReportError> {
    if inventory.is_empty() {
        return Err(ReportError::NoData);
    }

    let rows = inventory
        .iter()
        .map(|(command, record)| {
            let comparison =
                compare::resolve_with(scheme, record.version(source_a), record.version(source_b));
            Row {
                command: command.to_string(),
                display_a: comparison.display_a,
                display_b: comparison.display_b,
                status: comparison.status,
            }
        })
        .collect();

    Ok(rows)
}

/// Number of rows per status
pub fn count_by_status(rows: &[Row]) -> BTreeMap<Status, usize> {
    rows.iter().fold(BTreeMap::new(), |mut counts, row| {
        *counts.entry(row.status).or_insert(0) += 1;
        counts
    })
}

/// Quote a field if it contains the delimiter, a quote or a line break
fn escape_field(field: &str) -> String {
    if field.contains([DELIMITER, '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let line = fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string());
    out.push_str(&line);
    out.push_str(LINE_TERMINATOR);
}

/// Render the header and rows as semicolon-separated text
pub fn render(header: &[String; 4], rows: &[Row]) -> String {
    let mut out = String::new();
    push_record(&mut out, header.iter().map(String::as_str));
    for row in rows {
        push_record(&mut out, row.fields());
    }
    out
}

/// Write the report to `path`, replacing any existing file
pub fn write_report(path: &Path, header: &[String; 4], rows: &[Row]) -> Result<(), ReportError> {
    fs::write(path, render(header, rows)).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
