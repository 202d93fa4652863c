//! Per-command version status resolution.
//!
//! Two raw version strings go in, a [`Status`] and two display strings come
//! out. Status is decided on canonical tokens only; the display strings are
//! derived separately and never parsed.

use crate::version::{Scheme, VersionScheme};
use std::cmp::Ordering;
use std::fmt;

/// Marker used in inventories (and in the report) for a missing version
pub const MISSING_MARKER: &str = "N/A";

/// Annotation appended by the collector when the version came from a man page
pub const MAN_PAGE_ANNOTATION: &str = " (from man page)";

/// How a command's version changed between the two sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Added,
    Removed,
    Upgraded,
    Downgraded,
    Same,
    /// Versions differ but can't be ordered
    Changed,
    /// Neither source has a version
    Unknown,
}

impl Status {
    pub const ALL: [Status; 7] = [
        Status::Added,
        Status::Removed,
        Status::Upgraded,
        Status::Downgraded,
        Status::Same,
        Status::Changed,
        Status::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Added => "Added",
            Status::Removed => "Removed",
            Status::Upgraded => "Upgraded",
            Status::Downgraded => "Downgraded",
            Status::Same => "Same",
            Status::Changed => "Changed",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing one command across both sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub status: Status,
    pub display_a: String,
    pub display_b: String,
}

/// Reduce a raw version to its canonical token.
///
/// Empty values, the `N/A` marker and values that are empty once the man page
/// annotation and surrounding whitespace are gone all count as absent.
pub fn clean(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let token = raw.replace(MAN_PAGE_ANNOTATION, "");
    let token = token.trim();

    if token.is_empty() || token == MISSING_MARKER {
        None
    } else {
        Some(token.to_string())
    }
}

/// Human-facing form of a raw version: canonical token with `.` shown as `,`.
pub fn format_display(raw: Option<&str>) -> String {
    match clean(raw) {
        Some(token) => token.replace('.', ","),
        None => MISSING_MARKER.to_string(),
    }
}

/// Decide the status of a command from its two raw versions.
pub fn status_with(
    scheme: &dyn VersionScheme,
    v1_raw: Option<&str>,
    v2_raw: Option<&str>,
) -> Status {
    let (v1, v2) = match (clean(v1_raw), clean(v2_raw)) {
        (Some(_), None) => return Status::Removed,
        (None, Some(_)) => return Status::Added,
        (None, None) => return Status::Unknown,
        (Some(v1), Some(v2)) => (v1, v2),
    };

    if v1 == v2 {
        return Status::Same;
    }

    match scheme.compare(&v1, &v2) {
        Some(Ordering::Less) => Status::Upgraded,
        Some(Ordering::Greater) => Status::Downgraded,
        Some(Ordering::Equal) => Status::Same,
        None => Status::Changed,
    }
}

/// Compare two raw versions under an explicit scheme.
pub fn resolve_with(
    scheme: &dyn VersionScheme,
    v1_raw: Option<&str>,
    v2_raw: Option<&str>,
) -> Comparison {
    Comparison {
        status: status_with(scheme, v1_raw, v2_raw),
        display_a: format_display(v1_raw),
        display_b: format_display(v2_raw),
    }
}

/// Compare two raw versions with the default (PEP 440) scheme.
pub fn resolve(v1_raw: Option<&str>, v2_raw: Option<&str>) -> Comparison {
    resolve_with(&Scheme::default(), v1_raw, v2_raw)
}
