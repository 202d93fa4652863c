//! Structured version ordering.
//!
//! The comparator only needs to know how two canonical tokens order against
//! each other, or that they can't be ordered at all. Anything implementing
//! [`VersionScheme`] can stand in, including plain closures.

pub mod pep440;
pub mod segments;
pub mod semver_util;

use clap::ValueEnum;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

/// Orders two version tokens.
///
/// Returns `None` when either side can't be parsed under the scheme.
pub trait VersionScheme {
    fn compare(&self, a: &str, b: &str) -> Option<Ordering>;
}

impl<F> VersionScheme for F
where
    F: Fn(&str, &str) -> Option<Ordering>,
{
    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        self(a, b)
    }
}

/// Built-in version schemes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// PEP 440 ordering (pre/post/dev releases, zero-padded release segments)
    #[default]
    Pep440,
    /// Semantic versioning, with short versions padded to MAJOR.MINOR.PATCH
    Semver,
    /// Plain numeric dot-separated segments
    Segments,
}

impl VersionScheme for Scheme {
    fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        match self {
            Scheme::Pep440 => pep440::compare_versions(a, b),
            Scheme::Semver => semver_util::compare_versions(a, b),
            Scheme::Segments => segments::compare_versions(a, b),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::Pep440 => "pep440",
            Scheme::Semver => "semver",
            Scheme::Segments => "segments",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scheme_pads_short_versions() {
        for scheme in [Scheme::Pep440, Scheme::Semver, Scheme::Segments] {
            assert_eq!(
                scheme.compare("1.2", "1.2.0"),
                Some(Ordering::Equal),
                "{scheme}"
            );
            assert_eq!(
                scheme.compare("1.9", "1.10"),
                Some(Ordering::Less),
                "{scheme}"
            );
        }
    }

    #[test]
    fn test_every_scheme_rejects_hashes() {
        for scheme in [Scheme::Pep440, Scheme::Semver, Scheme::Segments] {
            assert_eq!(scheme.compare("abc123", "def456"), None, "{scheme}");
            assert_eq!(scheme.compare("1.0", "def456"), None, "{scheme}");
        }
    }

    #[test]
    fn test_closure_is_a_scheme() {
        let by_length = |a: &str, b: &str| Some(a.len().cmp(&b.len()));
        assert_eq!(by_length.compare("1", "100"), Some(Ordering::Less));
    }

    #[test]
    fn test_scheme_display_matches_value_names() {
        for scheme in Scheme::value_variants() {
            let name = scheme.to_possible_value().unwrap();
            assert_eq!(name.get_name(), scheme.to_string());
        }
    }

    #[test]
    fn test_scheme_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            scheme: Scheme,
        }

        let parsed: Wrapper = toml::from_str("scheme = \"segments\"").unwrap();
        assert_eq!(parsed.scheme, Scheme::Segments);
    }
}
