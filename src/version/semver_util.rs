use semver::Version;
use std::cmp::Ordering;

/// Normalize a version string to full semver format (MAJOR.MINOR.PATCH)
/// "1" -> "1.0.0", "1.2" -> "1.2.0", "1.2.3" -> "1.2.3"
fn normalize_version(version_str: &str) -> String {
    let version_str = version_str.trim_start_matches('v');

    // Keep prerelease/build suffixes (e.g., "1.0-alpha", "1.0+build") out of the padding
    let (base, suffix) = match version_str.find(['-', '+']) {
        Some(idx) => (&version_str[..idx], &version_str[idx..]),
        None => (version_str, ""),
    };

    let parts: Vec<&str> = base.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => base.to_string(),
    };

    format!("{}{}", normalized, suffix)
}

/// Compare two semver version strings by precedence, padding incomplete versions first
/// Build metadata is ignored. Returns None if either version is invalid
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let va = Version::parse(&normalize_version(a)).ok()?;
    let vb = Version::parse(&normalize_version(b)).ok()?;
    Some(va.cmp_precedence(&vb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_version() {
        assert_eq!(normalize_version("1"), "1.0.0");
        assert_eq!(normalize_version("1.2"), "1.2.0");
        assert_eq!(normalize_version("1.2.3"), "1.2.3");
        assert_eq!(normalize_version("v0.9"), "0.9.0");
        assert_eq!(normalize_version("1.0-alpha"), "1.0.0-alpha");
        assert_eq!(normalize_version("1-beta.1"), "1.0.0-beta.1");
        assert_eq!(normalize_version("2.1+apple"), "2.1.0+apple");
    }

    #[test]
    fn test_version_comparison() {
        assert_eq!(compare_versions("1.0.0", "2.0.0"), Some(Ordering::Less));
        assert_eq!(compare_versions("2.0.0", "1.0.0"), Some(Ordering::Greater));
        assert_eq!(compare_versions("1.0.0", "1.0.0"), Some(Ordering::Equal));
        assert_eq!(compare_versions("1.2", "1.2.0"), Some(Ordering::Equal));
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(compare_versions("2.1+apple", "2.1"), Some(Ordering::Equal));
        assert_eq!(compare_versions("1.0+a", "1.0+b"), Some(Ordering::Equal));
        assert_eq!(compare_versions("1.0+b", "1.1+a"), Some(Ordering::Less));
    }

    #[test]
    fn test_prerelease_sorts_before_release() {
        assert_eq!(compare_versions("1.0-rc.1", "1.0"), Some(Ordering::Less));
    }

    #[test]
    fn test_invalid_versions() {
        assert_eq!(compare_versions("abc123", "1.0.0"), None);
        assert_eq!(compare_versions("1.2.3.4", "1.2.3"), None);
        assert_eq!(compare_versions("2024.01.15", "2024.1.15"), None);
    }
}
