use pep440_rs::Version;
use std::cmp::Ordering;

/// Compare two PEP 440 version strings
/// Returns None if either version is invalid
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let va = a.parse::<Version>().ok()?;
    let vb = b.parse::<Version>().ok()?;
    Some(va.cmp(&vb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_comparison() {
        assert_eq!(compare_versions("1.0.0", "2.0.0"), Some(Ordering::Less));
        assert_eq!(compare_versions("2.0.0", "1.0.0"), Some(Ordering::Greater));
        assert_eq!(compare_versions("1.0.0", "1.0.0"), Some(Ordering::Equal));
    }

    #[test]
    fn test_release_segments_are_zero_padded() {
        assert_eq!(compare_versions("1.2", "1.2.0"), Some(Ordering::Equal));
        assert_eq!(compare_versions("3", "3.0.0.0"), Some(Ordering::Equal));
        assert_eq!(compare_versions("1.9", "1.10"), Some(Ordering::Less));
    }

    #[test]
    fn test_prerelease_and_post_release_ordering() {
        assert_eq!(compare_versions("1.0rc1", "1.0"), Some(Ordering::Less));
        assert_eq!(compare_versions("1.0a1", "1.0b1"), Some(Ordering::Less));
        assert_eq!(compare_versions("1.0.post1", "1.0"), Some(Ordering::Greater));
        assert_eq!(compare_versions("1.0.dev1", "1.0a1"), Some(Ordering::Less));
    }

    #[test]
    fn test_leading_v_is_accepted() {
        assert_eq!(compare_versions("v2.1", "2.1"), Some(Ordering::Equal));
    }

    #[test]
    fn test_invalid_versions() {
        assert_eq!(compare_versions("abc123", "1.0"), None);
        assert_eq!(compare_versions("1.0", "15 Jan 2024"), None);
        assert_eq!(compare_versions("", "1.0"), None);
    }
}
