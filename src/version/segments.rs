//! Dot-separated numeric versions, compared segment by segment.
//!
//! Missing trailing segments count as zero, so `1.2` and `1.2.0` are equal.
//! Anything other than non-empty runs of ASCII digits between the dots is
//! rejected.

use std::cmp::Ordering;

fn parse_segments(version: &str) -> Option<Vec<u64>> {
    version
        .split('.')
        .map(|segment| {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            segment.parse().ok()
        })
        .collect()
}

/// Compare two numeric dot-segment versions
/// Returns None if either version is invalid
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let va = parse_segments(a)?;
    let vb = parse_segments(b)?;

    let len = va.len().max(vb.len());
    let ordering = (0..len)
        .map(|i| {
            let x = va.get(i).copied().unwrap_or(0);
            let y = vb.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal);

    Some(ordering)
}
