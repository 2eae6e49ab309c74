//! PAM scanning over a single strand.

use crate::sequence::Sequence;
use crate::types::Offset;

/// Finds candidate guide offsets along one strand.
///
/// Scans left to right for literal occurrences of `pam`. A match at index
/// `i` proposes the guide window `[i - guide_length, i)`, sitting
/// immediately 5' of the PAM on the scanned strand. The candidate is kept
/// when its offset is strictly positive and no exclusion entry occurs
/// anywhere inside the window. The search origin then advances to `i + 1`
/// whether or not the candidate was kept, so PAM occurrences one base
/// apart are all visited.
///
/// Offsets are returned in scan order. A match too close to the strand
/// start for a full window is dropped silently; it is not an error. The
/// scanner holds no state between calls.
///
/// # Examples
///
/// ```rust
/// use optiguide_core::scanner::find_candidates;
/// use optiguide_core::sequence::Sequence;
///
/// let region = Sequence::new("TTTTAAAAGGCCCC");
/// let offsets = find_candidates(&region, "GG", 4, &[]);
/// assert_eq!(offsets, vec![4]);
/// ```
#[must_use]
pub fn find_candidates(
    sequence: &Sequence,
    pam: &str,
    guide_length: usize,
    exclusions: &[String],
) -> Vec<Offset> {
    let pam = pam.as_bytes();
    let mut candidates = Vec::new();
    let mut origin = 0;

    while let Some(match_index) = sequence.find_from(pam, origin) {
        if match_index > guide_length
            && let Some(window) = sequence.window(match_index - guide_length, guide_length)
            && !window_is_excluded(window, exclusions)
        {
            candidates.push(match_index - guide_length);
        }
        origin = match_index + 1;
    }

    candidates
}

/// True when any exclusion entry occurs anywhere inside the guide window.
///
/// Containment, not equality: an entry shorter than the window rejects on
/// any interior hit, an entry longer than the window can never hit.
fn window_is_excluded(window: &[u8], exclusions: &[String]) -> bool {
    exclusions.iter().any(|site| {
        !site.is_empty()
            && window
                .windows(site.len())
                .any(|chunk| chunk == site.as_bytes())
    })
}

/// Remaps a raw reverse-strand offset into forward coordinates.
///
/// The reverse complement has the same length as the forward strand, so a
/// guide found at `raw_offset` on it ends `raw_offset` bases before the
/// forward strand's end. A raw offset of 0 maps to `sequence_length`, one
/// past the last valid position; the selector discards such values rather
/// than storing them.
#[must_use]
pub const fn remap_to_forward(sequence_length: usize, raw_offset: Offset) -> Offset {
    sequence_length - raw_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_exclusions() -> Vec<String> {
        Vec::new()
    }

    fn exclusions(sites: &[&str]) -> Vec<String> {
        sites.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_pam_occurrence_yields_empty() {
        let region = Sequence::new("TTTTTTTTTTTT");
        let offsets = find_candidates(&region, "GG", 4, &no_exclusions());
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_candidate_at_offset_zero_rejected() {
        // PAM at index 4 proposes offset 0, which the strict lower bound drops
        let region = Sequence::new("AAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &no_exclusions());
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_candidate_accepted() {
        // PAM at index 8, window [4, 8)
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &no_exclusions());
        assert_eq!(offsets, vec![4]);
    }

    #[test]
    fn test_offsets_strictly_positive_in_scan_order() {
        let region = Sequence::new("AAGGACGGTTGG");
        let offsets = find_candidates(&region, "GG", 2, &no_exclusions());
        assert_eq!(offsets, vec![4, 8]);
        assert!(offsets.iter().all(|&offset| offset > 0));
    }

    #[test]
    fn test_overlapping_pams_one_base_apart() {
        // GGG holds two GG matches; advancing by one finds both
        let region = Sequence::new("TTTTGGG");
        let offsets = find_candidates(&region, "GG", 2, &no_exclusions());
        assert_eq!(offsets, vec![2, 3]);
    }

    #[test]
    fn test_exclusion_inside_window_rejects() {
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &exclusions(&["AAAA"]));
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_exclusion_outside_window_does_not_reject() {
        // CCCC occurs in the sequence but not in the window [4, 8)
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &exclusions(&["CCCC"]));
        assert_eq!(offsets, vec![4]);
    }

    #[test]
    fn test_exclusion_shorter_than_window_rejects_on_containment() {
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &exclusions(&["AA"]));
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_exclusion_longer_than_window_never_rejects() {
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &exclusions(&["AAAAAAAA"]));
        assert_eq!(offsets, vec![4]);
    }

    #[test]
    fn test_any_exclusion_entry_rejects() {
        // The first entry misses the window, the second hits
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &exclusions(&["GGGG", "AA"]));
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_empty_exclusion_entry_never_rejects() {
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "GG", 4, &exclusions(&[""]));
        assert_eq!(offsets, vec![4]);
    }

    #[test]
    fn test_empty_pam_matches_nothing() {
        let region = Sequence::new("TTTTAAAAGGCCCC");
        let offsets = find_candidates(&region, "", 4, &no_exclusions());
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_scan_is_deterministic() {
        let region = Sequence::new("CCGGTTAAGGCCGGAAGGTT");
        let first = find_candidates(&region, "GG", 3, &no_exclusions());
        let second = find_candidates(&region, "GG", 3, &no_exclusions());
        assert_eq!(first, second);
    }

    #[test]
    fn test_remap_to_forward() {
        assert_eq!(remap_to_forward(14, 1), 13);
        assert_eq!(remap_to_forward(14, 13), 1);
        assert_eq!(remap_to_forward(100, 40), 60);
    }

    #[test]
    fn test_remap_raw_zero_lands_past_the_end() {
        // The candidate > 0 rule keeps raw 0 out of real scans; the helper
        // still exposes the boundary value for the selector to discard.
        assert_eq!(remap_to_forward(14, 0), 14);
    }
}
