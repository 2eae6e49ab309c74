//! Strand selection per application mode.

use crate::config::{ApplicationMode, GuideConfig};
use crate::scanner::{find_candidates, remap_to_forward};
use crate::sequence::Sequence;
use crate::types::{Offset, StrandCandidates};

/// Collects guide candidates for one target region under the configured mode.
///
/// Discovery scans both strands. Interference and screening scan only the
/// reverse strand and leave the forward list present but empty, so every
/// region always carries both lists. Activation scans both strands and then
/// keeps only offsets strictly below the cutoff.
///
/// Reverse-strand offsets are remapped into forward coordinates before
/// storage; a remapped offset that lands at or past the region end is
/// discarded silently.
///
/// # Examples
///
/// ```rust
/// use optiguide_core::config::GuideConfig;
/// use optiguide_core::selector::select_candidates;
/// use optiguide_core::sequence::Sequence;
///
/// let config = GuideConfig {
///     guide_length: 4,
///     ..Default::default()
/// };
/// let region = Sequence::new("TTTTAAAAGGCCCC");
/// let candidates = select_candidates(&region, &config);
/// assert_eq!(candidates.forward, vec![4]);
/// ```
#[must_use]
pub fn select_candidates(region: &Sequence, config: &GuideConfig) -> StrandCandidates {
    match config.mode {
        ApplicationMode::Discovery => StrandCandidates {
            forward: scan_forward(region, config),
            reverse: scan_reverse(region, config),
        },
        ApplicationMode::Interference | ApplicationMode::Screening => StrandCandidates {
            forward: Vec::new(),
            reverse: scan_reverse(region, config),
        },
        ApplicationMode::Activation { cutoff } => {
            let mut forward = scan_forward(region, config);
            let mut reverse = scan_reverse(region, config);
            forward.retain(|&offset| offset < cutoff);
            reverse.retain(|&offset| offset < cutoff);
            StrandCandidates { forward, reverse }
        }
    }
}

fn scan_forward(region: &Sequence, config: &GuideConfig) -> Vec<Offset> {
    find_candidates(region, &config.pam, config.guide_length, &config.exclusions)
}

/// Scans the reverse complement and remaps each hit into forward coordinates.
fn scan_reverse(region: &Sequence, config: &GuideConfig) -> Vec<Offset> {
    let complement = region.reverse_complement();
    find_candidates(
        &complement,
        &config.pam,
        config.guide_length,
        &config.exclusions,
    )
    .into_iter()
    .map(|raw| remap_to_forward(region.len(), raw))
    .filter(|&offset| offset < region.len())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(mode: ApplicationMode) -> GuideConfig {
        GuideConfig {
            guide_length: 4,
            mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_discovery_scans_both_strands() {
        // No PAM forward. The reverse complement AAAAGGGGTTTTAAAA carries
        // GG matches at 4, 5, and 6; the first proposes offset 0 and is
        // dropped, the others remap to 15 and 14.
        let region = Sequence::new("TTTTAAAACCCCTTTT");
        let candidates = select_candidates(&region, &config_with(ApplicationMode::Discovery));
        assert!(candidates.forward.is_empty());
        assert_eq!(candidates.reverse, vec![15, 14]);
    }

    #[test]
    fn test_discovery_forward_only_region() {
        let region = Sequence::new("TTTTAAAAGGTTTT");
        let candidates = select_candidates(&region, &config_with(ApplicationMode::Discovery));
        assert_eq!(candidates.forward, vec![4]);
        assert!(candidates.reverse.is_empty());
    }

    #[test]
    fn test_reverse_offsets_remap_into_forward_coordinates() {
        // Reverse complement of TTTTTTTCCTTTTT is AAAAAGGAAAAAAA with a PAM
        // at index 5 and a raw offset of 1, which remaps to 14 - 1 = 13.
        let region = Sequence::new("TTTTTTTCCTTTTT");
        let config = GuideConfig {
            guide_length: 4,
            mode: ApplicationMode::Discovery,
            ..Default::default()
        };
        let candidates = select_candidates(&region, &config);
        assert!(candidates.forward.is_empty());
        assert_eq!(candidates.reverse, vec![13]);
    }

    #[test]
    fn test_interference_keeps_forward_list_present_but_empty() {
        // Both strands carry an eligible PAM; interference keeps reverse only.
        let region = Sequence::new("TTTTAAAAGGCCTTTTT");
        let candidates = select_candidates(&region, &config_with(ApplicationMode::Interference));
        assert!(candidates.forward.is_empty());
        assert!(!candidates.reverse.is_empty());
    }

    #[test]
    fn test_screening_matches_interference_selection() {
        let region = Sequence::new("TTTTAAAAGGCCTTTTT");
        let interference =
            select_candidates(&region, &config_with(ApplicationMode::Interference));
        let screening = select_candidates(&region, &config_with(ApplicationMode::Screening));
        assert_eq!(interference, screening);
    }

    #[test]
    fn test_activation_filters_both_strands_strictly() {
        let region = Sequence::new("TTTTTTTCCTTTTTAAAAGGTTTT");
        let discovery = select_candidates(&region, &config_with(ApplicationMode::Discovery));
        assert!(!discovery.forward.is_empty());
        assert!(!discovery.reverse.is_empty());

        let all_kept = select_candidates(
            &region,
            &config_with(ApplicationMode::Activation { cutoff: 1000 }),
        );
        assert_eq!(all_kept, discovery);

        let none_kept = select_candidates(
            &region,
            &config_with(ApplicationMode::Activation { cutoff: 0 }),
        );
        assert!(none_kept.forward.is_empty());
        assert!(none_kept.reverse.is_empty());
    }

    #[test]
    fn test_activation_cutoff_is_exclusive() {
        // Forward offset 4; a cutoff equal to the offset drops it.
        let region = Sequence::new("TTTTAAAAGGTTTT");
        let at_cutoff = select_candidates(
            &region,
            &config_with(ApplicationMode::Activation { cutoff: 4 }),
        );
        assert!(at_cutoff.forward.is_empty());

        let above_cutoff = select_candidates(
            &region,
            &config_with(ApplicationMode::Activation { cutoff: 5 }),
        );
        assert_eq!(above_cutoff.forward, vec![4]);
    }

    #[test]
    fn test_exclusions_apply_on_both_strands() {
        // Forward window is ACGT, the reverse window on the complement is
        // AAAA; each exclusion below blocks exactly one of them.
        let region = Sequence::new("TTTTACGTGGTTTCCTTTTT");

        let mut config = config_with(ApplicationMode::Discovery);
        let open = select_candidates(&region, &config);
        assert_eq!(open.forward, vec![4]);
        assert_eq!(open.reverse, vec![19]);

        config.exclusions = vec!["AAAA".to_string()];
        let reverse_blocked = select_candidates(&region, &config);
        assert_eq!(reverse_blocked.forward, vec![4]);
        assert!(reverse_blocked.reverse.is_empty());

        config.exclusions = vec!["CG".to_string()];
        let forward_blocked = select_candidates(&region, &config);
        assert!(forward_blocked.forward.is_empty());
        assert_eq!(forward_blocked.reverse, vec![19]);
    }

    #[test]
    fn test_empty_region_yields_empty_lists() {
        let region = Sequence::new("");
        let candidates = select_candidates(&region, &config_with(ApplicationMode::Discovery));
        assert!(candidates.is_empty());
    }
}
