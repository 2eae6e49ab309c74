//! Off-target scoring seam and the bundled occurrence-counting engine.
//!
//! The catalog hands every candidate to a [`ScoringEngine`] passed in by the
//! caller. The engine bundled here, [`OffTargetCounter`], is deliberately
//! simple: it counts exact occurrences of each guide sequence in the genome
//! background and its reverse complement. It is a site survey, not an
//! efficacy model; callers with a real scoring model implement the trait
//! themselves.

use bio::alphabets::dna;
use bio::bio_types::strand::Strand;

use crate::sequence::Sequence;
use crate::types::{GuideCatalog, GuideError, Offset, TargetMap};

/// One scored candidate row.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideScore {
    /// Name of the target region the guide was found in
    pub region: String,
    /// Strand the guide binds, forward or reverse
    pub strand: Strand,
    /// Candidate offset in forward-strand coordinates
    pub offset: Offset,
    /// The guide sequence, 5' to 3' as synthesized
    pub guide: String,
    /// Exact occurrences of the guide in the background and its reverse complement
    pub off_target_sites: usize,
}

/// Per-candidate score rows in report order: region names sorted
/// lexicographically, forward candidates before reverse within a region,
/// discovery order within each strand.
pub type ScoreReport = Vec<GuideScore>;

/// Scoring capability handed to the pipeline by the caller.
///
/// Implementations are built once per run and invoked once over the whole
/// catalog. The bundled implementation is [`OffTargetCounter`]; tests and
/// downstream tools substitute their own.
pub trait ScoringEngine {
    /// Scores every candidate in the catalog against this engine's model.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError`] when the catalog references a region absent
    /// from `targets`; candidate-level anomalies (an unextractable guide
    /// window) are skipped silently instead.
    fn evaluate(
        &self,
        catalog: &GuideCatalog,
        targets: &TargetMap,
    ) -> Result<ScoreReport, GuideError>;
}

/// Exact-occurrence off-target counter over a genome background.
///
/// Construction precomputes the background's reverse complement so a run
/// over the catalog only does forward searches. Overlapping occurrences are
/// counted separately, matching how candidate sites are scanned.
#[derive(Debug, Clone)]
pub struct OffTargetCounter {
    background: Sequence,
    background_revcomp: Sequence,
    guide_length: usize,
}

impl OffTargetCounter {
    /// Builds the counting model from the genome background.
    #[must_use]
    pub fn build(background: Sequence, guide_length: usize) -> Self {
        let background_revcomp = background.reverse_complement();
        Self {
            background,
            background_revcomp,
            guide_length,
        }
    }

    /// Occurrences of `guide` across the background and its reverse complement
    fn count_sites(&self, guide: &[u8]) -> usize {
        self.background.count_occurrences(guide) + self.background_revcomp.count_occurrences(guide)
    }
}

impl ScoringEngine for OffTargetCounter {
    fn evaluate(
        &self,
        catalog: &GuideCatalog,
        targets: &TargetMap,
    ) -> Result<ScoreReport, GuideError> {
        let mut names: Vec<&String> = catalog.keys().collect();
        names.sort();

        let mut report = Vec::new();
        for name in names {
            let region = targets.get(name).ok_or_else(|| {
                GuideError::ParseError(format!("Catalog region '{name}' missing from targets"))
            })?;
            let candidates = &catalog[name];

            for &offset in &candidates.forward {
                if let Some(guide) = forward_guide(region, offset, self.guide_length) {
                    let off_target_sites = self.count_sites(&guide);
                    report.push(GuideScore {
                        region: name.clone(),
                        strand: Strand::Forward,
                        offset,
                        guide: String::from_utf8_lossy(&guide).into_owned(),
                        off_target_sites,
                    });
                }
            }
            for &offset in &candidates.reverse {
                if let Some(guide) = reverse_guide(region, offset, self.guide_length) {
                    let off_target_sites = self.count_sites(&guide);
                    report.push(GuideScore {
                        region: name.clone(),
                        strand: Strand::Reverse,
                        offset,
                        guide: String::from_utf8_lossy(&guide).into_owned(),
                        off_target_sites,
                    });
                }
            }
        }

        Ok(report)
    }
}

/// Extracts a forward-strand guide: the window starting at `offset`.
///
/// Returns `None` when the window runs past the region end; such candidates
/// are skipped rather than reported.
#[must_use]
pub fn forward_guide(region: &Sequence, offset: Offset, guide_length: usize) -> Option<Vec<u8>> {
    region.window(offset, guide_length).map(<[u8]>::to_vec)
}

/// Extracts a reverse-strand guide at a remapped forward-coordinate offset.
///
/// The guide occupies `[offset - guide_length, offset)` on the forward
/// strand and is synthesized as the reverse complement of that window.
/// Returns `None` when the window would start before the region.
#[must_use]
pub fn reverse_guide(region: &Sequence, offset: Offset, guide_length: usize) -> Option<Vec<u8>> {
    let start = offset.checked_sub(guide_length)?;
    region
        .window(start, guide_length)
        .map(|window| dna::revcomp(window))
}
