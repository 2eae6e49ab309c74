use std::collections::HashMap;

use thiserror::Error;

use crate::sequence::Sequence;

/// 0-based position of a guide window within a target region.
///
/// For a forward-strand candidate this is the leftmost base of the window and
/// the PAM starts at `offset + guide_length`. Reverse-strand candidates carry
/// the remapped forward-coordinate position (see [`crate::scanner::remap_to_forward`]).
pub type Offset = usize;

/// Target regions keyed by record id
pub type TargetMap = HashMap<String, Sequence>;

/// Per-region candidate lists keyed by region name.
///
/// Candidate order within a region follows scan order along each strand.
/// No ordering is guaranteed between regions.
pub type GuideCatalog = HashMap<String, StrandCandidates>;

/// Candidate guide offsets for one target region, split by strand.
///
/// Both lists are kept in discovery order. Modes that never scan the forward
/// strand leave `forward` empty rather than omitting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrandCandidates {
    /// Offsets of guides binding the forward strand
    pub forward: Vec<Offset>,
    /// Offsets of guides binding the reverse strand, remapped into forward coordinates
    pub reverse: Vec<Offset>,
}

impl StrandCandidates {
    /// Total candidates across both strands
    #[must_use]
    pub fn total(&self) -> usize {
        self.forward.len() + self.reverse.len()
    }

    /// True when neither strand produced a candidate
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }
}

/// Error types that can occur during guide discovery and scoring
#[derive(Error, Debug)]
pub enum GuideError {
    /// Application mode token not recognized
    #[error("Unsupported application mode: {0}")]
    UnsupportedMode(String),
    /// Activation mode given without a parseable position cutoff
    #[error("Invalid activation cutoff: {0}")]
    InvalidCutoff(String),
    /// Configuration value outside the usable range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Input file extension maps to no known sequence format
    #[error("Unsupported sequence format: {0}")]
    UnsupportedFormat(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}
