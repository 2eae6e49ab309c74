//! Nucleotide sequence representation and search primitives.
//!
//! Sequences are stored as uppercase ASCII bytes. Construction normalizes
//! case once so that PAM and exclusion matching never needs case folding,
//! and the reverse complement of an uppercase sequence stays uppercase.
//!
//! ## Examples
//!
//! ```rust
//! use optiguide_core::sequence::Sequence;
//!
//! let region = Sequence::new("acgtACGT");
//! assert_eq!(region.as_bytes(), b"ACGTACGT");
//! assert_eq!(region.reverse_complement().as_bytes(), b"ACGTACGT");
//! assert_eq!(region.find_from(b"GT", 0), Some(2));
//! ```

use std::fmt;

use bio::alphabets::dna;

pub mod io;

pub use io::{
    load_genome_background, load_targets, read_sequence_records, write_reference_genome,
};

/// An immutable DNA sequence held as uppercase bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    bytes: Vec<u8>,
}

impl Sequence {
    /// Creates a sequence from raw bytes or a string, uppercasing on the way in.
    #[must_use]
    pub fn new(raw: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: raw.as_ref().to_ascii_uppercase(),
        }
    }

    /// Length in nucleotides
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-length sequence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The underlying uppercase bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Reverse complement of the whole sequence.
    ///
    /// IUPAC ambiguity codes are complemented per rust-bio's DNA alphabet;
    /// the result is the strand read 5' to 3' on the opposite side.
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        Self {
            bytes: dna::revcomp(&self.bytes),
        }
    }

    /// Borrow the window `[start, start + length)`, or `None` when it
    /// extends past either end.
    #[must_use]
    pub fn window(&self, start: usize, length: usize) -> Option<&[u8]> {
        let end = start.checked_add(length)?;
        self.bytes.get(start..end)
    }

    /// Absolute index of the next occurrence of `needle` at or after `from`.
    ///
    /// An empty needle never matches, so callers scanning with a degenerate
    /// pattern terminate with no occurrences instead of matching everywhere.
    #[must_use]
    pub fn find_from(&self, needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() || from > self.bytes.len() {
            return None;
        }
        self.bytes[from..]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|relative| from + relative)
    }

    /// True when `needle` occurs anywhere in the sequence
    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        self.find_from(needle, 0).is_some()
    }

    /// Number of occurrences of `needle`, counting overlaps.
    ///
    /// `GG` occurs twice in `GGG`: matches one base apart are counted
    /// separately, matching how candidate sites are scanned.
    #[must_use]
    pub fn count_occurrences(&self, needle: &[u8]) -> usize {
        let mut count = 0;
        let mut from = 0;
        while let Some(hit) = self.find_from(needle, from) {
            count += 1;
            from = hit + 1;
        }
        count
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}
