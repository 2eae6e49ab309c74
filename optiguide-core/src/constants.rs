// =============================================================================
// =============================================================================

/// Protospacer adjacent motif searched for when none is configured.
///
/// The canonical SpCas9 motif is NGG; the N position is covered by the guide
/// window, so the literal searched on the scanned strand is "GG".
pub const DEFAULT_PAM: &str = "GG";

/// Guide window length in nucleotides when none is configured
pub const DEFAULT_GUIDE_LENGTH: usize = 20;

// =============================================================================
// =============================================================================

/// Record id of the persisted genome background artifact
pub const REFERENCE_RECORD_ID: &str = "refgenome";

/// Record description of the persisted genome background artifact
pub const REFERENCE_RECORD_DESCRIPTION: &str = "a reference background";

/// Default output path for the persisted genome background artifact
pub const DEFAULT_REFERENCE_PATH: &str = "refgenome.fasta";

// =============================================================================
// =============================================================================

/// File extensions recognized as FASTA input
pub const FASTA_EXTENSIONS: [&str; 4] = ["fasta", "fa", "fna", "ffn"];

/// File extensions recognized as GenBank input
pub const GENBANK_EXTENSIONS: [&str; 3] = ["gb", "gbk", "genbank"];
