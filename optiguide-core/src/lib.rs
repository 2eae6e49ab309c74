//! # Optiguide - CRISPR Guide Discovery
//!
//! A library for enumerating candidate CRISPR guide-RNA binding sites in
//! target gene sequences and surveying each candidate against a genome
//! background for exact off-target sites.
//!
//! ## Overview
//!
//! Guide discovery scans each target region for a literal PAM motif on one
//! or both strands, depending on the requested application mode. Every PAM
//! match proposes a guide window immediately 5' of the motif; the window is
//! kept when it lies fully inside the region and contains no configured
//! exclusion site (e.g. a restriction enzyme recognition sequence).
//! Reverse-strand hits are remapped into forward-strand coordinates before
//! they are cataloged.
//!
//! ## Application Modes
//!
//! - **Discovery**: both strands, every eligible candidate
//! - **Interference** (CRISPRi): reverse strand only
//! - **Activation** (CRISPRa): both strands, candidates upstream of a
//!   position cutoff only
//! - **Screening**: reverse strand only, for library construction
//!
//! ## Quick Start
//!
//! ```rust
//! use optiguide_core::{GuideFinder, config::GuideConfig};
//! use optiguide_core::scoring::{OffTargetCounter, ScoringEngine};
//! use optiguide_core::sequence::Sequence;
//! use optiguide_core::types::TargetMap;
//!
//! let mut targets = TargetMap::new();
//! targets.insert("geneA".to_string(), Sequence::new("TTTTAAAAGGCCCC"));
//!
//! let finder = GuideFinder::new(GuideConfig {
//!     guide_length: 4,
//!     ..Default::default()
//! });
//! let catalog = finder.build_catalog(&targets);
//! assert_eq!(catalog["geneA"].forward, vec![4]);
//!
//! // Score against a genome background with the bundled site counter
//! let engine = OffTargetCounter::build(Sequence::new("TTTTAAAAGGCCCC"), 4);
//! let report = finder.score(&catalog, &targets, &engine)?;
//! assert_eq!(report[0].guide, "AAAA");
//! # Ok::<(), optiguide_core::types::GuideError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Run configuration and application-mode parsing
//! - [`constants`]: Defaults and recognized file extensions
//! - [`types`]: Core data types, catalog aliases, and errors
//! - [`sequence`]: Sequence representation, search, and FASTA/GenBank I/O
//! - [`scanner`]: Single-strand PAM scanning
//! - [`selector`]: Mode-dependent strand selection and remapping
//! - [`catalog`]: Per-region catalog assembly and the [`GuideFinder`] facade
//! - [`scoring`]: Scoring-engine seam and the bundled off-target counter
//! - [`output`]: TSV score-report writer
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, GuideError>`](types::GuideError).
//! Only configuration and load errors are fatal; per-candidate anomalies
//! (a window too close to a strand end, a remapped offset past the region)
//! are filtered silently during scanning and scoring.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod output;
pub mod scanner;
pub mod scoring;
pub mod selector;
pub mod sequence;
pub mod types;

pub use catalog::{GuideFinder, build_catalog};
pub use config::{ApplicationMode, GuideConfig};
pub use scanner::{find_candidates, remap_to_forward};
pub use scoring::{GuideScore, OffTargetCounter, ScoreReport, ScoringEngine};
pub use selector::select_candidates;
pub use sequence::Sequence;
pub use types::{GuideCatalog, GuideError, StrandCandidates, TargetMap};
