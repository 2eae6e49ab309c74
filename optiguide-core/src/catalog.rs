//! Per-region catalog assembly and the `GuideFinder` facade.

use rayon::prelude::*;

use crate::config::GuideConfig;
use crate::scoring::{ScoreReport, ScoringEngine};
use crate::selector::select_candidates;
use crate::types::{GuideCatalog, GuideError, TargetMap};

/// Builds the guide catalog by selecting candidates for every target region.
///
/// Regions share no mutable state, so selection runs as a data-parallel map;
/// the result is identical to a serial pass. Candidate order within a region
/// follows scan order, and a region with no candidates still gets an entry
/// with empty lists.
#[must_use]
pub fn build_catalog(targets: &TargetMap, config: &GuideConfig) -> GuideCatalog {
    targets
        .par_iter()
        .map(|(name, region)| (name.clone(), select_candidates(region, config)))
        .collect()
}

/// Main guide discovery engine.
///
/// Owns the run configuration and drives catalog construction and scoring.
/// The scoring engine is passed in by the caller, never reached as a global.
///
/// # Examples
///
/// ```rust
/// use optiguide_core::GuideFinder;
/// use optiguide_core::config::GuideConfig;
/// use optiguide_core::sequence::Sequence;
/// use optiguide_core::types::TargetMap;
///
/// let mut targets = TargetMap::new();
/// targets.insert("geneA".to_string(), Sequence::new("TTTTAAAAGGCCCC"));
///
/// let finder = GuideFinder::new(GuideConfig {
///     guide_length: 4,
///     ..Default::default()
/// });
/// let catalog = finder.build_catalog(&targets);
/// assert_eq!(catalog["geneA"].forward, vec![4]);
/// ```
#[derive(Debug, Clone)]
pub struct GuideFinder {
    /// Configuration options for guide discovery
    pub config: GuideConfig,
}

impl GuideFinder {
    /// Creates a finder with the given configuration.
    #[must_use]
    pub fn new(config: GuideConfig) -> Self {
        Self { config }
    }

    /// Creates a finder and applies the configured rayon pool size.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidConfiguration`] when the global thread
    /// pool cannot be configured (it can only be sized once per process).
    pub fn with_config(config: GuideConfig) -> Result<Self, GuideError> {
        if let Some(num_threads) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    GuideError::InvalidConfiguration(format!(
                        "Failed to configure thread pool: {e}"
                    ))
                })?;
        }
        Ok(Self { config })
    }

    /// Builds the guide catalog for every target region.
    #[must_use]
    pub fn build_catalog(&self, targets: &TargetMap) -> GuideCatalog {
        build_catalog(targets, &self.config)
    }

    /// Runs the supplied scoring engine over a built catalog.
    ///
    /// # Errors
    ///
    /// Propagates any error from the engine's [`ScoringEngine::evaluate`].
    pub fn score(
        &self,
        catalog: &GuideCatalog,
        targets: &TargetMap,
        engine: &dyn ScoringEngine,
    ) -> Result<ScoreReport, GuideError> {
        engine.evaluate(catalog, targets)
    }
}
