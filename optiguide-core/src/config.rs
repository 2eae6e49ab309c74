use crate::constants::{DEFAULT_GUIDE_LENGTH, DEFAULT_PAM};
use crate::types::GuideError;

/// Application mode controlling which strands are scanned and how
/// candidates are filtered.
///
/// The mode is decided once when configuration is parsed; scanning never
/// re-examines mode tokens.
///
/// # Modes
///
/// - **Discovery**: both strands, no positional filter
/// - **Interference**: reverse strand only (CRISPRi silencing binds the
///   template strand best)
/// - **Activation**: both strands, keep only candidates upstream of the
///   given position cutoff (CRISPRa)
/// - **Screening**: reverse strand only, for guide libraries built against
///   gene calls from contigs
///
/// # Examples
///
/// ```rust
/// use optiguide_core::config::ApplicationMode;
///
/// assert_eq!(ApplicationMode::parse("d").unwrap(), ApplicationMode::Discovery);
/// assert_eq!(
///     ApplicationMode::parse("400a").unwrap(),
///     ApplicationMode::Activation { cutoff: 400 }
/// );
/// assert!(ApplicationMode::parse("x").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationMode {
    /// Scan both strands and keep every candidate
    Discovery,
    /// Scan the reverse strand only; the forward list stays empty
    Interference,
    /// Scan both strands, keep candidates strictly upstream of `cutoff`
    Activation {
        /// Forward-coordinate position candidates must lie before
        cutoff: usize,
    },
    /// Reverse strand only, identical strand policy to interference
    Screening,
}

impl ApplicationMode {
    /// Parses an aim token: `d`, `i`, `s`, or `<N>a` (digits then `a`,
    /// e.g. `400a` for activation within 400 bp of the start).
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidCutoff`] when the token ends in `a` but
    /// carries no parseable position, and [`GuideError::UnsupportedMode`]
    /// for every other unknown token.
    pub fn parse(token: &str) -> Result<Self, GuideError> {
        match token {
            "d" => Ok(Self::Discovery),
            "i" => Ok(Self::Interference),
            "s" => Ok(Self::Screening),
            _ => match token.strip_suffix('a') {
                Some(digits) => {
                    let cutoff = digits
                        .parse::<usize>()
                        .map_err(|_| GuideError::InvalidCutoff(token.to_string()))?;
                    Ok(Self::Activation { cutoff })
                }
                None => Err(GuideError::UnsupportedMode(token.to_string())),
            },
        }
    }
}

/// Configuration settings for guide discovery.
///
/// PAM and exclusion literals are matched case-sensitively against
/// uppercased sequences; callers uppercase them at intake (the CLI does).
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use optiguide_core::config::GuideConfig;
///
/// let config = GuideConfig::default();
/// assert_eq!(config.pam, "GG");
/// assert_eq!(config.guide_length, 20);
/// ```
///
/// ## Interference run avoiding a restriction site
///
/// ```rust
/// use optiguide_core::config::{ApplicationMode, GuideConfig};
///
/// let config = GuideConfig {
///     mode: ApplicationMode::Interference,
///     exclusions: vec!["GGTCTC".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// Literal PAM searched on the scanned strand.
    ///
    /// **Default**: `"GG"` (the NGG convention with N covered by the guide window)
    pub pam: String,

    /// Guide window length in nucleotides.
    ///
    /// **Default**: `20`
    pub guide_length: usize,

    /// Strand and filter policy for this run.
    ///
    /// **Default**: [`ApplicationMode::Discovery`]
    pub mode: ApplicationMode,

    /// Literal subsequences that may not occur inside a guide window,
    /// e.g. restriction enzyme recognition sites.
    ///
    /// Entries need not be `guide_length` long; any containment rejects.
    ///
    /// **Default**: empty
    pub exclusions: Vec<String>,

    /// Suppress progress and timing messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Number of threads for per-region parallel catalog building.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            pam: DEFAULT_PAM.to_string(),
            guide_length: DEFAULT_GUIDE_LENGTH,
            mode: ApplicationMode::Discovery,
            exclusions: Vec::new(),
            quiet: false,
            num_threads: None,
        }
    }
}
