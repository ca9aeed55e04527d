//! World generation error types.

use loam_config::ConfigError;

/// Errors that can occur while building the generation pipeline.
///
/// Build failures are fail-fast and non-partial: a pipeline keeps whatever
/// layer list it had before the failed build.
#[derive(Debug, thiserror::Error)]
pub enum WorldGenError {
    /// A configuration key was missing or unparseable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The per-octave frequency and amplitude lists had different lengths.
    #[error("octave mismatch: {frequencies} frequencies vs {amplitudes} amplitudes")]
    OctaveMismatch {
        /// Number of frequencies supplied.
        frequencies: usize,
        /// Number of amplitudes supplied.
        amplitudes: usize,
    },

    /// All octave amplitudes summed to zero, which would make the blended
    /// field undefined.
    #[error("octave amplitudes sum to zero")]
    ZeroAmplitudeSum,
}
