use thiserror::Error;

/// Errors surfaced by sequence configuration and generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MlsError {
    /// A strict degree constructor was given a width outside the tap table.
    #[error("polynomial degree {0} is outside the supported range 2..=32")]
    DegreeOutOfRange(i64),
    /// Every seed drawn within the attempt budget produced an all-zero sequence.
    #[error("no non-degenerate sequence after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },
}
