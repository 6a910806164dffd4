// Using generated sequences as acoustic test signals

pub mod excitation;
pub mod impulse;
pub mod transform;

pub use excitation::{excitation_signal, to_bipolar};
pub use impulse::{circular_cross_correlation, impulse_response};
pub use transform::{FftTransform, ScratchBuffer, SpectralTransform};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    #[error("transform expects {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("scratch buffer holds {available} elements, transform needs {required}")]
    ScratchTooSmall { required: usize, available: usize },
    #[error("excitation signal is empty or silent")]
    EmptyExcitation,
    #[error("recording has {actual} samples, at least one period of {required} is needed")]
    RecordingTooShort { required: usize, actual: usize },
}
