/// Log level when RUST_LOG is unset
pub const LOG_LEVEL: &str = "info";

/// Register width used when none is given
pub const DEFAULT_DEGREE: u32 = 16;

/// Seeds tried before generation reports failure
pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

// ============================================================================
// Excitation signal
// ============================================================================

/// Sample rate (Hz) of written WAV files
pub const SAMPLE_RATE: u32 = 48000;

/// Peak amplitude of the bipolar excitation, leaves headroom below full scale
pub const EXCITATION_AMPLITUDE: f32 = 0.5;

/// Periods written by default: one to settle, one to analyse
pub const DEFAULT_PERIODS: usize = 2;

// ============================================================================
// Presentation
// ============================================================================

/// Sequences up to this length are printed in full
pub const MAX_PRINTED_BITS: usize = 256;

/// Trace rows shown for a configured register
pub const MAX_TRACE_ROWS: usize = 32;

/// Registers at least this wide get a progress bar
pub const PROGRESS_MIN_DEGREE: u32 = 20;

/// Steps between progress bar updates
pub const PROGRESS_STRIDE: u64 = 1 << 16;

/// Widest register `verify` checks by default
pub const DEFAULT_VERIFY_DEGREE: u32 = 20;
