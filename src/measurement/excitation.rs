/// Bipolar excitation signals built from a sequence
use crate::mls::SequenceBuffer;

/// Map one period to +amplitude / -amplitude samples
pub fn to_bipolar(sequence: &SequenceBuffer, amplitude: f32) -> Vec<f32> {
    sequence
        .iter()
        .map(|&bit| if bit { amplitude } else { -amplitude })
        .collect()
}

/// Repeat the bipolar period `periods` times back to back.
///
/// Measurements usually play one extra period first so the system under
/// test is in steady state when the analysed period starts.
pub fn excitation_signal(
    sequence: &SequenceBuffer,
    amplitude: f32,
    periods: usize,
) -> Vec<f32> {
    let period = to_bipolar(sequence, amplitude);
    let mut signal = Vec::with_capacity(period.len() * periods);
    for _ in 0..periods {
        signal.extend_from_slice(&period);
    }
    signal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mls::reference_sequence;

    #[test]
    fn test_bipolar_mapping() {
        let samples = to_bipolar(&reference_sequence(), 0.5);
        assert_eq!(samples, vec![-0.5, 0.5, 0.5, 0.5, -0.5, 0.5, -0.5]);
    }

    #[test]
    fn test_repeated_periods() {
        let seq = reference_sequence();
        let signal = excitation_signal(&seq, 1.0, 3);
        assert_eq!(signal.len(), 21);
        assert_eq!(signal[..7], signal[7..14]);
        assert_eq!(signal[7..14], signal[14..]);
    }

    #[test]
    fn test_zero_periods() {
        assert!(excitation_signal(&reference_sequence(), 1.0, 0).is_empty());
    }
}
