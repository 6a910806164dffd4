// Impulse response recovery from a periodic MLS measurement.
// The circular autocorrelation of a bipolar MLS of period N and amplitude a
// is N*a^2 at lag 0 and -a^2 elsewhere, which makes the deconvolution exact:
//   h[k] = (c[k] + sum(c)) / (a^2 * (N + 1))
// where c is the circular cross-correlation of recording and excitation.

use rayon::prelude::*;
use rustfft::num_complex::Complex;
use tracing::debug;

use super::MeasurementError;
use super::transform::{ScratchBuffer, SpectralTransform};

fn to_complex(signal: &[f32]) -> Vec<Complex<f32>> {
    signal
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect()
}

/// Circular cross-correlation `c[k] = sum_j y[(j + k) mod N] * x[j]`
pub fn circular_cross_correlation(
    excitation: &[f32],
    response: &[f32],
    transform: &impl SpectralTransform,
    scratch: &mut ScratchBuffer,
) -> Result<Vec<f32>, MeasurementError> {
    let n = transform.len();
    if excitation.len() != n || response.len() != n {
        return Err(MeasurementError::LengthMismatch {
            expected: n,
            actual: if excitation.len() != n {
                excitation.len()
            } else {
                response.len()
            },
        });
    }

    let mut x_fft = to_complex(excitation);
    let mut y_fft = to_complex(response);
    transform.forward(&mut x_fft, scratch)?;
    transform.forward(&mut y_fft, scratch)?;

    let mut cross: Vec<Complex<f32>> = y_fft
        .par_iter()
        .zip(x_fft.par_iter())
        .map(|(&y, &x)| y * x.conj())
        .collect();

    transform.inverse(&mut cross, scratch)?;
    Ok(cross
        .iter()
        .map(|c| c.re / n as f32)
        .collect())
}

/// Estimate the impulse response of a system driven by `excitation`.
///
/// `excitation` is one bipolar period; `recording` holds the system output
/// and must contain at least one full period. The last complete period is
/// analysed, earlier ones are assumed to be settling time.
pub fn impulse_response(
    excitation: &[f32],
    recording: &[f32],
    transform: &impl SpectralTransform,
    scratch: &mut ScratchBuffer,
) -> Result<Vec<f32>, MeasurementError> {
    let n = excitation.len();
    if n == 0 {
        return Err(MeasurementError::EmptyExcitation);
    }
    if recording.len() < n {
        return Err(MeasurementError::RecordingTooShort {
            required: n,
            actual: recording.len(),
        });
    }

    let start = (recording.len() / n - 1) * n;
    let period = &recording[start..start + n];
    debug!(
        "Deconvolving period of {} samples starting at sample {}",
        n, start
    );

    let power = excitation
        .iter()
        .map(|x| x * x)
        .sum::<f32>()
        / n as f32;
    if power == 0.0 {
        return Err(MeasurementError::EmptyExcitation);
    }

    let correlation = circular_cross_correlation(excitation, period, transform, scratch)?;
    let total: f32 = correlation.iter().sum();
    let scale = power * (n as f32 + 1.0);

    Ok(correlation
        .iter()
        .map(|&c| (c + total) / scale)
        .collect())
}
