use rustfft::{Fft, FftPlanner, num_complex::Complex};
use std::sync::Arc;

use super::MeasurementError;

/// Fixed-length complex transform.
///
/// Every call borrows its working memory from the caller, so one scratch
/// region can serve many transforms and nothing is allocated per call.
pub trait SpectralTransform {
    fn len(&self) -> usize;

    /// Minimum number of scratch elements `forward`/`inverse` need
    fn scratch_len(&self) -> usize;

    fn forward(
        &self,
        buffer: &mut [Complex<f32>],
        scratch: &mut ScratchBuffer,
    ) -> Result<(), MeasurementError>;

    /// Unnormalised inverse; callers divide by `len()` themselves.
    fn inverse(
        &self,
        buffer: &mut [Complex<f32>],
        scratch: &mut ScratchBuffer,
    ) -> Result<(), MeasurementError>;
}

/// Caller-owned working memory for a [`SpectralTransform`]
pub struct ScratchBuffer {
    data: Vec<Complex<f32>>,
}

impl ScratchBuffer {
    pub fn with_len(len: usize) -> Self {
        Self {
            data: vec![Complex::new(0.0, 0.0); len],
        }
    }

    pub fn for_transform(transform: &impl SpectralTransform) -> Self {
        Self::with_len(transform.scratch_len())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn take(&mut self, required: usize) -> Result<&mut [Complex<f32>], MeasurementError> {
        if self.data.len() < required {
            return Err(MeasurementError::ScratchTooSmall {
                required,
                available: self.data.len(),
            });
        }
        Ok(&mut self.data[..required])
    }
}

/// rustfft-backed transform with forward and inverse plans
pub struct FftTransform {
    len: usize,
    forward: Arc<dyn Fft<f32>>,
    inverse: Arc<dyn Fft<f32>>,
}

impl FftTransform {
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        Self {
            len,
            forward,
            inverse,
        }
    }

    fn check_len(&self, buffer: &[Complex<f32>]) -> Result<(), MeasurementError> {
        if buffer.len() != self.len {
            return Err(MeasurementError::LengthMismatch {
                expected: self.len,
                actual: buffer.len(),
            });
        }
        Ok(())
    }
}

impl SpectralTransform for FftTransform {
    fn len(&self) -> usize {
        self.len
    }

    fn scratch_len(&self) -> usize {
        self.forward
            .get_inplace_scratch_len()
            .max(self.inverse.get_inplace_scratch_len())
    }

    fn forward(
        &self,
        buffer: &mut [Complex<f32>],
        scratch: &mut ScratchBuffer,
    ) -> Result<(), MeasurementError> {
        self.check_len(buffer)?;
        let scratch = scratch.take(self.forward.get_inplace_scratch_len())?;
        self.forward
            .process_with_scratch(buffer, scratch);
        Ok(())
    }

    fn inverse(
        &self,
        buffer: &mut [Complex<f32>],
        scratch: &mut ScratchBuffer,
    ) -> Result<(), MeasurementError> {
        self.check_len(buffer)?;
        let scratch = scratch.take(self.inverse.get_inplace_scratch_len())?;
        self.inverse
            .process_with_scratch(buffer, scratch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_inverse_identity() {
        let transform = FftTransform::new(31);
        let mut scratch = ScratchBuffer::for_transform(&transform);
        let original: Vec<Complex<f32>> = (0..31)
            .map(|i| Complex::new(i as f32 * 0.1, -(i as f32) * 0.05))
            .collect();

        let mut buffer = original.clone();
        transform.forward(&mut buffer, &mut scratch).unwrap();
        transform.inverse(&mut buffer, &mut scratch).unwrap();

        for (a, b) in buffer.iter().zip(original.iter()) {
            assert!((*a / 31.0 - *b).norm() < 1e-4);
        }
    }

    #[test]
    fn test_dc_bin() {
        let transform = FftTransform::new(8);
        let mut scratch = ScratchBuffer::for_transform(&transform);
        let mut buffer = vec![Complex::new(1.0, 0.0); 8];
        transform.forward(&mut buffer, &mut scratch).unwrap();
        assert!((buffer[0].re - 8.0).abs() < 1e-5);
        assert!(buffer[1..].iter().all(|c| c.norm() < 1e-5));
    }

    #[test]
    fn test_length_mismatch() {
        let transform = FftTransform::new(16);
        let mut scratch = ScratchBuffer::for_transform(&transform);
        let mut buffer = vec![Complex::new(0.0, 0.0); 15];
        assert_eq!(
            transform.forward(&mut buffer, &mut scratch),
            Err(MeasurementError::LengthMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_scratch_too_small() {
        // Prime lengths use Bluestein/Rader and need working memory
        let transform = FftTransform::new(127);
        let required = transform.scratch_len();
        assert!(required > 0);
        let mut scratch = ScratchBuffer::with_len(0);
        let mut buffer = vec![Complex::new(0.0, 0.0); 127];
        let err = transform
            .forward(&mut buffer, &mut scratch)
            .unwrap_err();
        assert!(matches!(err, MeasurementError::ScratchTooSmall { available: 0, .. }));
    }
}
