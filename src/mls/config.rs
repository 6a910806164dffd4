use std::fmt;

use super::error::MlsError;
use super::taps::{self, TapSet};

/// Register width of a generator, always within the tap table's domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolynomialDegree(u32);

impl PolynomialDegree {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 32;

    /// Strict constructor, rejects widths the tap table does not cover.
    pub fn new(degree: u32) -> Result<Self, MlsError> {
        if (Self::MIN..=Self::MAX).contains(&degree) {
            Ok(Self(degree))
        } else {
            Err(MlsError::DegreeOutOfRange(degree as i64))
        }
    }

    /// Clamps any requested width to the nearest supported bound.
    pub fn clamped(degree: i64) -> Self {
        Self(degree.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Mask selecting the low `degree` bits of a seed
    pub fn seed_mask(self) -> u32 {
        if self.0 == 32 {
            u32::MAX
        } else {
            (1u32 << self.0) - 1
        }
    }
}

impl fmt::Display for PolynomialDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selected register width together with its feedback taps.
///
/// Changing the width re-derives the tap set from the table; the previous
/// set is dropped rather than edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    degree: PolynomialDegree,
    taps: TapSet,
}

impl GeneratorConfig {
    pub fn new(degree: PolynomialDegree) -> Self {
        Self {
            degree,
            taps: taps::lookup(degree),
        }
    }

    pub fn degree(&self) -> PolynomialDegree {
        self.degree
    }

    pub fn taps(&self) -> &TapSet {
        &self.taps
    }

    /// Number of bits in one period, `2^degree - 1`
    pub fn sequence_length(&self) -> u64 {
        (1u64 << self.degree.get()) - 1
    }

    pub fn set_degree(&mut self, degree: PolynomialDegree) {
        *self = Self::new(degree);
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(PolynomialDegree(crate::utils::consts::DEFAULT_DEGREE))
    }
}

/// Build a configuration for any requested width, clamping into 2..=32.
pub fn configure(degree: i64) -> GeneratorConfig {
    GeneratorConfig::new(PolynomialDegree::clamped(degree))
}

pub fn sequence_length(config: &GeneratorConfig) -> u64 {
    config.sequence_length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        assert_eq!(configure(1), configure(2));
        assert_eq!(configure(-5), configure(2));
        assert_eq!(configure(99), configure(32));
        assert_eq!(configure(17).degree().get(), 17);
    }

    #[test]
    fn test_strict_degree() {
        assert_eq!(PolynomialDegree::new(1), Err(MlsError::DegreeOutOfRange(1)));
        assert_eq!(PolynomialDegree::new(33), Err(MlsError::DegreeOutOfRange(33)));
        assert!(PolynomialDegree::new(32).is_ok());
    }

    #[test]
    fn test_sequence_length_all_degrees() {
        for d in 2..=32i64 {
            assert_eq!(sequence_length(&configure(d)), (1u64 << d) - 1);
        }
    }

    #[test]
    fn test_set_degree_rederives_taps() {
        let mut config = configure(8);
        config.set_degree(PolynomialDegree::new(3).unwrap());
        assert_eq!(config, configure(3));
        assert_eq!(config.taps().as_slice(), &[2]);
    }

    #[test]
    fn test_seed_mask() {
        assert_eq!(PolynomialDegree::clamped(3).seed_mask(), 0b111);
        assert_eq!(PolynomialDegree::clamped(32).seed_mask(), u32::MAX);
    }
}
