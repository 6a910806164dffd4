// Feedback tap table for maximal-length sequences
// Offsets are relative to the rotating register head, so a tap set T of
// degree n realises the polynomial x^n + sum(x^t) + 1.

use super::config::PolynomialDegree;

/// Upper bound on the number of taps any table entry carries
pub const MAX_TAPS: usize = 4;

/// Ordered, fixed-capacity list of feedback offsets for one register width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapSet {
    offsets: [u8; MAX_TAPS],
    len: u8,
}

impl TapSet {
    const fn new(taps: &[u8]) -> Self {
        let mut offsets = [0u8; MAX_TAPS];
        let mut i = 0;
        while i < taps.len() {
            offsets[i] = taps[i];
            i += 1;
        }
        Self {
            offsets,
            len: taps.len() as u8,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.offsets[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice()
            .iter()
            .map(|&t| t as usize)
    }

    /// Feedback polynomial as a bit mask (bit k set for the x^k term)
    pub fn polynomial(&self, degree: PolynomialDegree) -> u64 {
        let mut poly = (1u64 << degree.get()) | 1;
        for t in self.iter() {
            poly |= 1 << t;
        }
        poly
    }
}

/// Indexed by degree; entries 0 and 1 are never reachable through a
/// `PolynomialDegree` and hold an empty set.
static TAP_TABLE: [TapSet; 33] = [
    TapSet::new(&[]),
    TapSet::new(&[]),
    TapSet::new(&[1]),
    TapSet::new(&[2]),
    TapSet::new(&[3]),
    TapSet::new(&[3]),
    TapSet::new(&[5]),
    TapSet::new(&[6]),
    TapSet::new(&[7, 6, 1]),
    TapSet::new(&[5]),
    TapSet::new(&[7]),
    TapSet::new(&[9]),
    TapSet::new(&[11, 10, 4]),
    TapSet::new(&[12, 11, 8]),
    TapSet::new(&[13, 12, 2]),
    TapSet::new(&[14]),
    TapSet::new(&[15, 13, 4]),
    TapSet::new(&[14]),
    TapSet::new(&[11]),
    TapSet::new(&[18, 17, 14]),
    TapSet::new(&[17]),
    TapSet::new(&[19]),
    TapSet::new(&[21]),
    TapSet::new(&[18]),
    TapSet::new(&[23, 22, 17]),
    TapSet::new(&[22]),
    TapSet::new(&[25, 24, 20]),
    TapSet::new(&[26, 25, 22]),
    TapSet::new(&[25]),
    TapSet::new(&[27]),
    TapSet::new(&[29, 28, 7]),
    TapSet::new(&[28]),
    TapSet::new(&[31, 30, 10]),
];

/// Look up the primitive tap configuration for a register width
pub fn lookup(degree: PolynomialDegree) -> TapSet {
    TAP_TABLE[degree.get() as usize]
}
