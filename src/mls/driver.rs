use std::ops::Deref;

use super::config::GeneratorConfig;
use super::register::LfsrState;

/// One full period of register output, in step order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceBuffer {
    bits: Vec<bool>,
}

impl SequenceBuffer {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// True when no bit is set, the signature of a zero seed
    pub fn is_degenerate(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    pub fn count_ones(&self) -> usize {
        self.bits
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Bits as 0/1 bytes, the form used by the trace and txt dumps
    pub fn to_u8(&self) -> Vec<u8> {
        self.bits
            .iter()
            .map(|&b| b as u8)
            .collect()
    }

    pub fn to_bitstring(&self) -> String {
        self.bits
            .iter()
            .map(|&b| if b { '1' } else { '0' })
            .collect()
    }
}

impl Deref for SequenceBuffer {
    type Target = [bool];

    fn deref(&self) -> &Self::Target {
        &self.bits
    }
}

/// Drive the register for exactly one period and collect its output.
pub fn run(config: &GeneratorConfig, initial: LfsrState) -> SequenceBuffer {
    run_observed(config, initial, |_, _, _| {})
}

/// Like [`run`], calling `observe(step, bit, state_before)` for each step.
pub fn run_observed<F>(
    config: &GeneratorConfig,
    initial: LfsrState,
    mut observe: F,
) -> SequenceBuffer
where
    F: FnMut(u64, bool, &LfsrState),
{
    let length = config.sequence_length();
    let taps = config.taps();
    let mut state = initial;
    let mut bits = Vec::with_capacity(length as usize);

    for step in 0..length {
        let before = state;
        let bit = state.step(taps);
        observe(step, bit, &before);
        bits.push(bit);
    }

    SequenceBuffer { bits }
}
