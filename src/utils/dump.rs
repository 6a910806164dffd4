use serde::Serialize;

use crate::mls::{GeneratorConfig, Generated};

/// Summary of one generation run, printed with `--json`
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SequenceReport {
    pub degree: u32,
    pub taps: Vec<u8>,
    pub polynomial: String,
    pub length: u64,
    pub seed: u32,
    pub attempts: u32,
    pub ones: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<String>,
}

impl SequenceReport {
    pub fn new(config: &GeneratorConfig, generated: &Generated, include_bits: bool) -> Self {
        let degree = config.degree();
        Self {
            degree: degree.get(),
            taps: config.taps().to_vec(),
            polynomial: format!("{:#x}", config.taps().polynomial(degree)),
            length: config.sequence_length(),
            seed: generated.seed,
            attempts: generated.attempts,
            ones: generated.sequence.count_ones(),
            bits: include_bits.then(|| generated.sequence.to_bitstring()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
