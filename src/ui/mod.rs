pub mod progress;

use crate::mls::SequenceBuffer;
use crate::mls::taps;
use crate::mls::{GeneratorConfig, PolynomialDegree};
use crate::utils::consts::MAX_PRINTED_BITS;

pub fn print_banner() {
    eprintln!("mlsgen - maximal-length sequence generator");
}

/// Full bitstring for short sequences, head and tail otherwise
pub fn summarize_bits(sequence: &SequenceBuffer) -> String {
    let bits = sequence.to_bitstring();
    if bits.len() <= MAX_PRINTED_BITS {
        bits
    } else {
        let half = MAX_PRINTED_BITS / 2;
        format!(
            "{}...{} ({} bits)",
            &bits[..half],
            &bits[bits.len() - half..],
            bits.len()
        )
    }
}

/// One line per table entry: degree, taps, polynomial, period
pub fn format_tap_table() -> String {
    let mut out = String::from("Degree | Taps         | Polynomial  | Length\n");
    out.push_str("-------------------------------------------------------\n");
    for d in PolynomialDegree::MIN..=PolynomialDegree::MAX {
        let degree = PolynomialDegree::clamped(d as i64);
        let config = GeneratorConfig::new(degree);
        let tap_list = taps::lookup(degree)
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{:6} | {:<12} | {:#11x} | {}\n",
            d,
            tap_list,
            config.taps().polynomial(degree),
            config.sequence_length()
        ));
    }
    out
}
