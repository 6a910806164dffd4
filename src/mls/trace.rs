use std::fmt::Write;

use super::config::GeneratorConfig;
use super::driver::{self, SequenceBuffer};
use super::reference;
use super::register::LfsrState;

/// One line of a step-by-step generation trace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRow {
    /// 1-based step number
    pub iteration: u64,
    pub state: Vec<bool>,
    pub output: bool,
}

/// Trace of the fixed reference register
pub fn reference_trace() -> Vec<TraceRow> {
    reference::reference_states()
        .into_iter()
        .enumerate()
        .map(|(i, state)| TraceRow {
            iteration: i as u64 + 1,
            state: state.to_vec(),
            output: state[2],
        })
        .collect()
}

/// Run a configured register, keeping the first `max_rows` steps.
///
/// States are listed from the head cell onward so rows line up with the
/// recurrence rather than with the physical cell layout.
pub fn driver_trace(
    config: &GeneratorConfig,
    initial: LfsrState,
    max_rows: usize,
) -> (SequenceBuffer, Vec<TraceRow>) {
    let mut rows = Vec::with_capacity(max_rows);
    let sequence = driver::run_observed(config, initial, |step, bit, state| {
        if (step as usize) < max_rows {
            let n = state.degree();
            let cells = state.cells();
            rows.push(TraceRow {
                iteration: step + 1,
                state: (0..n)
                    .map(|j| cells[(state.head() + j) % n])
                    .collect(),
                output: bit,
            });
        }
    });
    (sequence, rows)
}

fn bits_to_text(bits: impl IntoIterator<Item = bool>) -> String {
    let mut out = String::new();
    for bit in bits {
        let _ = write!(out, "{} ", bit as u8);
    }
    out
}

/// Render rows as the iteration / state / output / bitstream table.
pub fn render_trace(rows: &[TraceRow]) -> String {
    let width = rows
        .first()
        .map(|r| r.state.len() * 2)
        .unwrap_or(6)
        .max("Current State".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Iteration | {:<width$} | Output Bit | Bitstream",
        "Current State"
    );
    let _ = writeln!(out, "{}", "-".repeat(width + 40));

    for (i, row) in rows.iter().enumerate() {
        let stream = bits_to_text(
            rows[..=i]
                .iter()
                .map(|r| r.output),
        );
        let _ = writeln!(
            out,
            "{:9} | {:<width$} | {:10} | {}",
            row.iteration,
            bits_to_text(row.state.iter().copied()),
            row.output as u8,
            stream.trim_end()
        );
    }
    out
}

pub fn render_final(sequence: &SequenceBuffer) -> String {
    format!(
        "Final MLS Bitstream: {}",
        bits_to_text(sequence.iter().copied()).trim_end()
    )
}
