// Offline full-period checks. Generation itself only rejects the all-zero
// sequence; these re-simulate the register to confirm the tap table.

use rayon::prelude::*;
use tracing::info;

use super::config::{GeneratorConfig, PolynomialDegree};
use super::register::LfsrState;

/// Widest register the visited-state bitmap is allowed to cover
pub const MAX_CHECKED_DEGREE: u32 = 24;

/// Re-run one period from `seed` and check that every state is distinct
/// and the register is back at its seed afterwards.
///
/// Returns `None` when the degree is too wide to track visited states.
pub fn is_maximal_length(config: &GeneratorConfig, seed: u32) -> Option<bool> {
    let degree = config.degree();
    if degree.get() > MAX_CHECKED_DEGREE {
        return None;
    }

    let mut state = LfsrState::from_seed(degree, seed & degree.seed_mask());
    if state.is_zero() {
        return Some(false);
    }
    let start = state.value();
    let mut visited = vec![false; 1usize << degree.get()];

    for _ in 0..config.sequence_length() {
        let value = state.value() as usize;
        if visited[value] {
            return Some(false);
        }
        visited[value] = true;
        state.step(config.taps());
    }

    Some(state.value() == start)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableCheck {
    pub degree: u32,
    pub maximal: bool,
}

/// Check every table entry from degree 2 up to `max_degree`, in parallel.
pub fn verify_table(max_degree: u32) -> Vec<TableCheck> {
    let max_degree = max_degree.clamp(PolynomialDegree::MIN, MAX_CHECKED_DEGREE);
    let checks: Vec<TableCheck> = (PolynomialDegree::MIN..=max_degree)
        .into_par_iter()
        .map(|d| {
            let config = GeneratorConfig::new(PolynomialDegree::clamped(d as i64));
            TableCheck {
                degree: d,
                maximal: is_maximal_length(&config, 1).unwrap_or(false),
            }
        })
        .collect();

    let failures = checks
        .iter()
        .filter(|c| !c.maximal)
        .count();
    info!(
        "Checked tap table for degrees 2..={}: {} failure(s)",
        max_degree, failures
    );
    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mls::configure;

    #[test]
    fn test_table_is_maximal_up_to_18() {
        for check in verify_table(18) {
            assert!(check.maximal, "degree {} is not maximal", check.degree);
        }
    }

    #[test]
    fn test_any_nonzero_seed_is_maximal() {
        let config = configure(7);
        for seed in 1..128 {
            assert_eq!(is_maximal_length(&config, seed), Some(true), "seed {seed}");
        }
    }

    #[test]
    fn test_zero_seed_is_not_maximal() {
        assert_eq!(is_maximal_length(&configure(5), 0), Some(false));
    }

    #[test]
    fn test_non_primitive_taps_fail() {
        // x^4 + x^2 + 1 is reducible, so its cycles are shorter than 15
        let config = configure(4);
        let taps = crate::mls::taps::lookup(PolynomialDegree::new(3).unwrap());
        let mut state = LfsrState::from_seed(config.degree(), 1);
        let start = state.value();
        let mut period = 0;
        loop {
            state.step(&taps);
            period += 1;
            if state.value() == start || period > 15 {
                break;
            }
        }
        assert!(period < 15);
    }

    #[test]
    fn test_wide_degree_is_skipped() {
        assert_eq!(is_maximal_length(&configure(32), 1), None);
    }
}
