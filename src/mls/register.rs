// LFSR register with a rotating head.
// Instead of shifting the cells, the write index walks through 0..degree and
// taps are read relative to it. This yields the same cycle as a Fibonacci
// register without moving any data.

use super::config::{GeneratorConfig, PolynomialDegree};
use super::taps::TapSet;

const MAX_CELLS: usize = PolynomialDegree::MAX as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LfsrState {
    cells: [bool; MAX_CELLS],
    degree: usize,
    head: usize,
}

impl LfsrState {
    /// Load the low `degree` bits of `seed`, bit i into cell i, head at 0.
    pub fn from_seed(degree: PolynomialDegree, seed: u32) -> Self {
        let degree = degree.get() as usize;
        let mut cells = [false; MAX_CELLS];
        for (i, cell) in cells
            .iter_mut()
            .enumerate()
            .take(degree)
        {
            *cell = (seed >> i) & 1 == 1;
        }
        Self {
            cells,
            degree,
            head: 0,
        }
    }

    pub fn from_cells(cells: &[bool], head: usize) -> Self {
        let degree = cells.len().clamp(
            PolynomialDegree::MIN as usize,
            MAX_CELLS,
        );
        let mut state = Self {
            cells: [false; MAX_CELLS],
            degree,
            head: head % degree,
        };
        for (dst, &src) in state
            .cells
            .iter_mut()
            .zip(cells)
        {
            *dst = src;
        }
        state
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells[..self.degree]
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn is_zero(&self) -> bool {
        self.cells().iter().all(|&c| !c)
    }

    /// Register contents read from the head, packed LSB first.
    ///
    /// Two states with the same value produce the same future output
    /// regardless of where their heads sit.
    pub fn value(&self) -> u32 {
        (0..self.degree).fold(0u32, |acc, j| {
            let bit = self.cells[(self.head + j) % self.degree] as u32;
            acc | (bit << j)
        })
    }

    /// Advance one step and return the bit emitted before the update.
    pub fn step(&mut self, taps: &TapSet) -> bool {
        let out = self.cells[self.head];
        let mut feedback = out;
        for t in taps.iter() {
            feedback ^= self.cells[(self.head + t) % self.degree];
        }
        self.cells[self.head] = feedback;
        self.head = (self.head + 1) % self.degree;
        out
    }
}

/// Register bound to the taps of one configuration
pub struct Lfsr<'a> {
    config: &'a GeneratorConfig,
    state: LfsrState,
}

impl<'a> Lfsr<'a> {
    pub fn new(config: &'a GeneratorConfig, state: LfsrState) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> &LfsrState {
        &self.state
    }

    pub fn into_state(self) -> LfsrState {
        self.state
    }
}

impl Iterator for Lfsr<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        Some(
            self.state
                .step(self.config.taps()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mls::configure;

    #[test]
    fn test_seed_loading() {
        let degree = PolynomialDegree::new(4).unwrap();
        let state = LfsrState::from_seed(degree, 0b1111_0101);
        assert_eq!(state.cells(), &[true, false, true, false]);
        assert_eq!(state.head(), 0);
        assert_eq!(state.value(), 0b0101);
    }

    #[test]
    fn test_single_step() {
        // degree 3, taps [2]: feedback = cell[0] ^ cell[2]
        let config = configure(3);
        let mut state = LfsrState::from_cells(&[true, false, false], 0);
        let out = state.step(config.taps());
        assert!(out);
        assert_eq!(state.cells(), &[true, false, false]);
        assert_eq!(state.head(), 1);

        let out = state.step(config.taps());
        assert!(!out);
        // cell[1] ^ cell[0]
        assert_eq!(state.cells(), &[true, true, false]);
        assert_eq!(state.head(), 2);
    }

    #[test]
    fn test_zero_state_is_fixed_point() {
        let config = configure(5);
        let mut state = LfsrState::from_seed(config.degree(), 0);
        for _ in 0..100 {
            assert!(!state.step(config.taps()));
        }
        assert!(state.is_zero());
    }

    #[test]
    fn test_deterministic_steps() {
        let config = configure(12);
        let initial = LfsrState::from_seed(config.degree(), 0xABC);
        let a: Vec<bool> = Lfsr::new(&config, initial)
            .take(500)
            .collect();
        let b: Vec<bool> = Lfsr::new(&config, initial)
            .take(500)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_head_wraps() {
        let config = configure(2);
        let mut lfsr = Lfsr::new(&config, LfsrState::from_seed(config.degree(), 1));
        lfsr.next();
        lfsr.next();
        assert_eq!(lfsr.state().head(), 0);
    }
}
