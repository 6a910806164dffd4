// Fixed 3-bit Fibonacci LFSR used as a known-good reference.
// Seed (1, 0, 0), feedback cell0 ^ cell2, cells shift toward index 0 and the
// output is cell2 before each shift.

use super::driver::SequenceBuffer;

pub const REFERENCE_SEED: [bool; 3] = [true, false, false];
pub const REFERENCE_LENGTH: usize = 7;

/// Register contents before each of the seven reference steps
pub fn reference_states() -> Vec<[bool; 3]> {
    let mut state = REFERENCE_SEED;
    let mut states = Vec::with_capacity(REFERENCE_LENGTH);
    for _ in 0..REFERENCE_LENGTH {
        states.push(state);
        let feedback = state[0] ^ state[2];
        state = [state[1], state[2], feedback];
    }
    states
}

pub fn reference_sequence() -> SequenceBuffer {
    SequenceBuffer::from_bits(
        reference_states()
            .iter()
            .map(|state| state[2])
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_states_cycle() {
        let states = reference_states();
        assert_eq!(states.len(), 7);
        assert_eq!(states[0], REFERENCE_SEED);
        assert_eq!(states[1], [false, false, true]);
        // Every nonzero 3-bit state appears once
        let mut values: Vec<u8> = states
            .iter()
            .map(|s| s[0] as u8 | (s[1] as u8) << 1 | (s[2] as u8) << 2)
            .collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_reference_sequence() {
        assert_eq!(reference_sequence().to_bitstring(), "0111010");
    }
}
