/// Seeding and validation loop around the sequence driver
use rand::Rng;
use tracing::{debug, warn};

use super::config::GeneratorConfig;
use super::driver::{self, SequenceBuffer};
use super::error::MlsError;
use super::register::LfsrState;
use crate::utils::consts::DEFAULT_MAX_ATTEMPTS;

/// Source of raw seed words; only the low `degree` bits are used.
pub trait SeedSource {
    fn next_seed(&mut self) -> u32;
}

/// Seeds drawn uniformly from any `rand` generator
pub struct RandomSeeds<R> {
    rng: R,
}

impl<R: Rng> RandomSeeds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSeeds<rand::rngs::ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> SeedSource for RandomSeeds<R> {
    fn next_seed(&mut self) -> u32 {
        self.rng.random()
    }
}

/// Replays a fixed list of seeds, repeating the last one once exhausted.
pub struct FixedSeeds {
    seeds: Vec<u32>,
    next: usize,
}

impl FixedSeeds {
    pub fn new(seeds: impl Into<Vec<u32>>) -> Self {
        Self {
            seeds: seeds.into(),
            next: 0,
        }
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&mut self) -> u32 {
        let seed = match self.seeds.get(self.next) {
            Some(&seed) => seed,
            None => self
                .seeds
                .last()
                .copied()
                .unwrap_or(0),
        };
        self.next += 1;
        seed
    }
}

/// Upper bound on reseeding.
///
/// With a maximal-length tap set only a zero seed degenerates, so the first
/// or second attempt succeeds in practice. The cap turns a faulty seed
/// source into an error instead of a hang.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// An accepted sequence with the seed that produced it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub sequence: SequenceBuffer,
    /// Seed after masking to the register width
    pub seed: u32,
    pub attempts: u32,
}

pub struct MlsGenerator<S> {
    config: GeneratorConfig,
    seeds: S,
    policy: RetryPolicy,
}

impl MlsGenerator<RandomSeeds<rand::rngs::ThreadRng>> {
    pub fn new_default(config: GeneratorConfig) -> Self {
        Self::new(config, RandomSeeds::thread_local())
    }
}

impl<S: SeedSource> MlsGenerator<S> {
    pub fn new(config: GeneratorConfig, seeds: S) -> Self {
        Self {
            config,
            seeds,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn reconfigure(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Seed, run and validate until a sequence with at least one set bit
    /// comes out, or the attempt budget runs out.
    pub fn generate(&mut self) -> Result<Generated, MlsError> {
        self.generate_observed(|_, _, _| {})
    }

    /// [`generate`](Self::generate) with a per-step callback, forwarded to
    /// the driver on every attempt.
    pub fn generate_observed<F>(&mut self, mut observe: F) -> Result<Generated, MlsError>
    where
        F: FnMut(u64, bool, &LfsrState),
    {
        let degree = self.config.degree();

        for attempt in 1..=self.policy.max_attempts {
            let seed = self.seeds.next_seed() & degree.seed_mask();
            let state = LfsrState::from_seed(degree, seed);
            let sequence = driver::run_observed(&self.config, state, &mut observe);

            if sequence.is_degenerate() {
                debug!(
                    "Degenerate sequence from seed {:#x} (degree {}, attempt {}), reseeding",
                    seed, degree, attempt
                );
                continue;
            }

            debug!(
                "Accepted degree {} sequence of {} bits from seed {:#x} after {} attempt(s)",
                degree,
                sequence.len(),
                seed,
                attempt
            );
            return Ok(Generated {
                sequence,
                seed,
                attempts: attempt,
            });
        }

        warn!(
            "Gave up on degree {} after {} attempts",
            degree, self.policy.max_attempts
        );
        Err(MlsError::ExhaustedRetries {
            attempts: self.policy.max_attempts,
        })
    }
}

/// Generate one period for `config` using the thread-local rng.
pub fn generate_sequence(config: &GeneratorConfig) -> Result<SequenceBuffer, MlsError> {
    MlsGenerator::new_default(*config)
        .generate()
        .map(|generated| generated.sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mls::configure;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_seed_triggers_one_reseed() {
        let config = configure(4);
        let mut generator = MlsGenerator::new(config, FixedSeeds::new([0, 0b1001]));
        let generated = generator.generate().unwrap();
        assert_eq!(generated.attempts, 2);
        assert_eq!(generated.seed, 0b1001);
        assert!(!generated.sequence.is_degenerate());

        let expected = driver::run(&config, LfsrState::from_seed(config.degree(), 0b1001));
        assert_eq!(generated.sequence, expected);
    }

    #[test]
    fn test_high_bits_are_masked() {
        // Only bits above the register width are set, so the seed is zero
        let config = configure(3);
        let mut generator = MlsGenerator::new(config, FixedSeeds::new([0b1000, 0b1001]));
        let generated = generator.generate().unwrap();
        assert_eq!(generated.attempts, 2);
        assert_eq!(generated.seed, 0b001);
    }

    #[test]
    fn test_exhausted_retries() {
        let config = configure(8);
        let mut generator = MlsGenerator::new(config, FixedSeeds::new([0]))
            .with_policy(RetryPolicy { max_attempts: 5 });
        assert_eq!(
            generator.generate(),
            Err(MlsError::ExhaustedRetries { attempts: 5 })
        );
    }

    #[test]
    fn test_zero_attempt_budget() {
        let mut generator = MlsGenerator::new(configure(4), FixedSeeds::new([1]))
            .with_policy(RetryPolicy { max_attempts: 0 });
        assert_eq!(
            generator.generate(),
            Err(MlsError::ExhaustedRetries { attempts: 0 })
        );
    }

    #[test]
    fn test_random_seeds_produce_valid_sequences() {
        let mut generator =
            MlsGenerator::new(configure(9), RandomSeeds::new(StdRng::seed_from_u64(7)));
        for _ in 0..20 {
            let generated = generator.generate().unwrap();
            assert_eq!(generated.sequence.len(), 511);
            assert_eq!(generated.sequence.count_ones(), 256);
            assert_ne!(generated.seed, 0);
        }
    }

    #[test]
    fn test_reconfigure() {
        let mut generator = MlsGenerator::new(configure(3), FixedSeeds::new([5]));
        generator.reconfigure(configure(5));
        assert_eq!(generator.generate().unwrap().sequence.len(), 31);
    }

    #[test]
    fn test_generate_sequence_lengths() {
        for d in 2..=18 {
            let config = configure(d);
            let seq = generate_sequence(&config).unwrap();
            assert_eq!(seq.len() as u64, (1u64 << d) - 1);
            assert!(!seq.is_degenerate());
        }
    }
}
