// Maximal-length sequence generation
// Tap table -> register -> driver -> seed/validation loop

pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod period;
pub mod reference;
pub mod register;
pub mod taps;
pub mod trace;

pub use config::{GeneratorConfig, PolynomialDegree, configure, sequence_length};
pub use driver::SequenceBuffer;
pub use error::MlsError;
pub use generator::{
    FixedSeeds, Generated, MlsGenerator, RandomSeeds, RetryPolicy, SeedSource,
    generate_sequence,
};
pub use reference::reference_sequence;
pub use register::{Lfsr, LfsrState};
pub use taps::TapSet;
