use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

use mlsgen::acoustic::io::{read_wav, write_bits_to_txt, write_to_txt, write_to_wav};
use mlsgen::measurement::{
    FftTransform, ScratchBuffer, excitation_signal, impulse_response, to_bipolar,
};
use mlsgen::mls::period::{self, MAX_CHECKED_DEGREE};
use mlsgen::mls::trace::{driver_trace, reference_trace, render_final, render_trace};
use mlsgen::mls::{
    FixedSeeds, Generated, LfsrState, MlsGenerator, RandomSeeds, RetryPolicy, SeedSource,
    configure, reference_sequence,
};
use mlsgen::ui::progress::StepProgress;
use mlsgen::ui::{format_tap_table, print_banner, summarize_bits};
use mlsgen::utils::consts::*;
use mlsgen::utils::dump::SequenceReport;
use mlsgen::utils::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one period of a maximal-length sequence
    Generate {
        /// Register width, clamped to 2..=32
        #[arg(short, long, default_value_t = DEFAULT_DEGREE as i64, allow_negative_numbers = true)]
        degree: i64,
        /// Fixed seed instead of a random one
        #[arg(short, long)]
        seed: Option<u32>,
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: u32,
        /// Print a JSON report instead of the bitstream
        #[arg(long)]
        json: bool,
        /// Show the first steps of the register
        #[arg(long)]
        trace: bool,
        /// Write the bipolar excitation signal to a WAV file
        #[arg(long)]
        wav: Option<PathBuf>,
        /// Write the bits, one per line
        #[arg(long)]
        bits: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_PERIODS)]
        periods: usize,
        #[arg(long, default_value_t = SAMPLE_RATE)]
        sample_rate: u32,
    },
    /// Print the fixed 3-bit reference sequence
    Reference {
        #[arg(long)]
        trace: bool,
    },
    /// List the built-in tap table
    Taps,
    /// Re-simulate registers and check they reach the full period
    Verify {
        /// Check one degree instead of the whole table
        #[arg(short, long)]
        degree: Option<i64>,
        #[arg(short, long, default_value_t = 1)]
        seed: u32,
        #[arg(long, default_value_t = DEFAULT_VERIFY_DEGREE)]
        max_degree: u32,
    },
    /// Recover an impulse response from a recorded MLS excitation
    Measure {
        #[arg(short, long)]
        degree: i64,
        /// Seed the excitation was generated with
        #[arg(short, long)]
        seed: u32,
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn generate_with<S: SeedSource>(
    degree: i64,
    seeds: S,
    max_attempts: u32,
) -> Result<Generated, Box<dyn Error>> {
    let config = configure(degree);
    let mut generator =
        MlsGenerator::new(config, seeds).with_policy(RetryPolicy { max_attempts });

    let progress = StepProgress::new(
        config.degree().get(),
        config.sequence_length(),
        &format!("degree {}", config.degree()),
    );
    let generated = generator.generate_observed(|step, _, _| progress.on_step(step))?;
    progress.finish("done");
    Ok(generated)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            degree,
            seed,
            max_attempts,
            json,
            trace,
            wav,
            bits,
            periods,
            sample_rate,
        } => {
            let config = configure(degree);
            if config.degree().get() as i64 != degree {
                info!("Degree {} clamped to {}", degree, config.degree());
            }

            let generated = match seed {
                Some(seed) => generate_with(degree, FixedSeeds::new([seed]), max_attempts)?,
                None => generate_with(degree, RandomSeeds::thread_local(), max_attempts)?,
            };
            info!(
                "Generated {} bits (degree {}, seed {:#x}, {} attempt(s))",
                generated.sequence.len(),
                config.degree(),
                generated.seed,
                generated.attempts
            );

            if json {
                let report =
                    SequenceReport::new(&config, &generated, generated.sequence.len() <= MAX_PRINTED_BITS);
                println!("{}", report.to_json()?);
            } else {
                print_banner();
                if trace {
                    let state = LfsrState::from_seed(config.degree(), generated.seed);
                    let (_, rows) = driver_trace(&config, state, MAX_TRACE_ROWS);
                    print!("{}", render_trace(&rows));
                }
                println!("{}", summarize_bits(&generated.sequence));
            }

            if let Some(path) = bits {
                write_bits_to_txt(&generated.sequence, &path)?;
                info!("Wrote bits to {}", path.display());
            }
            if let Some(path) = wav {
                let signal =
                    excitation_signal(&generated.sequence, EXCITATION_AMPLITUDE, periods);
                write_to_wav(&signal, sample_rate, &path)?;
                info!(
                    "Wrote {} periods ({} samples) to {}",
                    periods,
                    signal.len(),
                    path.display()
                );
            }
        }
        Commands::Reference { trace } => {
            if trace {
                println!("Starting 3-bit MLS generation:");
                print!("{}", render_trace(&reference_trace()));
                println!();
            }
            println!("{}", render_final(&reference_sequence()));
        }
        Commands::Taps => {
            print!("{}", format_tap_table());
        }
        Commands::Verify {
            degree,
            seed,
            max_degree,
        } => match degree {
            Some(degree) => {
                let config = configure(degree);
                match period::is_maximal_length(&config, seed) {
                    Some(true) => println!("degree {}: maximal", config.degree()),
                    Some(false) => {
                        println!("degree {}: NOT maximal from seed {:#x}", config.degree(), seed);
                        std::process::exit(1);
                    }
                    None => println!(
                        "degree {}: too wide to check (limit {})",
                        config.degree(),
                        MAX_CHECKED_DEGREE
                    ),
                }
            }
            None => {
                let checks = period::verify_table(max_degree);
                for check in &checks {
                    println!(
                        "degree {:2}: {}",
                        check.degree,
                        if check.maximal { "maximal" } else { "NOT maximal" }
                    );
                }
                if checks.iter().any(|c| !c.maximal) {
                    std::process::exit(1);
                }
            }
        },
        Commands::Measure {
            degree,
            seed,
            input,
            output,
        } => {
            let generated = generate_with(degree, FixedSeeds::new([seed]), 1)?;
            let excitation = to_bipolar(&generated.sequence, EXCITATION_AMPLITUDE);
            let (recording, sample_rate) = read_wav(&input)?;
            info!(
                "Loaded {} samples at {} Hz from {}",
                recording.len(),
                sample_rate,
                input.display()
            );

            let transform = FftTransform::new(excitation.len());
            let mut scratch = ScratchBuffer::for_transform(&transform);
            let response = impulse_response(&excitation, &recording, &transform, &mut scratch)?;
            write_to_txt(&response, &output)?;
            info!(
                "Wrote {} impulse response taps to {}",
                response.len(),
                output.display()
            );
        }
    }

    Ok(())
}
