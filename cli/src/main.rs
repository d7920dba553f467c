use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{eyre::Context, Result};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use vecgen_core::{
    check, generate, generate_defaults, generate_with_rng, sum_files,
    verify, DEFAULT_RESULTS, DEFAULT_SIZE, DEFAULT_TOLERANCE, VECTOR1,
    VECTOR2,
};

/// Uniform random fixtures for the vector-sum benchmark.
///
/// Without a subcommand, writes data/vector1.dat and data/vector2.dat.
#[derive(Parser, Debug)]
#[clap(name = "vecgen")]
pub struct Args {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Write a single fixture
    Generate {
        #[clap(long)]
        out: PathBuf,

        #[clap(long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        /// Seed for a reproducible fixture
        #[clap(long)]
        seed: Option<u64>,
    },

    /// Check a fixture's format, range and line count
    Verify {
        path: PathBuf,

        #[clap(long)]
        size: Option<usize>,
    },

    /// Add two fixtures on the CPU and write the results
    Sum {
        #[clap(long, default_value = VECTOR1)]
        a: PathBuf,

        #[clap(long, default_value = VECTOR2)]
        b: PathBuf,

        #[clap(long, default_value = DEFAULT_RESULTS)]
        out: PathBuf,

        #[clap(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },

    /// Compare a results file against its two inputs
    Check {
        #[clap(long, default_value = VECTOR1)]
        a: PathBuf,

        #[clap(long, default_value = VECTOR2)]
        b: PathBuf,

        #[clap(long, default_value = DEFAULT_RESULTS)]
        c: PathBuf,

        #[clap(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,

        /// Compare only the first N values, as written by `sum --size`
        #[clap(long)]
        size: Option<usize>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Quiet unless RUST_LOG asks otherwise
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    // Parse command line arguments
    let args = Args::parse();

    match args.command {
        None => generate_defaults()
            .wrap_err("failed to generate default fixtures")?,

        Some(Command::Generate { out, size, seed }) => {
            let result = match seed {
                Some(seed) => generate_with_rng(
                    &out,
                    size,
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => generate(&out, size),
            };
            result.wrap_err_with(|| {
                format!("failed to generate {}", out.display())
            })?;
        }

        Some(Command::Verify { path, size }) => {
            let summary = verify(&path, size).wrap_err_with(|| {
                format!("failed to verify {}", path.display())
            })?;
            println!("{}: {summary}", path.display());
        }

        Some(Command::Sum { a, b, out, size }) => {
            let elapsed = sum_files(&a, &b, &out, size)
                .wrap_err("failed to sum fixtures")?;
            info!("wrote {} after {elapsed:?}", out.display());
            eprintln!(
                "EXECUTED IN {:.6} SECONDS",
                elapsed.as_secs_f64()
            );
        }

        Some(Command::Check {
            a,
            b,
            c,
            tolerance,
            size,
        }) => {
            let lines = check(&a, &b, &c, tolerance, size)
                .wrap_err_with(|| format!("error in {}", c.display()))?;
            println!("NO ERRORS FOUND ({lines} lines)");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_defaults() {
        let args = Args::try_parse_from(["vecgen"]).unwrap();
        assert_eq!(args.command, None);
    }

    #[test]
    fn test_generate_args() {
        let args = Args::try_parse_from([
            "vecgen", "generate", "--out", "out.dat", "--size", "5",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Generate {
                out: PathBuf::from("out.dat"),
                size: 5,
                seed: None,
            })
        );

        // Size falls back to the fixture default
        let args = Args::try_parse_from([
            "vecgen", "generate", "--out", "out.dat", "--seed", "7",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Generate {
                out: PathBuf::from("out.dat"),
                size: DEFAULT_SIZE,
                seed: Some(7),
            })
        );
    }

    #[test]
    fn test_check_defaults() {
        let args = Args::try_parse_from(["vecgen", "check"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Check {
                a: PathBuf::from(VECTOR1),
                b: PathBuf::from(VECTOR2),
                c: PathBuf::from(DEFAULT_RESULTS),
                tolerance: DEFAULT_TOLERANCE,
                size: None,
            })
        );
    }

    #[test]
    fn test_check_size() {
        let args =
            Args::try_parse_from(["vecgen", "check", "--size", "5"])
                .unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Check { size: Some(5), .. })
        ));
    }

    #[test]
    fn test_rejects_negative_size() {
        assert!(Args::try_parse_from([
            "vecgen", "generate", "--out", "x", "--size", "-1",
        ])
        .is_err());
    }
}
