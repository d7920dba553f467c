use std::path::Path;

use log::{debug, info};
use rand::Rng;
use timer::Timer;

pub mod dataset;
pub mod error;
pub mod format;
pub mod read;
pub mod sum;
pub mod verify;

pub use dataset::Dataset;
pub use error::{GenError, GenResult};
pub use read::read_dataset;
pub use sum::{check, sum, sum_files};
pub use verify::{verify, Summary};

/// Samples per fixture when no size is given
pub const DEFAULT_SIZE: usize = 26_000_000;

/// Inclusive lower bound of the sampling range
pub const SAMPLE_LOW: f64 = -10.0;
/// Exclusive upper bound of the sampling range
pub const SAMPLE_HIGH: f64 = 10.0;

/// Fractional digits written per value
pub const DECIMALS: usize = 6;

pub const VECTOR1: &str = "data/vector1.dat";
pub const VECTOR2: &str = "data/vector2.dat";
pub const DEFAULT_OUTPUTS: [&str; 2] = [VECTOR1, VECTOR2];
pub const DEFAULT_RESULTS: &str = "data/results.dat";

/// Largest accepted `|c - a - b|` when checking a results file
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Writes `size` uniform samples from [SAMPLE_LOW, SAMPLE_HIGH) to
/// `path`, one fixed-point value per line, using the thread-local
/// entropy-seeded rng. Two calls never produce the same file.
pub fn generate<P: AsRef<Path>>(path: P, size: usize) -> GenResult {
    generate_with_rng(path, size, &mut rand::thread_rng())
}

/// Same as [`generate`] with a caller supplied rng.
pub fn generate_with_rng<P, R>(
    path: P,
    size: usize,
    rng: &mut R,
) -> GenResult
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let path = path.as_ref();
    let mut timer = Timer::new();

    // The whole dataset is materialized before anything touches disk
    let dataset = dataset::sample(size, rng)?;
    let sampled = timer.lap();
    debug!("sampled {size} values in {sampled:?}");

    format::write_values(path, &dataset)?;
    let written = timer.lap();
    debug!("wrote {} in {written:?}", path.display());

    info!(
        "generated {size} samples into {} ({} ms, {:.0} samples/s)",
        path.display(),
        timer.elapsed_ms(),
        timer.rate(size),
    );

    Ok(())
}

/// Generates one fixture per path, in order. Stops at the first failure,
/// leaving earlier files complete.
pub fn generate_all<P: AsRef<Path>>(
    paths: &[P],
    size: usize,
) -> GenResult {
    for path in paths {
        generate(path, size)?;
    }

    Ok(())
}

/// The benchmark's fixture pair: [`DEFAULT_SIZE`] samples into
/// [`VECTOR1`] then [`VECTOR2`].
pub fn generate_defaults() -> GenResult {
    generate_all(&DEFAULT_OUTPUTS, DEFAULT_SIZE)
}


#[cfg(test)]
mod tests {
    use std::fs;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::test_utils::temp_path;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_generate_five() {
        let path = temp_path("five");
        generate(&path, 5).unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 5);
        for line in &lines {
            let value = format::parse_fixed(line)
                .unwrap_or_else(|| panic!("bad line {line:?}"));
            assert!((SAMPLE_LOW..=SAMPLE_HIGH).contains(&value));
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_generate_empty() {
        let path = temp_path("empty");
        generate(&path, 0).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_generate_verifies() {
        let path = temp_path("verified");
        generate(&path, 10_000).unwrap();

        let summary = verify(&path, Some(10_000)).unwrap();
        assert_eq!(summary.lines, 10_000);
        assert!(summary.min >= SAMPLE_LOW);
        assert!(summary.max <= SAMPLE_HIGH);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_generate_not_idempotent() {
        let first = temp_path("first");
        let second = temp_path("second");
        generate(&first, 100).unwrap();
        generate(&second, 100).unwrap();

        assert_ne!(read_lines(&first), read_lines(&second));

        fs::remove_file(&first).unwrap();
        fs::remove_file(&second).unwrap();
    }

    #[test]
    fn test_generate_seeded() {
        let first = temp_path("seeded-first");
        let second = temp_path("seeded-second");
        generate_with_rng(&first, 100, &mut StdRng::seed_from_u64(9))
            .unwrap();
        generate_with_rng(&second, 100, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(read_lines(&first), read_lines(&second));

        fs::remove_file(&first).unwrap();
        fs::remove_file(&second).unwrap();
    }

    #[test]
    fn test_generate_overwrites() {
        let path = temp_path("overwrite");
        fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();
        generate(&path, 2).unwrap();

        assert_eq!(read_lines(&path).len(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_generate_missing_directory() {
        let path = temp_path("no-such-dir").join("out.dat");

        assert!(matches!(
            generate(&path, 5),
            Err(GenError::Io { .. })
        ));
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_generate_all_stops_at_first_failure() {
        let first = temp_path("all-first");
        let second = temp_path("all-missing").join("vector2.dat");

        assert!(generate_all(&[&first, &second], 3).is_err());

        // First file is complete, second was never created
        assert_eq!(read_lines(&first).len(), 3);
        assert!(!second.exists());

        fs::remove_file(&first).unwrap();
    }
}
