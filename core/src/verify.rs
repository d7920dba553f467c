use std::{fmt, io::BufRead, path::Path};

use crate::{
    error::{GenError, GenResult},
    format::parse_fixed,
    read::open,
    SAMPLE_HIGH, SAMPLE_LOW,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub lines: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

impl Summary {
    fn new() -> Summary {
        Summary {
            lines: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
        }
    }

    fn push(&mut self, value: f64) {
        self.lines += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
    }

    pub fn mean(&self) -> Option<f64> {
        (self.lines > 0).then(|| self.sum / self.lines as f64)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mean() {
            Some(mean) => write!(
                f,
                "{} lines, min {:.6}, max {:.6}, mean {:.6}",
                self.lines, self.min, self.max, mean
            ),
            None => write!(f, "0 lines"),
        }
    }
}

/// Checks that a fixture is well formed: every line is a fixed-point
/// value inside the sampling range, and the line count matches
/// `expected` when given.
///
/// The upper bound is inclusive here since a sample just below
/// [`SAMPLE_HIGH`] can round up to it in the last decimal.
pub fn verify<P: AsRef<Path>>(
    path: P,
    expected: Option<usize>,
) -> GenResult<Summary> {
    let path = path.as_ref();
    let reader = open(path)?;
    let mut summary = Summary::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| GenError::io(path, e))?;
        let value =
            parse_fixed(&line).ok_or_else(|| GenError::Format {
                path: path.to_path_buf(),
                line: idx + 1,
                text: line.clone(),
            })?;

        if !(SAMPLE_LOW..=SAMPLE_HIGH).contains(&value) {
            return Err(GenError::OutOfRange {
                path: path.to_path_buf(),
                line: idx + 1,
                value,
            });
        }

        summary.push(value);
    }

    match expected {
        Some(expected) if expected != summary.lines => {
            Err(GenError::LineCount {
                path: path.to_path_buf(),
                expected,
                found: summary.lines,
            })
        }
        _ => Ok(summary),
    }
}
