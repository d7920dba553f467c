//! CPU reference for the vector-sum benchmark that consumes the fixtures.
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    time::Duration,
};

use log::info;
use timer::Timer;

use crate::{
    dataset::Dataset,
    error::{GenError, GenResult},
    format::write_values,
    read::{open, read_dataset},
};

/// Element-wise `a + b`.
pub fn sum(a: &Dataset, b: &Dataset) -> GenResult<Dataset> {
    if a.len() != b.len() {
        return Err(GenError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a + b)
}

/// Reads `size` values from each input, adds them and writes the result
/// to `out` in the fixture format. Returns the time spent adding,
/// excluding I/O.
pub fn sum_files<A, B, O>(
    a: A,
    b: B,
    out: O,
    size: usize,
) -> GenResult<Duration>
where
    A: AsRef<Path>,
    B: AsRef<Path>,
    O: AsRef<Path>,
{
    let a = read_dataset(a, size)?;
    let b = read_dataset(b, size)?;

    let mut timer = Timer::new();
    let c = sum(&a, &b)?;
    let elapsed = timer.lap();
    info!("executed in {:.6} seconds", elapsed.as_secs_f64());

    write_values(out.as_ref(), &c)?;

    Ok(elapsed)
}

/// Streams the inputs and a results file in lockstep and fails on the
/// first value where `|c - a - b| > tolerance`. Values are read as
/// whitespace-separated tokens, like [`read_dataset`].
///
/// With `size`, only the first `size` values of each file are compared
/// and an input holding fewer is [`GenError::Truncated`]. Without it
/// all three files must end together. Returns the number of values
/// checked.
pub fn check<A, B, C>(
    a: A,
    b: B,
    c: C,
    tolerance: f64,
    size: Option<usize>,
) -> GenResult<usize>
where
    A: AsRef<Path>,
    B: AsRef<Path>,
    C: AsRef<Path>,
{
    let mut a = Column::open(a.as_ref())?;
    let mut b = Column::open(b.as_ref())?;
    let mut c = Column::open(c.as_ref())?;

    let mut checked = 0;
    while size.map_or(true, |size| checked < size) {
        let row = (a.next_value()?, b.next_value()?, c.next_value()?);

        let (x, y, z) = match row {
            (Some(x), Some(y), Some(z)) => (x, y, z),
            (None, None, None) if size.is_none() => break,
            _ => {
                // Report the first input that ran out
                let short = [(&a, row.0), (&b, row.1), (&c, row.2)]
                    .into_iter()
                    .find(|(_, value)| value.is_none())
                    .map(|(column, _)| column.path)
                    .unwrap_or(c.path)
                    .to_path_buf();
                return Err(match size {
                    Some(expected) => GenError::Truncated {
                        path: short,
                        expected,
                        found: checked,
                    },
                    None => GenError::Uneven {
                        path: short,
                        found: checked,
                    },
                });
            }
        };
        checked += 1;

        if (z - x - y).abs() > tolerance {
            return Err(GenError::Mismatch {
                path: c.path.to_path_buf(),
                line: c.line,
                expected: x + y,
                found: z,
            });
        }
    }

    Ok(checked)
}

/// Whitespace-separated values of one file, tracking the current line
struct Column<'a> {
    path: &'a Path,
    lines: Lines<BufReader<File>>,
    tokens: VecDeque<String>,
    line: usize,
}

impl<'a> Column<'a> {
    fn open(path: &'a Path) -> GenResult<Column<'a>> {
        Ok(Column {
            path,
            lines: open(path)?.lines(),
            tokens: VecDeque::new(),
            line: 0,
        })
    }

    fn next_value(&mut self) -> GenResult<Option<f64>> {
        // Skip blank lines until a token is available
        while self.tokens.is_empty() {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            self.line += 1;

            let line = line.map_err(|e| GenError::io(self.path, e))?;
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }

        let Some(token) = self.tokens.pop_front() else {
            return Ok(None);
        };
        token.parse().map(Some).map_err(|_| GenError::Parse {
            path: self.path.to_path_buf(),
            line: self.line,
            token,
        })
    }
}
