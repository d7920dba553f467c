//! Fixed-point text encoding of datasets: one value per line, exactly
//! [`DECIMALS`] fractional digits, sign only when negative.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{GenError, GenResult},
    DECIMALS,
};

const WRITE_BUFFER: usize = 1 << 20;

/// Creates (or truncates) `path` and writes `values` one per line.
///
/// The parent directory must already exist.
pub fn write_values<'a, I>(path: &Path, values: I) -> GenResult
where
    I: IntoIterator<Item = &'a f64>,
{
    let file = File::create(path).map_err(|e| GenError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER, file);

    for value in values {
        write_value(&mut writer, *value)
            .map_err(|e| GenError::io(path, e))?;
    }

    // Flush explicitly, drop would swallow the error
    writer.flush().map_err(|e| GenError::io(path, e))
}

#[inline(always)]
pub fn write_value<W: Write>(
    writer: &mut W,
    value: f64,
) -> std::io::Result<()> {
    writeln!(writer, "{:.*}", DECIMALS, value)
}

/// Parses a line written by [`write_value`], rejecting anything that is
/// not `-?[0-9]+\.[0-9]{DECIMALS}`.
pub fn parse_fixed(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int, frac) = unsigned.split_once('.')?;

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int.is_empty()
        || frac.len() != DECIMALS
        || !is_digits(int)
        || !is_digits(frac)
    {
        return None;
    }

    text.parse().ok()
}
