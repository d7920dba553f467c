use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    dataset::Dataset,
    error::{GenError, GenResult},
};

pub(crate) fn open(path: &Path) -> GenResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| GenError::io(path, e))
}

/// Reads the first `size` whitespace-separated values of a fixture.
///
/// Values beyond `size` are ignored. Any parseable float is accepted, not
/// only the fixed-point encoding written by this crate.
pub fn read_dataset<P: AsRef<Path>>(
    path: P,
    size: usize,
) -> GenResult<Dataset> {
    let path = path.as_ref();
    let reader = open(path)?;

    let mut values = Vec::new();
    values
        .try_reserve_exact(size)
        .map_err(|_| GenError::OutOfMemory { size })?;

    'lines: for (idx, line) in reader.lines().enumerate() {
        if values.len() == size {
            break;
        }
        let line = line.map_err(|e| GenError::io(path, e))?;

        for token in line.split_whitespace() {
            let value = token.parse().map_err(|_| GenError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);

            if values.len() == size {
                break 'lines;
            }
        }
    }

    if values.len() < size {
        return Err(GenError::Truncated {
            path: path.to_path_buf(),
            expected: size,
            found: values.len(),
        });
    }

    Ok(Dataset::from_vec(values))
}
