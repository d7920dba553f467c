use std::{
    fmt, io,
    path::{Path, PathBuf},
};

pub type GenResult<T = (), E = GenError> =
    Result<T, E>;

#[derive(Debug)]
pub enum GenError {
    /// Filesystem failure on `path` (unwritable, missing directory, ...)
    Io { path: PathBuf, source: io::Error },
    /// The dataset could not be allocated
    OutOfMemory { size: usize },
    /// A token could not be read as a number
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },
    /// File holds fewer values than requested
    Truncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    /// Line is not a fixed-point number with the expected decimals
    Format {
        path: PathBuf,
        line: usize,
        text: String,
    },
    OutOfRange {
        path: PathBuf,
        line: usize,
        value: f64,
    },
    LineCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    /// Two datasets of different lengths were combined
    LengthMismatch { left: usize, right: usize },
    /// `path` ended after `found` values while the other inputs
    /// continue
    Uneven { path: PathBuf, found: usize },
    /// Result value differs from the sum of its inputs
    Mismatch {
        path: PathBuf,
        line: usize,
        expected: f64,
        found: f64,
    },
}

impl GenError {
    pub fn io(path: &Path, source: io::Error) -> GenError {
        GenError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
            GenError::OutOfMemory { size } => {
                write!(f, "cannot allocate a dataset of {size} samples")
            }
            GenError::Parse { path, line, token } => write!(
                f,
                "{}:{line}: cannot parse {token:?} as a number",
                path.display()
            ),
            GenError::Truncated {
                path,
                expected,
                found,
            } => write!(
                f,
                "{}: expected {expected} values, found {found}",
                path.display()
            ),
            GenError::Format { path, line, text } => write!(
                f,
                "{}:{line}: {text:?} is not a fixed-point value",
                path.display()
            ),
            GenError::OutOfRange { path, line, value } => write!(
                f,
                "{}:{line}: {value} is outside the sampling range",
                path.display()
            ),
            GenError::LineCount {
                path,
                expected,
                found,
            } => write!(
                f,
                "{}: expected {expected} lines, found {found}",
                path.display()
            ),
            GenError::LengthMismatch { left, right } => write!(
                f,
                "cannot combine datasets of length {left} and {right}"
            ),
            GenError::Uneven { path, found } => write!(
                f,
                "{}: ended after {found} values before the other inputs",
                path.display()
            ),
            GenError::Mismatch {
                path,
                line,
                expected,
                found,
            } => write!(
                f,
                "{} (line {line}): expected {expected}; found {found}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
