use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Matrix/vector dimension mismatch. Shapes are `(rows, cols)`.
    Shape {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Malformed input row or file. `line` is 1-based; `0` means the whole file.
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    EmptyDataset(&'static str),
    InvalidConfig(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn shape(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Error::Shape { op, left, right }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Shape { op, left, right } => write!(
                f,
                "shape mismatch in {op}: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Error::Parse {
                path,
                line,
                message,
            } => write!(f, "parse error in {} line {line}: {message}", path.display()),
            Error::EmptyDataset(ctx) => write!(f, "empty dataset: {ctx}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::Io { path, source } => write!(f, "i/o error on {}: {source}", path.display()),
            Error::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
