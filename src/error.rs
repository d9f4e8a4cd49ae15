use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, SgdErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum SgdErr {
    /// Two operands do not agree on a dimension.
    DimensionMismatch {
        /// Human-readable context for the mismatch (e.g. "targets", "theta").
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A hyperparameter is out of its valid domain for the given data.
    InvalidConfiguration(String),
    /// A configuration document could not be parsed.
    Config(serde_json::Error),
    Io(io::Error),
}

impl SgdErr {
    pub(crate) fn mismatch(what: &'static str, got: usize, expected: usize) -> Self {
        Self::DimensionMismatch {
            what,
            got,
            expected,
        }
    }
}

impl Display for SgdErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SgdErr::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(f, "dimension mismatch for {what}: got {got}, expected {expected}"),
            SgdErr::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            SgdErr::Config(e) => write!(f, "failed to parse configuration: {e}"),
            SgdErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for SgdErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SgdErr::Config(e) => Some(e),
            SgdErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SgdErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}

impl From<io::Error> for SgdErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
