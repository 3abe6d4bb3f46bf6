use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::{Path, PathBuf},
};

/// Reasons why no options could be read from a `google-services.json` file.
#[derive(Debug)]
pub enum ExtractError {
    /// There is no file at the expected location.
    Missing {
        /// The expected location.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    Read {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The file does not contain a valid credentials document.
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// Where and why the JSON is invalid.
        source: serde_json::Error,
    },
}

impl ExtractError {
    /// The file this error is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path } | Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

impl Display for ExtractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(formatter, "file {} not found", path.display()),
            Self::Read { path, source } => {
                write!(formatter, "failed to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(formatter, "failed to parse {}: {source}", path.display())
            }
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Missing { .. } => None,
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
