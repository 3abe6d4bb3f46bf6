use std::{
    error::Error,
    fmt::{self, Display},
    path::PathBuf,
    process::ExitCode,
};

pub(crate) type SetupResult<T> = Result<T, SetupError>;

/// Exit status for an invalid command line, as in `sysexits.h`.
pub(crate) const USAGE_EXIT_CODE: u8 = 64;

#[derive(Debug)]
pub(crate) enum SetupError {
    /// No options could be extracted from the input file.
    NoConfiguration { input: PathBuf },
    /// The options file could not be written.
    WriteFailed { output: PathBuf },
}

impl Display for SetupError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoConfiguration { input } => {
                write!(formatter, "no configuration in {}", input.display())
            }
            SetupError::WriteFailed { output } => {
                write!(formatter, "failed to write {}", output.display())
            }
        }
    }
}

impl Error for SetupError {}

impl SetupError {
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            SetupError::NoConfiguration { .. } => 1,
            SetupError::WriteFailed { .. } => 2,
        }
    }
}

impl From<SetupError> for ExitCode {
    fn from(value: SetupError) -> Self {
        ExitCode::from(value.exit_code())
    }
}
