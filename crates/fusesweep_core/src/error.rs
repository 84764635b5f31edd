use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::catalogue::AxisId;

/// Errors detected while assembling or validating a sweep configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    UnknownMethod(String),
    UnknownNorm(String),
    /// An axis required by a requested method has no values
    EmptyAxis(AxisId),
    NoMethods,
    NoRunFiles,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownMethod(token) => {
                write!(f, "unknown fusion method `{token}`")
            }
            ConfigError::UnknownNorm(token) => {
                write!(f, "unknown score normalization `{token}`")
            }
            ConfigError::EmptyAxis(axis) => {
                write!(f, "no {axis} values supplied for a requested method")
            }
            ConfigError::NoMethods => write!(f, "no fusion methods requested"),
            ConfigError::NoRunFiles => write!(f, "no input run files supplied"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that abort a sweep outright
///
/// Engine failures are deliberately absent: a failing combination is recorded
/// in the sweep summary and the remaining combinations still run.
#[derive(Debug)]
pub enum SweepError {
    Config(ConfigError),
    OutputDir { path: PathBuf, source: io::Error },
    OutputWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Config(e) => write!(f, "{e}"),
            SweepError::OutputDir { path, .. } => {
                write!(f, "cannot create output directory {}", path.display())
            }
            SweepError::OutputWrite { path, .. } => {
                write!(f, "cannot write output file {}", path.display())
            }
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Config(e) => Some(e),
            SweepError::OutputDir { source, .. } => Some(source),
            SweepError::OutputWrite { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SweepError {
    fn from(e: ConfigError) -> Self {
        SweepError::Config(e)
    }
}
