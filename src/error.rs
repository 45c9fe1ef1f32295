// SPDX-License-Identifier: MPL-2.0
use crate::application::port::analyzer::AnalysisError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The file extension is not one of the accepted image formats.
    UnsupportedFormat(String),
    /// The file exceeds the configured size limit.
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    Analysis(AnalysisError),
}

impl Error {
    /// Returns the i18n message key used when reporting this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-file-unreadable",
            Error::Config(_) => "notification-config-load-error",
            Error::UnsupportedFormat(_) => "notification-unsupported-format",
            Error::FileTooLarge { .. } => "notification-file-too-large",
            Error::Analysis(AnalysisError::UnsupportedImage) => "notification-analysis-unsupported",
            Error::Analysis(AnalysisError::Failed(_)) => "notification-analysis-failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnsupportedFormat(e) => write!(f, "Unsupported format: {}", e),
            Error::FileTooLarge {
                size_bytes,
                limit_bytes,
            } => write!(
                f,
                "File too large: {} bytes (limit {} bytes)",
                size_bytes, limit_bytes
            ),
            Error::Analysis(e) => write!(f, "Analysis Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AnalysisError> for Error {
    fn from(err: AnalysisError) -> Self {
        Error::Analysis(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
