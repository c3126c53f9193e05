//! Error types
//!
//! Defines domain-specific error types for the provider, URI parsing and the query shell.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// URI parsing errors
#[derive(Debug, PartialEq)]
pub enum UriError {
    Empty,
    MissingScheme(String),
    InvalidScheme(String),
    UnsupportedHost(String),
    MalformedEscape(String),
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriError::Empty => write!(f, "Empty URI"),
            UriError::MissingScheme(u) => write!(f, "URI has no scheme: {}", u),
            UriError::InvalidScheme(s) => write!(f, "Invalid URI scheme: {}", s),
            UriError::UnsupportedHost(h) => write!(f, "File URI host not supported: {}", h),
            UriError::MalformedEscape(u) => write!(f, "Malformed percent escape in: {}", u),
        }
    }
}

impl std::error::Error for UriError {}

/// Provider construction errors
#[derive(Debug)]
pub enum ProviderError {
    Config(config::ConfigError),
    InvalidRoot { role: &'static str, path: PathBuf },
    RootUnavailable {
        role: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(e) => write!(f, "Configuration error: {}", e),
            ProviderError::InvalidRoot { role, path } => {
                write!(f, "Invalid {} directory: {}", role, path.display())
            }
            ProviderError::RootUnavailable { role, path, source } => write!(
                f,
                "Cannot create {} directory {}: {}",
                role,
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Config(e) => Some(e),
            ProviderError::RootUnavailable { source, .. } => Some(source),
            ProviderError::InvalidRoot { .. } => None,
        }
    }
}

impl From<config::ConfigError> for ProviderError {
    fn from(error: config::ConfigError) -> Self {
        ProviderError::Config(error)
    }
}

/// Query shell errors
#[derive(Debug)]
pub enum ShellError {
    Uri(UriError),
    MissingArgument(&'static str),
    DirectoryNotCreated(PathBuf),
    CommandTooLong(usize),
    UnknownCommand(String),
    IoError(io::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Uri(e) => write!(f, "{}", e),
            ShellError::MissingArgument(a) => write!(f, "Missing argument: {}", a),
            ShellError::DirectoryNotCreated(p) => {
                write!(f, "Directory not available: {}", p.display())
            }
            ShellError::CommandTooLong(len) => write!(f, "Command too long ({} bytes)", len),
            ShellError::UnknownCommand(c) => write!(f, "Unknown command: {}", c),
            ShellError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<UriError> for ShellError {
    fn from(error: UriError) -> Self {
        ShellError::Uri(error)
    }
}

impl From<io::Error> for ShellError {
    fn from(error: io::Error) -> Self {
        ShellError::IoError(error)
    }
}
