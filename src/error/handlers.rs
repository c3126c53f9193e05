//! Error handlers
//!
//! Provides error logging and reply-code mapping for the query shell.

use crate::error::types::ShellError;
use log::{error, warn};

/// Log a shell error at a level matching its severity
pub fn handle_error(err: &ShellError) {
    match err {
        ShellError::IoError(_) => error!("Shell error: {}", err),
        _ => warn!("Shell error: {}", err),
    }
}

/// Convert error to shell reply code
pub fn error_reply_code(err: &ShellError) -> u16 {
    match err {
        ShellError::Uri(_) => 501,
        ShellError::MissingArgument(_) => 501,
        ShellError::DirectoryNotCreated(_) => 550,
        ShellError::CommandTooLong(_) => 500,
        ShellError::UnknownCommand(_) => 502,
        ShellError::IoError(_) => 451,
    }
}

/// Format an error as a reply line
pub fn error_reply(err: &ShellError) -> String {
    match err {
        ShellError::UnknownCommand(_) => format!("{} Unknown command\n", error_reply_code(err)),
        _ => format!("{} {}\n", error_reply_code(err), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UriError;
    use std::path::PathBuf;

    #[test]
    fn test_reply_codes() {
        assert_eq!(error_reply_code(&ShellError::Uri(UriError::Empty)), 501);
        assert_eq!(
            error_reply_code(&ShellError::DirectoryNotCreated(PathBuf::from("/x"))),
            550
        );
        assert_eq!(error_reply_code(&ShellError::CommandTooLong(5000)), 500);
        assert_eq!(
            error_reply_code(&ShellError::UnknownCommand("FOO".into())),
            502
        );
    }

    #[test]
    fn test_error_reply_format() {
        assert_eq!(
            error_reply(&ShellError::UnknownCommand("FOO".into())),
            "502 Unknown command\n"
        );
        assert_eq!(
            error_reply(&ShellError::MissingArgument("uri")),
            "501 Missing argument: uri\n"
        );
    }
}
