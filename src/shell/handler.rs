//! Command dispatch
//!
//! Runs a parsed [`Command`] against a provider and formats the reply line.

use log::info;
use std::path::Path;

use crate::error::ShellError;
use crate::error::handlers::{error_reply, handle_error};
use crate::permissions::Uri;
use crate::provider::FileSystemInterface;
use crate::shell::parser::Command;

const HELP_TEXT: &str =
    "DOCS CACHES BUNDLE ROOTS PERM <uri> GENPATH <dir> [<ext>] MKDIR <path> HELP QUIT";

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure,
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: String,
}

impl CommandResult {
    fn ok(value: impl std::fmt::Display) -> Self {
        Self {
            status: CommandStatus::Success,
            message: format!("200 {}\n", value),
        }
    }

    fn failed(err: ShellError) -> Self {
        handle_error(&err);
        Self {
            status: CommandStatus::Failure,
            message: error_reply(&err),
        }
    }
}

pub fn handle_command(provider: &dyn FileSystemInterface, command: &Command) -> CommandResult {
    match run(provider, command) {
        Ok(result) => result,
        Err(err) => CommandResult::failed(err),
    }
}

fn run(provider: &dyn FileSystemInterface, command: &Command) -> Result<CommandResult, ShellError> {
    let result = match command {
        Command::Quit => CommandResult {
            status: CommandStatus::CloseConnection,
            message: "221 Goodbye\n".to_string(),
        },
        Command::Help => CommandResult::ok(HELP_TEXT),
        Command::Docs => CommandResult::ok(provider.document_directory().display()),
        Command::Caches => CommandResult::ok(provider.caches_directory().display()),
        Command::Bundle => CommandResult::ok(provider.bundle_directory().display()),
        Command::Roots => CommandResult::ok(format!(
            "document={} caches={} bundle={}",
            provider.document_directory().display(),
            provider.caches_directory().display(),
            provider.bundle_directory().display()
        )),
        Command::Perm(raw) => {
            let raw = required(raw, "uri")?;
            let uri = Uri::parse(raw)?;
            let flags = provider.permissions_for_uri(&uri);
            info!("PERM {} -> {}", uri, flags);
            CommandResult::ok(format!("{} ({})", flags, flags.bits()))
        }
        Command::GenPath {
            directory,
            extension,
        } => {
            let directory = required(directory, "directory")?;
            let path = provider.generate_path_in_directory(Path::new(directory), extension);
            CommandResult::ok(path.display())
        }
        Command::Mkdir(raw) => {
            let path = Path::new(required(raw, "path")?);
            if !provider.ensure_dir_exists_with_path(path) {
                return Err(ShellError::DirectoryNotCreated(path.to_path_buf()));
            }
            CommandResult::ok(path.display())
        }
        Command::Unknown(raw) => return Err(ShellError::UnknownCommand(raw.clone())),
    };
    Ok(result)
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, ShellError> {
    if value.is_empty() {
        Err(ShellError::MissingArgument(name))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::provider::FileSystemProvider;
    use crate::shell::parser::parse_command;
    use std::fs;
    use tempfile::TempDir;

    fn provider(temp: &TempDir) -> FileSystemProvider {
        let config = ProviderConfig::new(
            temp.path().join("Documents"),
            temp.path().join("Caches"),
            temp.path().join("Bundle"),
        );
        FileSystemProvider::new(&config).unwrap()
    }

    fn reply(provider: &FileSystemProvider, line: &str) -> CommandResult {
        handle_command(provider, &parse_command(line))
    }

    #[test]
    fn test_directory_queries() {
        let temp = TempDir::new().unwrap();
        let provider = provider(&temp);

        let result = reply(&provider, "DOCS");
        assert_eq!(result.status, CommandStatus::Success);
        assert_eq!(
            result.message,
            format!("200 {}\n", temp.path().join("Documents").display())
        );
        assert!(reply(&provider, "ROOTS").message.contains("bundle="));
    }

    #[test]
    fn test_perm_replies() {
        let temp = TempDir::new().unwrap();
        let provider = provider(&temp);
        let doc = temp.path().join("Documents/a.jpg");
        let bundle = temp.path().join("Bundle/logo.png");

        let result = reply(&provider, &format!("PERM {}", doc.display()));
        assert_eq!(result.message, "200 READ | WRITE (6)\n");

        let result = reply(&provider, &format!("PERM file://{}", bundle.display()));
        assert_eq!(result.message, "200 READ (2)\n");

        let result = reply(&provider, "PERM");
        assert_eq!(result.status, CommandStatus::Failure);
        assert!(result.message.starts_with("501"));

        let result = reply(&provider, "PERM not-a-uri");
        assert!(result.message.starts_with("501"));
    }

    #[test]
    fn test_genpath_and_mkdir() {
        let temp = TempDir::new().unwrap();
        let provider = provider(&temp);
        let target = temp.path().join("Documents/photos");

        let result = reply(&provider, &format!("MKDIR {}", target.display()));
        assert_eq!(result.status, CommandStatus::Success);
        assert!(target.is_dir());

        let result = reply(&provider, &format!("GENPATH {} jpg", target.display()));
        let generated = result.message.trim_start_matches("200 ").trim_end();
        assert!(generated.starts_with(&target.display().to_string()));
        assert!(generated.ends_with(".jpg"));

        let blocker = temp.path().join("file.txt");
        fs::write(&blocker, b"x").unwrap();
        let result = reply(&provider, &format!("MKDIR {}/sub", blocker.display()));
        assert_eq!(result.status, CommandStatus::Failure);
        assert!(result.message.starts_with("550"));
    }

    #[test]
    fn test_quit_and_unknown() {
        let temp = TempDir::new().unwrap();
        let provider = provider(&temp);

        let result = reply(&provider, "QUIT");
        assert_eq!(result.status, CommandStatus::CloseConnection);
        assert_eq!(result.message, "221 Goodbye\n");

        let result = reply(&provider, "FOO bar");
        assert_eq!(result.message, "502 Unknown command\n");
    }
}
