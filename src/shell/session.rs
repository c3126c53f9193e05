use log::{info, warn};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::ShellError;
use crate::error::handlers::{error_reply, handle_error};
use crate::provider::FileSystemInterface;
use crate::shell::handler::{CommandStatus, handle_command};
use crate::shell::parser::parse_command;

pub const MAX_COMMAND_LENGTH: usize = 4096;

// Longest read for one line: a full command plus its `\r\n` terminator
const MAX_LINE_BYTES: u64 = MAX_COMMAND_LENGTH as u64 + 2;

enum LineRead {
    Eof,
    TooLong(usize),
    Line,
}

/// Serves query commands line by line until EOF or `QUIT`.
///
/// - Reads one command per line from `reader`, at most `MAX_COMMAND_LENGTH` bytes.
/// - Decodes lines lossily, so invalid UTF-8 never ends the session.
/// - Dispatches commands using `handle_command`.
/// - Writes exactly one reply line per command to `writer`.
pub async fn run_session<R, W>(
    provider: &dyn FileSystemInterface,
    mut reader: R,
    mut writer: W,
) -> Result<(), ShellError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = Vec::new();

    loop {
        match next_line(&mut reader, &mut buffer).await? {
            LineRead::Eof => {
                info!("Input closed, ending session");
                break;
            }
            LineRead::TooLong(len) => {
                let err = ShellError::CommandTooLong(len);
                handle_error(&err);
                writer.write_all(error_reply(&err).as_bytes()).await?;
                writer.flush().await?;
                continue;
            }
            LineRead::Line => {}
        }

        let line = String::from_utf8_lossy(&buffer);
        if line.trim().is_empty() {
            continue;
        }

        let command = parse_command(&line);
        info!("Received: {:?}", command);

        let result = handle_command(provider, &command);
        writer.write_all(result.message.as_bytes()).await?;
        writer.flush().await?;

        match result.status {
            CommandStatus::CloseConnection => {
                info!("Session closed by QUIT");
                break;
            }
            CommandStatus::Failure => warn!("Command failed: {}", result.message.trim_end()),
            CommandStatus::Success => {}
        }
    }

    Ok(())
}

/// Read one line into `buffer` without its line ending.
///
/// Oversized lines are drained in place rather than buffered.
async fn next_line<R>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    buffer.clear();
    let read = (&mut *reader)
        .take(MAX_LINE_BYTES)
        .read_until(b'\n', buffer)
        .await?;
    if read == 0 {
        return Ok(LineRead::Eof);
    }

    if !buffer.ends_with(b"\n") && read as u64 == MAX_LINE_BYTES {
        let mut discarded = read;
        loop {
            let (used, done) = {
                let available = reader.fill_buf().await?;
                if available.is_empty() {
                    break;
                }
                match available.iter().position(|&b| b == b'\n') {
                    Some(pos) => (pos + 1, true),
                    None => (available.len(), false),
                }
            };
            reader.consume(used);
            discarded += used;
            if done {
                break;
            }
        }
        buffer.clear();
        return Ok(LineRead::TooLong(discarded));
    }

    if buffer.ends_with(b"\n") {
        buffer.pop();
        if buffer.ends_with(b"\r") {
            buffer.pop();
        }
    }

    if buffer.len() > MAX_COMMAND_LENGTH {
        return Ok(LineRead::TooLong(buffer.len()));
    }
    Ok(LineRead::Line)
}
