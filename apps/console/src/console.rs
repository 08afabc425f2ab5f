//! # Line Console
//!
//! Prompts and typed line reads over any async reader/writer pair.
//! The binary wires it to stdin/stdout; tests wire it to byte buffers.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::ConsoleError;
use gamestore_core::validation::{parse_age_limit, parse_id};
use gamestore_core::{Money, ValidationError};

/// Line-oriented console.
///
/// ## Usage
/// ```rust,ignore
/// let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
/// let game_id = console.prompt_id("Enter Game ID: ", "game id").await?;
/// ```
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes text as-is and flushes.
    pub async fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Writes text followed by a newline.
    pub async fn println(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Reads one line without its line ending.
    ///
    /// ## Errors
    /// * `ConsoleError::InputClosed` - End of input
    /// * `ConsoleError::Validation` - The line is not valid UTF-8; the
    ///   line is consumed and the next read starts after it
    pub async fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        String::from_utf8(buf).map_err(|_| {
            ConsoleError::Validation(ValidationError::invalid_format(
                "input",
                "must be valid UTF-8 text",
            ))
        })
    }

    /// Prints `label` and reads the answer.
    pub async fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        self.print(label).await?;
        self.read_line().await
    }

    /// Prompts for a whole-number id; `field` names it in the error.
    pub async fn prompt_id(&mut self, label: &str, field: &str) -> Result<i64, ConsoleError> {
        let raw = self.prompt(label).await?;
        Ok(parse_id(field, &raw)?)
    }

    /// Prompts for a price such as `19.99`.
    pub async fn prompt_price(&mut self, label: &str) -> Result<Money, ConsoleError> {
        let raw = self.prompt(label).await?;
        Ok(raw.parse::<Money>()?)
    }

    /// Prompts for a minimum age rating.
    pub async fn prompt_age_limit(&mut self, label: &str) -> Result<i32, ConsoleError> {
        let raw = self.prompt(label).await?;
        Ok(parse_age_limit(&raw)?)
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
