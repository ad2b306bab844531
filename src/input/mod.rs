use std::io::{BufRead, StdinLock, Stdout, Write};
use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before answering: {prompt:?}")]
    Eof { prompt: String },
    #[error("could not convert string to float: {input:?}")]
    NotANumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Shows a prompt and hands back the line typed in answer.
pub trait Prompter {
    /// Returns the answer with its line terminator removed; other whitespace is kept.
    fn prompt(&mut self, message: &str) -> Result<String, InputError>;

    fn prompt_f64(&mut self, message: &str) -> Result<f64, InputError> {
        let line = self.prompt(message)?;
        parse_f64(&line)
    }
}

/// Prompter over any line reader and writer. Prompts carry no newline and
/// are flushed before the read blocks.
#[derive(Debug)]
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for Terminal<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String, InputError> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Eof {
                prompt: message.trim_end().to_string(),
            });
        }
        let line = strip_line_ending(line);
        tracing::debug!(prompt = message.trim_end(), answer = %line, "read answer");
        Ok(line)
    }
}

pub fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Surrounding whitespace is ignored, anything else that is not a float is rejected.
pub fn parse_f64(input: &str) -> Result<f64, InputError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|source| InputError::NotANumber {
            input: input.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
