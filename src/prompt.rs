use std::io::{self, BufRead, Write};

use num_bigint::{BigInt, ParseBigIntError};

use crate::status::{Category, StatusMessage, Style};

pub const DEFAULT_PROMPT: &str = "Please enter a number";

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("reached end of input")]
    Eof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum NotAnInteger {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error(transparent)]
    Parse(#[from] ParseBigIntError),
}

/// Parses a base-10 integer of any size. Surrounding whitespace and one
/// leading sign are allowed, as are single underscores between digits
/// (`1_000`).
pub fn parse_integer(entry: &str) -> Result<BigInt, NotAnInteger> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(NotAnInteger::Empty);
    }

    let digits = entry.strip_prefix(['+', '-']).unwrap_or(entry);
    let grouped_ok = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.bytes().all(|b| b.is_ascii_digit() || b == b'_');
    if !grouped_ok {
        return Err(NotAnInteger::InvalidDigit);
    }

    let magnitude: BigInt = digits.replace('_', "").parse()?;
    Ok(if entry.starts_with('-') {
        -magnitude
    } else {
        magnitude
    })
}

/// Reads integers line by line, echoing each one back and warning about
/// anything that isn't a number.
///
/// Without a sentinel or a limit this never returns `Ok`; the caller is
/// expected to be stopped by end of input or an interrupt.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    prompt: String,
    sentinel: Option<String>,
    limit: Option<usize>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
            sentinel: None,
            limit: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Stop cleanly when a line equal to `sentinel` is read.
    pub fn until(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = Some(sentinel.into());
        self
    }

    /// Stop cleanly after `reads` lines.
    pub fn limit(mut self, reads: usize) -> Self {
        self.limit = Some(reads);
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the loop, returning how many lines were handled.
    pub fn run(&mut self) -> Result<usize, PromptError> {
        let mut handled = 0;
        let mut line = String::new();

        loop {
            if self.limit.is_some_and(|limit| handled >= limit) {
                return Ok(handled);
            }

            writeln!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::Eof);
            }

            let entry = line.trim_end_matches(['\r', '\n']);
            if self.sentinel.as_deref() == Some(entry) {
                return Ok(handled);
            }

            self.answer(entry)?;
            handled += 1;
        }
    }

    fn answer(&mut self, entry: &str) -> io::Result<()> {
        match parse_integer(entry) {
            Ok(n) => writeln!(self.output, "{n}"),
            Err(e) => StatusMessage::new(e, Category::Warn, Style::Line, true)
                .write_to(&mut self.output),
        }
    }
}
