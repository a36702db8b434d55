//! Line-oriented terminal I/O.
//!
//! Generic over `BufRead` and `Write` so the menu can be driven from a
//! `Cursor` in tests and from locked stdin/stdout in the binary.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::ConsoleResult;

/// Prompt/print wrapper around an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, message: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `label` without a newline and reads one line.
    ///
    /// Returns `None` at end of input. The trailing line terminator is
    /// stripped; other whitespace is left for the caller. Invalid UTF-8 is
    /// replaced rather than reported as an I/O error.
    pub fn prompt(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            trace!(label, "End of input");
            return Ok(None);
        }

        // Bytes that are not UTF-8 become U+FFFD and fail validation later.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks a Y/N question. Anything not starting with `y`/`Y` is a no,
    /// and so is end of input.
    pub fn confirm(&mut self, label: &str) -> ConsoleResult<bool> {
        let answer = self.prompt(label)?;
        Ok(answer.as_deref().is_some_and(is_yes))
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().chars().next(), Some('y' | 'Y'))
}
