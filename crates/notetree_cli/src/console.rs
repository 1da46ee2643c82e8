//! Line-oriented terminal prompts.
//!
//! Generic over reader/writer so command flows run against in-memory
//! buffers in tests.

use crate::error::CliError;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints `prompt` verbatim and reads one line without its terminator.
    pub fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use crate::error::CliError;
    use std::io::Cursor;

    #[test]
    fn ask_strips_line_terminator_only() {
        let mut console = Console::new(Cursor::new("  my note \r\n"), Vec::new());
        let answer = console.ask("name?\n").unwrap();
        assert_eq!(answer, "  my note ");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "name?\n");
    }

    #[test]
    fn ask_on_closed_input_fails() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert!(matches!(console.ask("x"), Err(CliError::InputClosed)));
    }
}
