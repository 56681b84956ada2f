//! Validated line-based reads from a terminal or any buffered reader.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Error reading validated input.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The reader closed before a valid value arrived.
    #[display("Input ended before a valid value was entered")]
    Eof,

    /// Reading or prompting failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Prompts until a line parses as an integer inside `range`.
///
/// Malformed and out-of-range lines are discarded and the prompt repeats.
#[instrument(skip(reader, writer))]
pub fn read_in_range<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    range: RangeInclusive<usize>,
) -> Result<usize, InputError> {
    let mut line = String::new();
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }

        match line.trim().parse::<usize>() {
            Ok(value) if range.contains(&value) => return Ok(value),
            Ok(value) => debug!(value, "Value out of range, prompting again"),
            Err(e) => debug!(input = %line.trim(), error = %e, "Not a number, prompting again"),
        }
    }
}
