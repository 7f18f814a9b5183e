//! Text to Brainfuck encoder.
//!
//! Every logical character of the input becomes one line of the generated
//! program:
//!
//! ```text
//! <'+' repeated v times>.>
//! ```
//!
//! where `v` is the character's code point. Each character is built in a
//! fresh zeroed cell, printed, and the pointer moves on to the next cell;
//! no cell is reused or decremented.
//!
//! Escape handling:
//! - A backslash starts an escape sequence and emits nothing by itself.
//! - `\n` encodes a newline (code point 10).
//! - Any other escape code is an [`EncodeError::UnsupportedEscapeCode`].
//! - A trailing backslash with nothing after it is dropped.
//!
//! Quick start:
//!
//! ```
//! use bf_echo::Encoder;
//!
//! let program = Encoder::new("Hi").generate().expect("plain text encodes");
//! assert_eq!(program.lines().count(), 2);
//! ```

use std::io::{self, Write};

/// Marks the start of an escape sequence in the input.
const ESCAPE_MARKER: char = '\\';

/// Errors that can occur while encoding text into Brainfuck.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A backslash was followed by something other than `n`.
    #[error("unsupported escape code '\\{code}' at position {position}")]
    UnsupportedEscapeCode { code: char, position: usize },

    /// Writing the generated program failed.
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: io::Error,
    },
}

/// Encodes text into a Brainfuck program that prints it.
pub struct Encoder<'input> {
    input: &'input str,
}

impl<'input> Encoder<'input> {
    pub fn new(input: &'input str) -> Self {
        Self { input }
    }

    /// Resolve the input into the code points the program will print.
    ///
    /// This is the single pass over the input: escape sequences are
    /// resolved here and the first unsupported one aborts the pass.
    pub fn values(&self) -> Result<Vec<u32>, EncodeError> {
        let mut values = Vec::with_capacity(self.input.len());
        let mut escape = false;

        for (position, ch) in self.input.chars().enumerate() {
            if !escape && ch == ESCAPE_MARKER {
                escape = true;
                continue;
            }

            let value = if escape {
                escape = false;
                resolve_escape(ch, position)?
            } else {
                u32::from(ch)
            };

            tracing::trace!(position, ?ch, value, "encoded character");
            values.push(value);
        }

        if escape {
            tracing::debug!("dropping trailing escape marker");
        }

        Ok(values)
    }

    /// Generate the whole program as a `String`, one line per character.
    pub fn generate(&self) -> Result<String, EncodeError> {
        let values = self.values()?;

        let capacity = values.iter().map(|&v| line_len(v)).sum();
        let mut program = String::with_capacity(capacity);
        for value in &values {
            push_line(&mut program, *value);
        }

        tracing::debug!(
            lines = values.len(),
            bytes = program.len(),
            "generated Brainfuck program"
        );
        Ok(program)
    }

    /// Generate the program and write it to `out`.
    ///
    /// The program is built completely before anything is written, so an
    /// encoding error leaves `out` untouched.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), EncodeError> {
        let program = self.generate()?;
        out.write_all(program.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn resolve_escape(code: char, position: usize) -> Result<u32, EncodeError> {
    match code {
        'n' => Ok(u32::from('\n')),
        _ => Err(EncodeError::UnsupportedEscapeCode { code, position }),
    }
}

/// Length in bytes of the line emitted for `value`: the increments,
/// `.>` and the line break.
fn line_len(value: u32) -> usize {
    value as usize + 3
}

fn push_line(program: &mut String, value: u32) {
    program.extend(std::iter::repeat_n('+', value as usize));
    program.push_str(".>\n");
}
