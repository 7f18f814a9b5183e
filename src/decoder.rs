//! Decoder for encoder-shaped Brainfuck programs.
//!
//! Replays a program that only moves the pointer, adjusts cells and prints,
//! and returns the text it would print. This is the inverse of
//! [`Encoder`](crate::Encoder), not a general interpreter: input and loops
//! are rejected.
//!
//! Behaviors:
//! - The tape starts with a single zeroed cell and grows to the right on demand.
//! - Cells hold full code points (`u32`); going below zero or past `u32::MAX`
//!   is an error rather than a wrap.
//! - `.` appends the current cell as a `char`.
//! - Characters outside `><+-.,[]` are comments and are ignored.

use crate::program::{Program, Token};

/// Errors that can occur while decoding a Brainfuck program.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The pointer attempted to move left of cell 0.
    #[error("pointer out of bounds at position {position} (ptr={pointer})")]
    PointerOutOfBounds { position: usize, pointer: usize },

    /// A cell was incremented past the largest representable value.
    #[error("cell overflow at position {position}")]
    CellOverflow { position: usize },

    /// A cell was decremented below zero.
    #[error("cell underflow at position {position}")]
    CellUnderflow { position: usize },

    /// `.` was executed on a cell that does not hold a Unicode scalar value.
    #[error("invalid code point {value:#x} at position {position}")]
    InvalidCodePoint { value: u32, position: usize },

    /// Input and loop instructions never appear in encoder output.
    #[error("unsupported instruction '{op}' at position {position}")]
    UnsupportedInstruction { op: char, position: usize },
}

impl DecodeError {
    /// Character index in the source where decoding stopped.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::PointerOutOfBounds { position, .. }
            | DecodeError::CellOverflow { position }
            | DecodeError::CellUnderflow { position }
            | DecodeError::InvalidCodePoint { position, .. }
            | DecodeError::UnsupportedInstruction { position, .. } => *position,
        }
    }
}

pub struct Decoder {
    program: Program,
    tape: Vec<u32>,
    pointer: usize,
}

impl Decoder {
    pub fn new(code: &str) -> Self {
        Self {
            program: Program::parse(code),
            tape: vec![0],
            pointer: 0,
        }
    }

    /// Replay the program on a fresh tape and collect everything it prints.
    pub fn decode(&mut self) -> Result<String, DecodeError> {
        self.tape.clear();
        self.tape.push(0);
        self.pointer = 0;
        self.run()
    }

    /// Replay the program from the current tape and pointer.
    fn run(&mut self) -> Result<String, DecodeError> {
        let Decoder { program, tape, pointer } = self;
        let mut output = String::new();

        for instruction in &program.instructions {
            let position = instruction.position;
            tracing::trace!(position, token = %instruction.token, ptr = *pointer, "step");

            match instruction.token {
                Token::Increment(n) => {
                    let cell = tape[*pointer];
                    tape[*pointer] = u32::try_from(n)
                        .ok()
                        .and_then(|n| cell.checked_add(n))
                        .ok_or(DecodeError::CellOverflow { position })?;
                }
                Token::Decrement(n) => {
                    let cell = tape[*pointer];
                    tape[*pointer] = u32::try_from(n)
                        .ok()
                        .and_then(|n| cell.checked_sub(n))
                        .ok_or(DecodeError::CellUnderflow { position })?;
                }
                Token::Right(n) => {
                    *pointer += n;
                    if *pointer >= tape.len() {
                        tape.resize(*pointer + 1, 0);
                    }
                }
                Token::Left(n) => {
                    *pointer = pointer.checked_sub(n).ok_or(DecodeError::PointerOutOfBounds {
                        position,
                        pointer: *pointer,
                    })?;
                }
                Token::Output => {
                    let value = tape[*pointer];
                    let ch = char::from_u32(value)
                        .ok_or(DecodeError::InvalidCodePoint { value, position })?;
                    output.push(ch);
                }
                Token::Input | Token::LoopStart | Token::LoopEnd => {
                    return Err(DecodeError::UnsupportedInstruction {
                        op: instruction.token.op(),
                        position,
                    });
                }
            }
        }

        tracing::debug!(
            instructions = program.len(),
            cells = tape.len(),
            chars = output.chars().count(),
            "decoded Brainfuck program"
        );
        Ok(output)
    }
}
