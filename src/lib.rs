//! Turn text into a Brainfuck program that prints it.
//!
//! The crate has two halves:
//! - [`Encoder`] maps every character of the input to one line of `+`
//!   instructions followed by `.>`, so each character is printed from its own
//!   fresh cell. `\n` in the input stands for a newline.
//! - [`Decoder`] replays programs of that shape and returns the text they
//!   print, which makes the encoding easy to verify.
//!
//! ```
//! use bf_echo::{Decoder, Encoder};
//!
//! let program = Encoder::new("hi\\n").generate().unwrap();
//! assert_eq!(program.lines().count(), 3);
//! assert_eq!(Decoder::new(&program).decode().unwrap(), "hi\n");
//! ```

pub mod cli_util;
pub mod commands;
pub mod decoder;
pub mod encoder;
pub mod logging;
pub mod program;

pub use decoder::{DecodeError, Decoder};
pub use encoder::{EncodeError, Encoder};
pub use program::{Program, Token};
