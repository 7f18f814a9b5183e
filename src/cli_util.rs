use std::io::{self, IsTerminal, Write};

use nu_ansi_term::{Color, Style};

use crate::{DecodeError, EncodeError};

/// Prefix `msg` with `program:`; bold red when stderr is a TTY so piped
/// stderr stays free of escape codes.
fn prefix_program(program: &str, msg: &str) -> String {
    let head = format!("{program}:");
    if io::stderr().is_terminal() {
        let style = Style::new().bold().fg(Color::Red);
        format!("{} {msg}", style.paint(head))
    } else {
        format!("{head} {msg}")
    }
}

/// Report an encoding failure, pointing at the offending escape code.
pub fn print_encode_error(program: &str, input: &str, err: &EncodeError) {
    match err {
        EncodeError::UnsupportedEscapeCode { code, position } => {
            let msg = prefix_program(
                program,
                &format!("Encode error: unsupported escape code '\\{code}' (only '\\n' is recognized)"),
            );
            print_error_with_context(&msg, input, *position);
        }
        EncodeError::IoError { source } => {
            eprintln!("{}", prefix_program(program, &format!("I/O error: {source}")));
            let _ = io::stderr().flush();
        }
    }
}

/// Report a decoding failure with a caret under the instruction that failed.
pub fn print_decode_error(program: &str, code: &str, err: &DecodeError) {
    let msg = match err {
        DecodeError::PointerOutOfBounds { pointer, .. } => {
            format!("Decode error: pointer out of bounds (ptr={pointer})")
        }
        DecodeError::CellOverflow { .. } => "Decode error: cell overflow".to_string(),
        DecodeError::CellUnderflow { .. } => "Decode error: cell underflow".to_string(),
        DecodeError::InvalidCodePoint { value, .. } => {
            format!("Decode error: invalid code point {value:#x}")
        }
        DecodeError::UnsupportedInstruction { op, .. } => {
            format!("Decode error: unsupported instruction '{op}'")
        }
    };
    print_error_with_context(&prefix_program(program, &msg), code, err.position());
}

/// Print a concise error with the character position and a caret context
/// window, slicing by char indices so multi-byte input stays intact.
pub fn print_error_with_context(prefix: &str, source: &str, pos: usize) {
    let stderr = io::stderr();
    let mut err = stderr.lock();
    let _ = err.write_all(render_context(prefix, source, pos).as_bytes());
    let _ = err.flush();
}

fn render_context(prefix: &str, source: &str, pos: usize) -> String {
    const WINDOW_CHARS: usize = 32;

    let total_chars = source.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let start_byte = char_to_byte_index(source, start_char);
    let end_byte = char_to_byte_index(source, end_char);
    // Line breaks would split the caret from its column.
    let slice: String = source[start_byte..end_byte]
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let caret_offset_chars = pos.saturating_sub(start_char);
    let underline = format!("{}^", " ".repeat(caret_offset_chars));

    format!("{prefix} at position {pos}\n  {slice}\n  {underline}\n")
}

/// Convert a char index into a byte index in the given UTF-8 string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_sits_under_position() {
        let out = render_context("bf-echo: oops", "ab\\tcd", 3);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "bf-echo: oops at position 3");
        assert_eq!(lines[1], "  ab\\tcd");
        assert_eq!(lines[2], "     ^");
    }

    #[test]
    fn window_is_trimmed_on_long_input() {
        let source = "x".repeat(100);
        let out = render_context("p", &source, 50);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1].trim_start().len(), 65);
        assert_eq!(lines[2].trim_start(), "^");
        assert_eq!(lines[2].len(), 2 + 32 + 1);
    }

    #[test]
    fn multibyte_chars_count_as_one_column() {
        let out = render_context("p", "é☃\\q", 3);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "  é☃\\q");
        assert_eq!(lines[2], "     ^");
    }

    #[test]
    fn line_breaks_are_flattened() {
        let out = render_context("p", "+.>\n+<", 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  +.> +<");
    }

    #[test]
    fn char_to_byte_index_past_end_is_len() {
        assert_eq!(char_to_byte_index("é", 0), 0);
        assert_eq!(char_to_byte_index("é", 1), 2);
        assert_eq!(char_to_byte_index("é", 5), 2);
    }
}
