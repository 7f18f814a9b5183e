use std::io::{self, Write};

use clap::Args;

use crate::cli_util::print_encode_error;
use crate::Encoder;

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct EncodeArgs {
    /// Text to encode; `\n` stands for a newline
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: EncodeArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let Some(text) = args.text else {
        eprintln!("{program}: expected exactly one TEXT argument");
        usage_and_exit(program, 2);
    };

    tracing::debug!(chars = text.chars().count(), "encoding input");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match Encoder::new(&text).write_to(&mut out) {
        Ok(()) => 0,
        Err(err) => {
            print_encode_error(program, &text, &err);
            1
        }
    }
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} <TEXT>       # Print a Brainfuck program that outputs TEXT

Options:
  --help, -h       Show this help

Description:
  Every character of TEXT becomes one line of the program: the character's
  code point in '+' instructions, then '.>' to print it and move to a fresh cell.

Escapes:
  \n               A newline (code point 10). No other escape code is accepted.
  A trailing lone backslash is ignored.

Environment:
  BF_ECHO_LOG      Log filter for diagnostics on stderr (default "warn")

Examples:
  {0} 'Hello'
  {0} 'two\nlines' | bf-decode
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
