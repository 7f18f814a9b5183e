use std::fs;
use std::io::{self, Read, Write};

use clap::Args;

use crate::cli_util::print_decode_error;
use crate::Decoder;

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct DecodeArgs {
    /// Read Brainfuck code from PATH instead of positional "<code>"
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Concatenated Brainfuck code parts. If omitted, reads from STDIN.
    #[arg(value_name = "code", trailing_var_arg = true, allow_hyphen_values = true)]
    pub code: Vec<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: DecodeArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let DecodeArgs { file, code, .. } = args;

    if file.is_some() && !code.is_empty() {
        eprintln!("{program}: cannot use positional code together with --file");
        usage_and_exit(program, 2);
    }

    let source = match file {
        Some(path) => match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{program}: failed to read code file as UTF-8: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
        },
        None if !code.is_empty() => code.join(""),
        None => {
            let mut s = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut s) {
                eprintln!("{program}: failed reading UTF-8 from stdin: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
            s
        }
    };

    match Decoder::new(&source).decode() {
        Ok(text) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
                eprintln!("{program}: failed writing to stdout: {e}");
                return 1;
            }
            0
        }
        Err(err) => {
            print_decode_error(program, &source, &err);
            1
        }
    }
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} "<code>"           # Decode Brainfuck code (args are concatenated)
  {0} --file <PATH>      # Decode Brainfuck code loaded from file
  {0}                    # Decode Brainfuck code read from STDIN

Options:
  --file, -f <PATH>  Read Brainfuck code from PATH instead of positional "<code>"
  --help, -h         Show this help

Description:
  Replays a program made of '+', '-', '>', '<' and '.' on a fresh zeroed tape
  and prints the text it outputs. This recovers the text from bf-echo output.

Notes:
- Loops and input (',', '[', ']') are rejected; this is not a general interpreter.
- Any other characters are treated as comments.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
