use bf_echo::commands::decode::{self, DecodeArgs};
use bf_echo::logging;
use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "bf-decode", version, disable_help_flag = true)]
struct Cli {
    #[command(flatten)]
    args: DecodeArgs,
}

fn main() {
    let program = env::args().next().unwrap_or_else(|| String::from("bf-decode"));

    logging::init();
    let cli = Cli::parse();

    std::process::exit(decode::run(&program, cli.args));
}
