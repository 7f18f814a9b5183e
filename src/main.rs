use bf_echo::commands::encode::{self, EncodeArgs};
use bf_echo::logging;
use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "bf-echo", version, disable_help_flag = true)]
struct Cli {
    #[command(flatten)]
    args: EncodeArgs,
}

fn main() {
    let program = env::args().next().unwrap_or_else(|| String::from("bf-echo"));

    logging::init();
    let cli = Cli::parse();

    std::process::exit(encode::run(&program, cli.args));
}
