use std::{error::Error, io};

use clap::Parser;
use int_list::Repl;
use log::{debug, LevelFilter};

/// Interactive singly linked list of integers.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Do not print the `CMD>> ` prompt before each line
    #[clap(long)]
    no_prompt: bool,
}

fn setup_logs() {
    let mut env = env_logger::Builder::new();
    env.filter_module("int_list", LevelFilter::Warn);
    if let Ok(content) = std::env::var("INT_LIST_LOG") {
        env.parse_filters(&content);
    }
    env.init();
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logs();

    let args = Args::parse();
    debug!("{:?}", args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(stdin.lock(), stdout.lock())
        .with_prompt(!args.no_prompt)
        .run()?;

    Ok(())
}
