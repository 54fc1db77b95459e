use anyhow::Context;
use clap::Parser;
use textpath::cli::{self, expand_arg_files, Args};
use textpath::init_logging;

fn main() -> anyhow::Result<()> {
    let argv = expand_arg_files(std::env::args_os()).context("Failed to read argument file")?;
    let args = Args::parse_from(argv);

    // Initialize logging
    init_logging(args.verbose, args.log_json)?;

    cli::run(&args)
}
