use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use uri_template_cli::cli_args::Args;
use uri_template_cli::error::{Error, Result};

fn execute() -> Result<()> {
    let args = Args::parse();
    let expanded = uri_template_cli::run(&args)?;

    let mut stdout = stdout().lock();
    if args.newline {
        writeln!(stdout, "{expanded}").map_err(Error::Stdio)?;
    } else {
        write!(stdout, "{expanded}").map_err(Error::Stdio)?;
    }

    stdout.flush().map_err(Error::Stdio)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
