//! Postie - Main Entry Point
//!
//! Converts HTTPie workspace exports into Postman v2.1.0 collections.

use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod exit_code;
mod logging;

use cli::{Args, Commands, DefaultArgs};
use exit_code::ExitCode;

fn main() -> std::process::ExitCode {
    match run() {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(&e).into()
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().collect();
    if argv.len() == 1 {
        eprintln!("{}", Args::command().render_help());
        return Ok(ExitCode::GeneralError);
    }

    if cli::is_subcommand(argv.get(1).map(String::as_str)) {
        return match Args::try_parse() {
            Ok(args) => dispatch(args),
            Err(e) => clap_exit(&e),
        };
    }

    match Args::try_parse() {
        Ok(args) if args.command.is_some() => dispatch(args),
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            clap_exit(&e)
        }
        _ => match DefaultArgs::try_parse() {
            Ok(args) => {
                logging::init(args.verbose);
                commands::execute_convert(&args.convert)?;
                Ok(ExitCode::Success)
            }
            Err(e) => clap_exit(&e),
        },
    }
}

fn dispatch(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    logging::init(args.verbose);
    match args.command {
        Some(Commands::Convert(convert)) => commands::execute_convert(&convert)?,
        Some(Commands::Merge(merge)) => commands::execute_merge(&merge)?,
        None => {
            eprintln!("{}", Args::command().render_help());
            return Ok(ExitCode::GeneralError);
        }
    }
    Ok(ExitCode::Success)
}

/// Prints a clap error or help text; usage errors exit non-zero.
fn clap_exit(error: &clap::Error) -> Result<ExitCode, Box<dyn std::error::Error>> {
    error.print()?;
    Ok(if error.use_stderr() {
        ExitCode::GeneralError
    } else {
        ExitCode::Success
    })
}
