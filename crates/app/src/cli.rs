//! Command-line surface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use postie_application::ConversionOptions;

/// Names that select a subcommand instead of the default convert path.
const SUBCOMMANDS: [&str; 3] = ["convert", "merge", "help"];

#[derive(Parser, Debug)]
#[command(name = "postie")]
#[command(
    version,
    about = "Convert HTTPie workspaces to Postman collections. Defaults to 'convert' if no subcommand is provided."
)]
pub struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// `postie <input> <output>`
#[derive(Parser, Debug)]
#[command(name = "postie")]
pub struct DefaultArgs {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one HTTPie export into a Postman collection
    Convert(ConvertArgs),
    /// Merge several HTTPie exports into one Postman collection
    Merge(MergeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// HTTPie workspace or collection export
    pub input: PathBuf,

    /// Postman collection to write
    pub output: PathBuf,

    /// Collection levels kept as sub-folders (0 flattens everything)
    #[arg(long, default_value_t = 0)]
    pub nesting_depth: usize,

    #[command(flatten)]
    pub variables: VariableArgs,
}

#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Postman collection to write
    pub output: PathBuf,

    /// HTTPie exports, merged in order
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub variables: VariableArgs,
}

#[derive(clap::Args, Debug)]
pub struct VariableArgs {
    /// Only emit variables that some request references
    #[arg(long)]
    pub referenced_only: bool,
}

impl ConvertArgs {
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions::default()
            .with_nesting_depth(self.nesting_depth)
            .with_environment_variables(!self.variables.referenced_only)
    }
}

impl MergeArgs {
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions::default().with_environment_variables(!self.variables.referenced_only)
    }
}

pub fn is_subcommand(first: Option<&str>) -> bool {
    first.is_some_and(|arg| SUBCOMMANDS.contains(&arg))
}
