use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the nanots binary.
#[derive(Parser, Debug)]
#[command(name = "nanots", version, about = "A didactic compiler front end for the nanots language")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Emit diagnostics as a JSON array instead of `path:line:col: message` lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise the tracing filter level. Repeat for more verbosity.
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan, parse, bind, and type-check a source file.
    Check {
        /// Path to a source file, or `-` to read from stdin.
        input: PathBuf,
    },
    /// Check a source file, then strip type annotations and emit plain source.
    Build {
        /// Path to a source file, or `-` to read from stdin.
        input: PathBuf,

        /// Where to write the emitted source. Defaults to stdout.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Emit even if diagnostics were recorded.
        #[arg(long = "emitOnError", alias = "emit-on-error")]
        emit_on_error: bool,
    },
}
