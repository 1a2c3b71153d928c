//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Generation tokens use single-dash markers (`-in`, `-out`, `-resx`) that
//!   clap would read as short flags, so everything from the namespace onwards
//!   is captured verbatim as a trailing list and partitioned by the domain.
//! - Options must therefore come before the namespace.

use std::path::PathBuf;

use clap::Parser;

/// actgen - activity class scaffold generator
#[derive(Parser, Debug)]
#[command(name = "actgen")]
#[command(author, version, about, long_about = None)]
#[command(
    override_usage = "actgen [OPTIONS] <NAMESPACE> <CLASS> [-resx <PATH>] [-in <ID>...] [-out <ID>...]"
)]
#[command(after_help = "Example: actgen Pack Echo -resx Resources.resx -in Text -out Result")]
pub struct Cli {
    /// Config file (defaults to ./actgen.toml, then the user config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory of the generated file (defaults to the executable's directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Dry run - print the generated source, write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI (NDJSON event stream)
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Namespace, class name, then `-resx`, `-in` and `-out` groups
    #[arg(
        value_name = "TOKENS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}
