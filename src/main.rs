//! actgen CLI - activity class scaffold generator
//!
//! Usage: actgen [OPTIONS] <NAMESPACE> <CLASS> [-resx <PATH>] [-in <ID>...] [-out <ID>...]

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use actgen::config::{Config, ConfigWarning};
use actgen::presentation::factory::{
    create_event_sink, create_generate_options, create_generate_use_case, resolve_output_dir,
};
use actgen::presentation::output::{create_renderer, OutputFormat, SummaryStream};
use actgen::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.tokens.is_empty() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let loaded = Config::resolve(cli.config.as_deref())?;
    for warning in &loaded.warnings {
        print_config_warning(warning);
    }
    let config = loaded.config;

    let verbosity = config.output.verbosity.raised_by(cli.verbose);
    let output_dir = resolve_output_dir(cli.output_dir.as_deref(), &config);
    let options = create_generate_options(cli.tokens, &config, output_dir, cli.dry_run);

    let use_case = create_generate_use_case(&config);
    let result = use_case
        .execute_with_events(&options, create_event_sink(cli.json, verbosity))
        .context("generation failed")?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stream = SummaryStream::for_run(result.dry_run);
    let renderer = create_renderer(format, stream.is_terminal(), verbosity);

    let mut source = io::stdout();
    let mut summary = stream.writer();
    renderer.render(&result, &mut source, summary.as_mut())?;
    source.flush()?;
    summary.flush()?;

    Ok(())
}

fn print_config_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => eprintln!(
            "warning: unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => eprintln!(
            "warning: unknown config key '{}' in {}",
            warning.key, location
        ),
    }
}
