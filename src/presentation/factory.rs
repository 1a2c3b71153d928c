//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{GenerateOptions, GenerateUseCase};
use crate::config::{Config, Verbosity};
use crate::domain::ports::GenerateEventSink;
use crate::domain::services::TemplateRenderer;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs, ResourceStoreRepository};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<ResourceStoreRepository, LocalFs>;

/// Create a generate use case with all dependencies wired up
///
/// The template layout comes from the `[template]` config section. The store
/// format follows the store path's extension.
pub fn create_generate_use_case(config: &Config) -> ConcreteGenerateUseCase {
    let resource_repo = ResourceStoreRepository::new();
    let file_system = LocalFs::new();
    let renderer = TemplateRenderer::new(config.template.render_style());

    GenerateUseCase::new(resource_repo, file_system, renderer)
}

/// Build generate options from the raw tokens and the effective config
///
/// `output_dir` is the already-resolved directory; the store path from the
/// config only applies when the tokens carry no `-resx`.
pub fn create_generate_options(
    tokens: Vec<String>,
    config: &Config,
    output_dir: PathBuf,
    dry_run: bool,
) -> GenerateOptions {
    GenerateOptions::new(tokens)
        .with_resource_path(config.resources.path.clone())
        .with_default_value(config.resources.default_value.clone())
        .with_output_dir(output_dir)
        .with_extension(config.output.extension.clone())
        .with_dry_run(dry_run)
}

/// Pick the event sink for the requested output mode
pub fn create_event_sink(json: bool, verbosity: Verbosity) -> Arc<dyn GenerateEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(verbosity))
    }
}

/// Directory of the generated file
///
/// Precedence: `--output-dir`, then config/env, then the directory holding
/// the running executable, then the working directory.
pub fn resolve_output_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.output.dir.clone())
        .or_else(executable_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
