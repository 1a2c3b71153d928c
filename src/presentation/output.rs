//! Output Rendering
//!
//! Provides a unified interface for rendering generate results to different
//! formats. Renderers write to caller-supplied writers so the binary can keep
//! generated source (stdout) apart from the summary (stderr in dry-run mode).

use std::io::{self, Write};

use is_terminal::IsTerminal;

use crate::application::GenerateResult;
use crate::config::Verbosity;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Stream the text summary is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStream {
    Stdout,
    Stderr,
}

impl SummaryStream {
    /// Dry runs keep stdout for the generated source only
    pub fn for_run(dry_run: bool) -> Self {
        if dry_run {
            SummaryStream::Stderr
        } else {
            SummaryStream::Stdout
        }
    }

    /// Whether this stream is attached to a terminal (unicode icons)
    pub fn is_terminal(self) -> bool {
        match self {
            SummaryStream::Stdout => io::stdout().is_terminal(),
            SummaryStream::Stderr => io::stderr().is_terminal(),
        }
    }

    pub fn writer(self) -> Box<dyn Write> {
        match self {
            SummaryStream::Stdout => Box::new(io::stdout()),
            SummaryStream::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    write: &'static str,
    skip: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            write: "→",
            skip: "○",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            write: "->",
            skip: "[ ]",
            warn: "[!]",
        }
    }
}

/// Trait for rendering generate results
pub trait GenerateResultRenderer {
    /// Render `result`; `source` receives generated text, `summary` the report
    fn render(
        &self,
        result: &GenerateResult,
        source: &mut dyn Write,
        summary: &mut dyn Write,
    ) -> io::Result<()>;
}

/// Text renderer for generate results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbosity: Verbosity,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbosity: Verbosity::Normal,
        }
    }
}

impl GenerateResultRenderer for TextRenderer {
    fn render(
        &self,
        result: &GenerateResult,
        source: &mut dyn Write,
        summary: &mut dyn Write,
    ) -> io::Result<()> {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };

        if result.dry_run {
            write!(source, "{}", result.content)?;
        }

        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if result.dry_run {
            writeln!(
                summary,
                "{} Dry run: {} (nothing written)",
                icons.skip, result.class_name
            )?;
        } else {
            writeln!(summary, "{} Generated {}", icons.check, result.class_name)?;
        }

        writeln!(summary)?;
        writeln!(
            summary,
            "  {} {}",
            icons.write,
            result.output_path.display()
        )?;

        match &result.resource_path {
            Some(path) => writeln!(
                summary,
                "  Resources: {} ({} added, {} found)",
                path.display(),
                result.added_count(),
                result.found_count()
            )?,
            None => writeln!(summary, "  Resources: none")?,
        }

        if !result.ignored_tokens.is_empty() {
            writeln!(
                summary,
                "  {} Ignored tokens: {}",
                icons.warn,
                result.ignored_tokens.join(" ")
            )?;
        }

        if self.verbosity >= Verbosity::Verbose {
            for key in result.added() {
                writeln!(summary, "    + {}", key)?;
            }
        }

        Ok(())
    }
}

/// JSON renderer for generate results
///
/// Emits one `summary` line that follows the NDJSON event stream.
pub struct JsonRenderer;

impl GenerateResultRenderer for JsonRenderer {
    fn render(
        &self,
        result: &GenerateResult,
        source: &mut dyn Write,
        _summary: &mut dyn Write,
    ) -> io::Result<()> {
        let json = summary_json(result);
        writeln!(source, "{}", json)
    }
}

/// JSON object describing a finished run
pub fn summary_json(result: &GenerateResult) -> serde_json::Value {
    serde_json::json!({
        "event": "summary",
        "namespace": result.namespace_name,
        "class": result.class_name,
        "output": result.output_path.display().to_string(),
        "resources": result.resource_path.as_ref().map(|p| p.display().to_string()),
        "added": result.added().collect::<Vec<_>>(),
        "found": result.found().collect::<Vec<_>>(),
        "ignored": result.ignored_tokens,
        "dry_run": result.dry_run,
        "content": result.dry_run.then(|| result.content.clone()),
    })
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    unicode: bool,
    verbosity: Verbosity,
) -> Box<dyn GenerateResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbosity }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
