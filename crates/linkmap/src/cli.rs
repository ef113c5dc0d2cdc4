//! CLI argument parsing and execution.
//!
//! Linkmap is a single-purpose tool, so the interface is flat: an
//! optional CSV path plus a renderer switch. When no path is given, a
//! native file-open dialog is shown; cancelling it ends the run with a
//! message rather than an error.
//!
//! # Example
//!
//! ```bash
//! linkmap export.csv
//! linkmap export.csv --renderer interactive --output relations.html
//! linkmap --json export.csv
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::app;
use crate::output::{self, OutputConfig, OutputMode};
use crate::picker;
use crate::render::RenderBackend;

/// Renderer selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererArg {
    /// Graphviz DOT document for static rendering
    Static,

    /// Interactive, pannable HTML page
    Interactive,
}

impl RendererArg {
    /// The name used in summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Interactive => "interactive",
        }
    }
}

impl From<RendererArg> for RenderBackend {
    fn from(arg: RendererArg) -> Self {
        match arg {
            RendererArg::Static => Self::Static,
            RendererArg::Interactive => Self::Interactive,
        }
    }
}

/// Linkmap - render Jira issue links as a mindmap
///
/// Reads a Jira CSV export (issue keys, summaries, and the typed link
/// columns) and writes a directed relationship graph, either as a
/// Graphviz DOT document or as an interactive HTML page.
#[derive(Parser, Debug)]
#[command(name = "linkmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV export; a file-open dialog is shown when omitted
    pub csv: Option<PathBuf>,

    /// Rendering backend
    #[arg(long, value_enum, default_value_t = RendererArg::Static)]
    pub renderer: RendererArg,

    /// Artifact path (defaults to mindmap.dot or mindmap.html)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output a JSON run summary for programmatic use
    #[arg(long)]
    pub json: bool,

    /// Suppress the run summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error when the arguments do not parse.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the run.
    ///
    /// # Errors
    ///
    /// Returns an error when the export cannot be loaded or the artifact
    /// cannot be written. A cancelled file dialog is not an error.
    pub fn execute(&self) -> Result<()> {
        let config = OutputConfig::from_env();
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(csv_path) = self.csv.clone().or_else(picker::pick_csv_file) else {
            println!("{}", picker::NO_FILE_MESSAGE);
            return Ok(());
        };

        let report = app::generate(&csv_path, self.renderer.into(), self.output.clone())?;

        if !self.quiet {
            output::print_report(&report, self.renderer.name(), output_mode, &config)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== CLI Parsing Tests ==========

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["linkmap"]).unwrap();
        assert!(cli.csv.is_none());
        assert_eq!(cli.renderer, RendererArg::Static);
        assert!(cli.output.is_none());
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_csv_path() {
        let cli = Cli::try_parse_from(["linkmap", "export.csv"]).unwrap();
        assert_eq!(cli.csv, Some(PathBuf::from("export.csv")));
    }

    #[test]
    fn test_parse_renderer_static() {
        let cli = Cli::try_parse_from(["linkmap", "--renderer", "static"]).unwrap();
        assert_eq!(cli.renderer, RendererArg::Static);
    }

    #[test]
    fn test_parse_renderer_interactive() {
        let cli = Cli::try_parse_from(["linkmap", "--renderer", "interactive"]).unwrap();
        assert_eq!(cli.renderer, RendererArg::Interactive);
    }

    #[test]
    fn test_parse_renderer_invalid() {
        let result = Cli::try_parse_from(["linkmap", "--renderer", "3d"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_output_path() {
        let cli =
            Cli::try_parse_from(["linkmap", "export.csv", "--output", "relations.dot"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("relations.dot")));
    }

    #[test]
    fn test_parse_json_flag() {
        let cli = Cli::try_parse_from(["linkmap", "--json", "export.csv"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_parse_quiet_short() {
        let cli = Cli::try_parse_from(["linkmap", "-q", "export.csv"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_renderer_arg_maps_to_backend() {
        assert_eq!(
            RenderBackend::from(RendererArg::Static),
            RenderBackend::Static
        );
        assert_eq!(
            RenderBackend::from(RendererArg::Interactive),
            RenderBackend::Interactive
        );
    }

    #[test]
    fn test_renderer_names() {
        assert_eq!(RendererArg::Static.name(), "static");
        assert_eq!(RendererArg::Interactive.name(), "interactive");
    }
}
