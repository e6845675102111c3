//! Report rendering -- text vs JSON switching for subcommand results
//!
//! Every subcommand produces one report value (`RunReport`,
//! `RuleListReport`). The [`Reporter`] decides how that value reaches
//! the user: the report's own text layout, or pretty-printed JSON with
//! the same fields.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Renders subcommand reports to stdout in the selected format.
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a report to stdout.
    pub fn render<T: TextRender + Serialize>(&self, report: &T) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render_to(report, &mut handle)
    }

    /// Render a report into an arbitrary sink.
    ///
    /// Text format delegates to the report's [`TextRender::write_text`];
    /// JSON format serialises the same fields via `serde_json`.
    pub fn render_to<T: TextRender + Serialize>(
        &self,
        report: &T,
        w: &mut dyn Write,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => report.write_text(w)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, report)?;
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

/// Human-readable layout of a subcommand report.
///
/// Implemented by every report type alongside `serde::Serialize`, so
/// each report owns both of its representations.
pub trait TextRender {
    fn write_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}
