//! `logsynth run` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use logsynth_core::config::LogSynthConfig;
use logsynth_pipeline::{PipelineConfig, SynthPipeline};

use crate::cli::RunArgs;
use crate::error::CliError;
use crate::output::{Reporter, TextRender};

/// Execute the `run` command.
pub fn execute(
    args: RunArgs,
    config: &LogSynthConfig,
    reporter: &Reporter,
) -> Result<(), CliError> {
    let pipeline_config = PipelineConfig::from_core(&config.pipeline);
    let pipeline = SynthPipeline::new(pipeline_config)?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "starting one-shot pipeline run"
    );

    let summary = pipeline.run(&args.input, &args.output)?;

    let report = RunReport {
        processed: summary.processed,
        matched: summary.matched,
        output: args.output.display().to_string(),
    };
    reporter.render(&report)?;

    Ok(())
}

/// Result of one pipeline run, rendered to the user.
#[derive(Serialize)]
pub struct RunReport {
    pub processed: u64,
    pub matched: u64,
    pub output: String,
}

impl TextRender for RunReport {
    fn write_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Processed: {} logs", self.processed)?;
        writeln!(
            w,
            "Matched:   {} attack events",
            if self.matched > 0 {
                self.matched.to_string().red().bold()
            } else {
                self.matched.to_string().normal()
            }
        )?;
        writeln!(w, "Output ->  {}", self.output)?;
        Ok(())
    }
}
