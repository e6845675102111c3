//! CLI-specific error types and exit code mapping

use logsynth_core::error::{LogSynthError, PipelineError};

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to standard Unix exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be opened or read.
    #[error("{0}")]
    Input(String),

    /// Pipeline domain error.
    #[error("pipeline error: {0}")]
    Pipeline(String),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                 |
    /// |------|-------------------------|
    /// | 0    | Success                 |
    /// | 1    | General / command error |
    /// | 2    | Configuration error     |
    /// | 10   | I/O error (input/output files, stdout) |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) | Self::Input(_) => 10,
            Self::JsonSerialize(_) | Self::Command(_) | Self::Pipeline(_) => 1,
        }
    }
}

impl From<LogSynthError> for CliError {
    fn from(e: LogSynthError) -> Self {
        match e {
            LogSynthError::Config(err) => Self::Config(err.to_string()),
            LogSynthError::Io(err) => Self::Io(err),
            LogSynthError::Pipeline(err) => match err {
                PipelineError::Input { .. } => Self::Input(err.to_string()),
                other => Self::Pipeline(other.to_string()),
            },
        }
    }
}

impl From<logsynth_pipeline::SynthPipelineError> for CliError {
    fn from(e: logsynth_pipeline::SynthPipelineError) -> Self {
        use logsynth_pipeline::SynthPipelineError;
        match e {
            SynthPipelineError::Io(err) => Self::Io(err),
            input @ SynthPipelineError::Input { .. } => Self::Input(input.to_string()),
            other => Self::Pipeline(other.to_string()),
        }
    }
}
