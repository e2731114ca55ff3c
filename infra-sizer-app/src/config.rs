use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use infra_sizer::ExportFormat;
use thiserror::Error;

/// Which frontend drives the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrontendKind {
    /// Line-by-line prompts.
    Dialoguer,
    /// Full-screen terminal UI.
    Ratatui,
    /// Answers read from a file, one per line.
    Script,
}

#[derive(Debug, Parser)]
#[command(name = "infra-sizer")]
#[command(version)]
#[command(about = "Answer ten questions, get an infrastructure sizing report", long_about = None)]
pub struct Cli {
    /// Frontend to use. Defaults to `script` when --script is given, else `dialoguer`.
    #[arg(long, value_enum)]
    pub frontend: Option<FrontendKind>,

    /// File with one answer per line.
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Document format (pdf, latex, html).
    #[arg(long, default_value_t = ExportFormat::Pdf)]
    pub format: ExportFormat,

    /// Where to write the report. Defaults to Infra_Sizer_Report.<ext>.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Disable colors.
    #[arg(long)]
    pub plain: bool,

    /// Export the report without asking.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--frontend script needs --script <FILE>")]
    MissingScript,

    #[error("--script only works with --frontend script")]
    UnexpectedScript,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub frontend: FrontendKind,
    pub script: Option<PathBuf>,
    pub format: ExportFormat,
    pub output: PathBuf,
    pub plain: bool,
    pub auto_export: bool,
    pub verbosity: u8,
}

impl TryFrom<Cli> for AppConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let frontend = match (cli.frontend, &cli.script) {
            (Some(FrontendKind::Script), None) => return Err(ConfigError::MissingScript),
            (Some(FrontendKind::Script), Some(_)) | (None, Some(_)) => FrontendKind::Script,
            (Some(_), Some(_)) => return Err(ConfigError::UnexpectedScript),
            (Some(kind), None) => kind,
            (None, None) => FrontendKind::Dialoguer,
        };

        Ok(Self {
            frontend,
            script: cli.script,
            format: cli.format,
            output: cli
                .output
                .unwrap_or_else(|| cli.format.default_file_name()),
            plain: cli.plain,
            auto_export: cli.yes,
            verbosity: cli.verbose,
        })
    }
}

impl AppConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
