//! Command-line host for the infra-sizer questionnaire.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use infra_sizer::{
    DocumentExporter, ExportDecision, ExportFormat, Frontend, InlineReport, Questionnaire,
    ScriptedFrontend, SessionOutcome, SizerError, run_session,
};
use infra_sizer_dialoguer_wizard::{DialoguerWizard, format_report};
use infra_sizer_html_document::HtmlExporter;
use infra_sizer_latex_document::LatexExporter;
use infra_sizer_ratatui_wizard::{RatatuiWizard, Theme};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Cli, FrontendKind};

/// Wraps a frontend so the report is printed and exported without asking.
struct AssumeYes<F>(F);

impl<F: Frontend> Frontend for AssumeYes<F> {
    type Error = F::Error;

    fn collect(&self, session: &mut Questionnaire) -> Result<(), Self::Error> {
        self.0.collect(session)
    }

    fn present(&self, report: &InlineReport) -> Result<ExportDecision, Self::Error> {
        println!("{}", format_report(report));
        Ok(ExportDecision::Export)
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exporter(format: ExportFormat) -> Box<dyn DocumentExporter> {
    match format {
        ExportFormat::Pdf => Box::new(LatexExporter::pdf()),
        ExportFormat::Latex => Box::new(LatexExporter::source()),
        ExportFormat::Html => Box::new(HtmlExporter::default()),
    }
}

fn run<F: Frontend>(
    config: &AppConfig,
    frontend: F,
    exporter: &dyn DocumentExporter,
) -> Result<SessionOutcome, SizerError> {
    let mut session = Questionnaire::standard();
    if config.auto_export {
        run_session(&mut session, &AssumeYes(frontend), exporter, &config.output)
    } else {
        run_session(&mut session, &frontend, exporter, &config.output)
    }
}

fn main() -> Result<()> {
    let config = AppConfig::try_from(Cli::parse())?;
    init_tracing(&config);
    info!(frontend = ?config.frontend, format = %config.format, "starting");

    let exporter = exporter(config.format);

    let result = match config.frontend {
        FrontendKind::Dialoguer => {
            let wizard = if config.plain {
                DialoguerWizard::plain()
            } else {
                DialoguerWizard::new()
            };
            run(&config, wizard, exporter.as_ref())
        }
        FrontendKind::Ratatui => {
            let theme = if config.plain {
                Theme::plain()
            } else {
                Theme::default()
            };
            run(&config, RatatuiWizard::new().with_theme(theme), exporter.as_ref())
        }
        FrontendKind::Script => {
            let path = config
                .script
                .as_deref()
                .context("no script file given")?;
            let frontend = ScriptedFrontend::from_file(path)
                .with_context(|| format!("failed to read answers from {}", path.display()))?;
            let outcome = run(&config, frontend, exporter.as_ref());
            if let (Ok(outcome), false) = (&outcome, config.auto_export) {
                println!("{}", format_report(&InlineReport::new(outcome.report.sections())));
            }
            outcome
        }
    };

    match result {
        Ok(SessionOutcome {
            exported: Some(path),
            ..
        }) => {
            println!("Report saved to {}", path.display());
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(err) if err.is_cancelled() => {
            eprintln!("Cancelled.");
            Ok(())
        }
        Err(SizerError::Export(err)) if err.is_unavailable() => {
            Err(anyhow::Error::new(err).context(
                "could not export the report; install a LaTeX engine or pass --format latex/html",
            ))
        }
        Err(err) => Err(err.into()),
    }
}
