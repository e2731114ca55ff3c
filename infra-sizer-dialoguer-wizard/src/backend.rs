//! Dialoguer implementation of the Frontend trait.

use dialoguer::{
    Confirm, Input,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use infra_sizer::{
    ExportDecision, Frontend, InlineReport, Questionnaire, QuestionnaireError, SizerError,
};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the questionnaire (e.g., pressed Ctrl+C).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for SizerError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SizerError::Cancelled,
            other => SizerError::frontend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn map_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer frontend for interactive CLI prompts.
///
/// Asks one prompt per line with a `[k/N]` progress marker, re-asks on a
/// blank answer, then prints the report as bullet lists.
#[derive(Debug, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
    /// Banner printed before the first prompt.
    title: Option<String>,
}

impl Default for DialoguerWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerWizard {
    /// Create a new Dialoguer frontend with the colorful theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            title: Some(crate::TITLE.to_string()),
        }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            ..Self::new()
        }
    }

    /// Set the banner; `None` prints nothing.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn ask(&self, theme: &dyn Theme, prompt: &str) -> Result<String, DialoguerError> {
        Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(map_error)
    }
}

/// Prompt line with progress marker, e.g. `[5/10] And how many users ...`.
pub fn prompt_line(session: &Questionnaire) -> Option<String> {
    let prompt = session.current_prompt()?;
    let (answered, total) = session.progress();
    Some(format!("[{}/{}] {}", answered + 1, total, prompt.ask()))
}

/// Plain-text rendering of the report.
pub fn format_report(report: &InlineReport) -> String {
    let mut out = String::new();
    out.push_str(&report.heading);
    out.push('\n');

    for section in &report.sections {
        out.push('\n');
        out.push_str(&section.title);
        out.push('\n');
        out.push_str(&"-".repeat(section.title.chars().count()));
        out.push('\n');
        for item in &section.items {
            out.push_str("  • ");
            out.push_str(item);
            out.push('\n');
        }
    }
    out
}

impl Frontend for DialoguerWizard {
    type Error = DialoguerError;

    fn collect(&self, session: &mut Questionnaire) -> Result<(), Self::Error> {
        let theme = self.theme();

        if let Some(title) = &self.title {
            println!("{title}\n");
        }

        while let Some(line) = prompt_line(session) {
            let text = self.ask(theme.as_ref(), &line)?;
            match session.submit_answer(text) {
                Ok(_) => {}
                Err(QuestionnaireError::EmptyInput) => {
                    trace!("blank answer, asking again");
                }
                Err(QuestionnaireError::AlreadyComplete) => break,
            }
        }

        debug!("dialoguer wizard finished collecting");
        Ok(())
    }

    fn present(&self, report: &InlineReport) -> Result<ExportDecision, Self::Error> {
        println!();
        println!("{}", format_report(report));

        let export = Confirm::with_theme(self.theme().as_ref())
            .with_prompt(format!("{}?", report.export_label))
            .default(true)
            .interact()
            .map_err(map_error)?;

        Ok(if export {
            ExportDecision::Export
        } else {
            ExportDecision::Skip
        })
    }
}
