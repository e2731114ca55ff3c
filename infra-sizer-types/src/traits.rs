use std::path::Path;

use crate::{ExportError, InlineReport, Questionnaire, ReportSection, SizerError};

/// What the user chose on the report screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDecision {
    Export,
    Skip,
}

/// Trait for frontends that drive a questionnaire.
///
/// A frontend decides how prompts are presented (line prompts, full-screen
/// TUI, a script) and feeds the user's text into the controller. Blank
/// answers are rejected by the controller; the frontend simply asks again.
pub trait Frontend {
    /// The error type for this frontend.
    ///
    /// Conversions should map user cancellation to [`SizerError::Cancelled`].
    type Error: Into<SizerError>;

    /// Submit answers until the session is complete.
    ///
    /// Returns `Ok(())` only when `session.is_complete()`.
    fn collect(&self, session: &mut Questionnaire) -> Result<(), Self::Error>;

    /// Show the finished report and ask whether to export it.
    fn present(&self, report: &InlineReport) -> Result<ExportDecision, Self::Error>;
}

/// Trait for document exporters.
///
/// An exporter writes one page per section, in order: the page title and a
/// two column `Key`/`Value` table. Export is all-or-nothing: on error no file
/// is left at `destination`.
pub trait DocumentExporter {
    fn export(&self, sections: &[ReportSection], destination: &Path) -> Result<(), ExportError>;
}

impl<T: DocumentExporter + ?Sized> DocumentExporter for &T {
    fn export(&self, sections: &[ReportSection], destination: &Path) -> Result<(), ExportError> {
        (**self).export(sections, destination)
    }
}

impl<T: DocumentExporter + ?Sized> DocumentExporter for Box<T> {
    fn export(&self, sections: &[ReportSection], destination: &Path) -> Result<(), ExportError> {
        (**self).export(sections, destination)
    }
}
