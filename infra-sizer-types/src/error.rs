use crate::PromptKey;

/// Error returned by the questionnaire controller.
///
/// Neither variant mutates the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    /// The submitted text was empty or whitespace only.
    #[error("Answer is empty")]
    EmptyInput,

    /// Every prompt has already been answered.
    #[error("Questionnaire is already complete")]
    AlreadyComplete,
}

/// Error returned when the report cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("No answer for '{0}'")]
    MissingAnswer(PromptKey),
}

/// Error returned by a document exporter.
///
/// Every variant means the export did not happen and no file was left at
/// the destination.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An external rendering tool is not installed.
    #[error("Document exporter unavailable: '{0}' was not found")]
    ToolNotFound(String),

    /// The renderer ran but did not produce a document.
    #[error("Document rendering failed: {0}")]
    RenderFailed(String),

    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn render(message: impl Into<String>) -> Self {
        Self::RenderFailed(message.into())
    }

    /// Whether the export capability itself is missing, as opposed to a failed run.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ToolNotFound(_))
    }
}

/// Error type for a whole questionnaire run.
#[derive(Debug, thiserror::Error)]
pub enum SizerError {
    /// User cancelled (Ctrl+C, Esc, closed terminal).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Frontend-specific failure (I/O, terminal, script).
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl SizerError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(QuestionnaireError::EmptyInput.to_string(), "Answer is empty");
        assert_eq!(
            ReportError::MissingAnswer(PromptKey::Model).to_string(),
            "No answer for 'model'"
        );
        assert_eq!(
            ExportError::ToolNotFound("pdflatex".into()).to_string(),
            "Document exporter unavailable: 'pdflatex' was not found"
        );
    }

    #[test]
    fn only_missing_tool_is_unavailable() {
        assert!(ExportError::ToolNotFound("pdflatex".into()).is_unavailable());
        assert!(!ExportError::render("bad input").is_unavailable());
    }

    #[test]
    fn cancellation_is_detected() {
        assert!(SizerError::Cancelled.is_cancelled());
        assert!(!SizerError::frontend(anyhow::anyhow!("boom")).is_cancelled());
    }
}
