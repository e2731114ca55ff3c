use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    DocumentExporter, ExportDecision, Frontend, InlineReport, Questionnaire, Report, SizerError,
    SizingProfile,
};

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub report: Report,
    /// Where the document was written, if the user asked for it.
    pub exported: Option<PathBuf>,
}

/// Run a questionnaire end to end.
///
/// Collects answers through `frontend`, assembles the report, shows it, and
/// exports it to `destination` if the user asks for it. An export failure is
/// returned as [`SizerError::Export`]; the session itself is left complete.
pub fn run_session<F, E>(
    session: &mut Questionnaire,
    frontend: &F,
    exporter: &E,
    destination: &Path,
) -> Result<SessionOutcome, SizerError>
where
    F: Frontend,
    E: DocumentExporter + ?Sized,
{
    frontend.collect(session).map_err(Into::<SizerError>::into)?;

    let profile = SizingProfile::from_answers(session.answers())?;
    let report = Report::new(&profile);
    let inline = InlineReport::new(report.sections());

    let exported = match frontend.present(&inline).map_err(Into::<SizerError>::into)? {
        ExportDecision::Export => {
            if let Err(err) = exporter.export(report.sections(), destination) {
                warn!(error = %err, destination = %destination.display(), "export failed");
                return Err(err.into());
            }
            info!(
                destination = %destination.display(),
                pages = report.sections().len(),
                "report exported"
            );
            Some(destination.to_path_buf())
        }
        ExportDecision::Skip => None,
    };

    Ok(SessionOutcome { report, exported })
}
