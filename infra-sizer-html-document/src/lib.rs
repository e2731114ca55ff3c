//! # infra-sizer-html-document
//!
//! Printable HTML exporter for infra-sizer reports.
//!
//! Each report section is rendered as its own page (CSS page breaks for
//! printing) with a title and a striped `Key`/`Value` table.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_sizer_html_document::{HtmlExporter, HtmlOptions};
//!
//! let exporter = HtmlExporter::new(HtmlOptions::new().with_title("Sizing"));
//! exporter.export(report.sections(), Path::new("Infra_Sizer_Report.html"))?;
//! ```

mod generator;

use std::path::Path;

use infra_sizer::{DocumentExporter, ExportError, ReportSection, write_atomically};
use tracing::info;

pub use generator::{HtmlOptions, escape_html, to_html, to_html_with_options};

/// Default `<title>` of generated documents.
pub const DOCUMENT_TITLE: &str = "Infra Sizer Report";

/// Writes the report as a standalone HTML file.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    options: HtmlOptions,
}

impl HtmlExporter {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl DocumentExporter for HtmlExporter {
    fn export(&self, sections: &[ReportSection], destination: &Path) -> Result<(), ExportError> {
        let html = to_html_with_options(sections, &self.options);
        write_atomically(destination, html.as_bytes())?;
        info!(destination = %destination.display(), "HTML export finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_sizer::{Answers, PromptKey, Report};
    use tempfile::TempDir;

    fn sections() -> Vec<ReportSection> {
        let answers = PromptKey::ALL
            .iter()
            .fold(Answers::new(), |answers, key| answers.with(*key, "50"));
        Report::from_answers(&answers).unwrap().into_sections()
    }

    #[test]
    fn export_writes_five_pages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Infra_Sizer_Report.html");

        HtmlExporter::default().export(&sections(), &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html.matches("<section ").count(), 5);
        assert!(html.contains("<h2 class=\"report-title\">Infra Sizing - Compute</h2>"));
    }

    #[test]
    fn export_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("Infra_Sizer_Report.html");

        let err = HtmlExporter::default().export(&sections(), &path).unwrap_err();

        assert!(matches!(err, ExportError::Io(_)));
        assert!(!err.is_unavailable());
        assert!(!path.exists());
    }
}
