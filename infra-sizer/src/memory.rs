//! In-memory exporter for tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::{DocumentExporter, ExportError, ReportSection, TABLE_HEADER, paginate};

/// A page as the memory exporter recorded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPage {
    pub number: usize,
    pub title: String,
    pub header: [String; 2],
    pub rows: Vec<(String, String)>,
}

/// A finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDocument {
    pub destination: PathBuf,
    pub pages: Vec<RecordedPage>,
}

/// Exporter that keeps documents in memory instead of writing files.
#[derive(Debug, Default)]
pub struct MemoryExporter {
    documents: RefCell<Vec<RecordedDocument>>,
    unavailable: bool,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An exporter whose every export fails as if the renderer were missing.
    pub fn unavailable() -> Self {
        Self {
            documents: RefCell::new(Vec::new()),
            unavailable: true,
        }
    }

    pub fn documents(&self) -> Vec<RecordedDocument> {
        self.documents.borrow().clone()
    }

    pub fn last(&self) -> Option<RecordedDocument> {
        self.documents.borrow().last().cloned()
    }
}

impl DocumentExporter for MemoryExporter {
    fn export(&self, sections: &[ReportSection], destination: &Path) -> Result<(), ExportError> {
        if self.unavailable {
            return Err(ExportError::ToolNotFound("memory".to_string()));
        }

        let pages = paginate(sections)
            .into_iter()
            .map(|page| RecordedPage {
                number: page.number,
                title: page.title.to_string(),
                header: TABLE_HEADER.map(String::from),
                rows: page
                    .rows
                    .iter()
                    .map(|row| (row.key.clone(), row.value.clone()))
                    .collect(),
            })
            .collect();

        self.documents.borrow_mut().push(RecordedDocument {
            destination: destination.to_path_buf(),
            pages,
        });
        Ok(())
    }
}
