//! Report assembly.
//!
//! The report is a constant table of sections. Two cells are filled in from
//! the session (the model and the number of concurrent users); everything
//! else is fixed text.

use crate::{Answers, PromptKey, ReportError, SizingProfile};

/// One key/value row of a report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub key: String,
    pub value: String,

    /// Wording used on screen instead of `"key: value"`.
    pub phrase: Option<String>,
}

impl ReportRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            phrase: None,
        }
    }

    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    /// Inline text: the phrase if set, `"key: value"` otherwise.
    pub fn inline_text(&self) -> String {
        match &self.phrase {
            Some(phrase) => phrase.clone(),
            None => format!("{}: {}", self.key, self.value),
        }
    }
}

/// A titled group of rows. One page when exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

impl ReportSection {
    /// Value of the first row with the given key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
    }
}

/// Where a template cell gets its text.
#[derive(Debug, Clone, Copy)]
enum Cell {
    Fixed(&'static str),
    Answer(PromptKey),
}

struct RowTemplate {
    key: &'static str,
    value: Cell,
    phrase: Option<&'static str>,
}

struct SectionTemplate {
    title: &'static str,
    rows: &'static [RowTemplate],
}

const fn fixed(key: &'static str, value: &'static str) -> RowTemplate {
    RowTemplate {
        key,
        value: Cell::Fixed(value),
        phrase: None,
    }
}

const fn phrased(key: &'static str, value: &'static str, phrase: &'static str) -> RowTemplate {
    RowTemplate {
        key,
        value: Cell::Fixed(value),
        phrase: Some(phrase),
    }
}

const fn answer(key: &'static str, prompt: PromptKey) -> RowTemplate {
    RowTemplate {
        key,
        value: Cell::Answer(prompt),
        phrase: None,
    }
}

pub const OVERVIEW_TITLE: &str = "Project Overview";
pub const ASSUMPTIONS_TITLE: &str = "Assumptions";
pub const COMPUTE_TITLE: &str = "Infra Sizing - Compute";
pub const STORAGE_TITLE: &str = "Storage";
pub const NETWORK_TITLE: &str = "Network";

pub const MODEL_SIZE_KEY: &str = "Model Size";
pub const CONCURRENT_USERS_KEY: &str = "Concurrent Users";

const TEMPLATES: &[SectionTemplate] = &[
    SectionTemplate {
        title: OVERVIEW_TITLE,
        rows: &[
            fixed("Language Support", "English & Japanese"),
            answer(MODEL_SIZE_KEY, PromptKey::Model),
            fixed("Architecture", "RAG (Retrieval-Augmented Generation)"),
            answer(CONCURRENT_USERS_KEY, PromptKey::ConcurrentUsers),
            fixed("Input Tokens", "~200"),
            fixed("Output Tokens", "Up to 4000"),
            phrased(
                "Document Store",
                "Word, PDF, PPT with tables/images",
                "Document Store: PDF, Word, PPT with tables/images",
            ),
        ],
    },
    SectionTemplate {
        title: ASSUMPTIONS_TITLE,
        rows: &[
            phrased(
                "Quantized model",
                "GGUF INT4/INT8",
                "Quantized model (GGUF INT4/INT8)",
            ),
            phrased(
                "Tokenization time",
                "~10ms per 1K tokens",
                "Tokenization time ~10ms per 1K tokens",
            ),
            fixed("RAG DB", "FAISS/Weaviate"),
            fixed("OCR", "Tesseract/LayoutLM"),
            phrased("Frameworks", "LangChain / Haystack", "LangChain or Haystack"),
            fixed("Memory per instance", "~24GB RAM"),
            fixed("Threads per user", "2 vCPUs"),
        ],
    },
    SectionTemplate {
        title: COMPUTE_TITLE,
        rows: &[
            phrased(
                "CPU",
                "Intel Xeon Gold 64B (x2 nodes)",
                "Intel Xeon Gold (64-threads) x2 nodes",
            ),
            fixed("Logical Cores", "128"),
            fixed("RAM", "512GB DDR5 ECC"),
            phrased("Storage", "2x 2TB NVMe SSDs", "Storage: 2x 2TB NVMe"),
            fixed("OS", "Ubuntu 24.04 LTS"),
        ],
    },
    SectionTemplate {
        title: STORAGE_TITLE,
        rows: &[
            fixed("RAG DB", "200GB"),
            fixed("Vector Index", "200GB"),
            fixed("Logs", "200GB"),
            fixed("Total", "~1TB (RAID 1/Me)"),
        ],
    },
    SectionTemplate {
        title: NETWORK_TITLE,
        rows: &[phrased("Recommended Bandwidth", "10 Gbps", "10 Gbps")],
    },
];

/// Titles of the report sections, in page order.
pub fn section_titles() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|template| template.title)
}

/// Build the report sections for a profile.
///
/// Pure: the same profile always gives the same sections.
pub fn build_sections(profile: &SizingProfile) -> Vec<ReportSection> {
    TEMPLATES
        .iter()
        .map(|template| ReportSection {
            title: template.title.to_string(),
            rows: template
                .rows
                .iter()
                .map(|row| {
                    let value = match row.value {
                        Cell::Fixed(text) => text,
                        Cell::Answer(key) => profile.answer(key),
                    };
                    let built = ReportRow::new(row.key, value);
                    match row.phrase {
                        Some(phrase) => built.with_phrase(phrase),
                        None => built,
                    }
                })
                .collect(),
        })
        .collect()
}

/// The assembled report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(profile: &SizingProfile) -> Self {
        Self {
            sections: build_sections(profile),
        }
    }

    /// Assemble from raw answers. Fails if any prompt is unanswered.
    pub fn from_answers(answers: &Answers) -> Result<Self, ReportError> {
        Ok(Self::new(&SizingProfile::from_answers(answers)?))
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.title == title)
    }

    pub fn into_sections(self) -> Vec<ReportSection> {
        self.sections
    }
}
