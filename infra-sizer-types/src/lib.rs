//! Core types for the infra-sizer crates.
//!
//! This crate provides the presentation-agnostic pieces of the questionnaire:
//! - `PromptSet` and `Prompt` - The fixed, ordered questions
//! - `Questionnaire` and `SessionState` - The controller and its snapshots
//! - `Answers` and `SizingProfile` - Collected text, by submission order and by name
//! - `Report`, `ReportSection` and `InlineReport` - The assembled report
//! - `Page` and `DocumentStyle` - The page model shared by exporters
//! - `Frontend` and `DocumentExporter` traits - For implementing frontends and exporters

mod prompt;
pub use prompt::{DEFAULT_PLACEHOLDER, Prompt, PromptKey, PromptSet, PromptSetError};

mod answers;
pub use answers::{Answer, Answers};

mod profile;
pub use profile::SizingProfile;

mod session;
pub use session::{Listener, Questionnaire, SessionState, Stage};

mod report;
pub use report::{
    ASSUMPTIONS_TITLE, COMPUTE_TITLE, CONCURRENT_USERS_KEY, MODEL_SIZE_KEY, NETWORK_TITLE,
    OVERVIEW_TITLE, Report, ReportRow, ReportSection, STORAGE_TITLE, build_sections,
    section_titles,
};

mod inline;
pub use inline::{EXPORT_LABEL, InlineReport, InlineSection, REPORT_HEADING, render_inline};

mod document;
pub use document::{
    DEFAULT_FILE_STEM, DocumentStyle, ExportFormat, Page, TABLE_HEADER, UnsupportedFormat,
    paginate,
};

mod error;
pub use error::{ExportError, QuestionnaireError, ReportError, SizerError};

mod traits;
pub use traits::{DocumentExporter, ExportDecision, Frontend};
