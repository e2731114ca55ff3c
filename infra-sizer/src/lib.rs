//! # infra-sizer
//!
//! A ten-question infrastructure sizing questionnaire with a printable report.
//! Frontend-agnostic and exporter-agnostic.
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use infra_sizer::{MemoryExporter, Questionnaire, ScriptedFrontend, run_session};
//!
//! let frontend = ScriptedFrontend::new([
//!     "Chatbot support", "Inference", "Text", "5000", "50",
//!     "200", "High", "200ms", "Contextual", "LLAMA3 8B",
//! ]);
//! let exporter = MemoryExporter::new();
//! let mut session = Questionnaire::standard();
//!
//! let outcome = run_session(
//!     &mut session,
//!     &frontend,
//!     &exporter,
//!     Path::new("Infra_Sizer_Report.pdf"),
//! )
//! .unwrap();
//!
//! let overview = outcome.report.section("Project Overview").unwrap();
//! assert_eq!(overview.value("Model Size"), Some("LLAMA3 8B"));
//! assert_eq!(exporter.last().unwrap().pages.len(), 5);
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `Frontend`:
//! - `infra-sizer-dialoguer-wizard` - CLI prompts via dialoguer
//! - `infra-sizer-ratatui-wizard` - Full-screen TUI wizard
//!
//! ## Exporters
//!
//! Exporters are separate crates that implement `DocumentExporter`:
//! - `infra-sizer-latex-document` - LaTeX source, or PDF through `xelatex`/`lualatex`/`pdflatex`
//! - `infra-sizer-html-document` - Printable HTML

// Re-export all types from infra-sizer-types
pub use infra_sizer_types::*;

// Scripted frontend for running the questionnaire without user interaction
mod scripted;
pub use scripted::{ScriptError, ScriptedFrontend};

mod memory;
pub use memory::{MemoryExporter, RecordedDocument, RecordedPage};

mod run;
pub use run::{SessionOutcome, run_session};

mod persist;
pub use persist::write_atomically;
