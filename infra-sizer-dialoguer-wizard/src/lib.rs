//! # infra-sizer-dialoguer-wizard
//!
//! Dialoguer wizard frontend for infra-sizer.
//!
//! This crate asks the sizing questions on the command line, one at a time,
//! using the `dialoguer` library, then prints the report and asks whether to
//! download it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use infra_sizer::{MemoryExporter, Questionnaire, SizerError, run_session};
//! use infra_sizer_dialoguer_wizard::DialoguerWizard;
//!
//! fn main() -> Result<(), SizerError> {
//!     let mut session = Questionnaire::standard();
//!     let outcome = run_session(
//!         &mut session,
//!         &DialoguerWizard::new(),
//!         &MemoryExporter::new(),
//!         Path::new("Infra_Sizer_Report.pdf"),
//!     )?;
//!     println!("{} sections", outcome.report.sections().len());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerWizard, format_report, prompt_line};

/// Banner printed before the first question.
pub const TITLE: &str = "Infra Sizer Chatbot";
