//! # infra-sizer-ratatui-wizard
//!
//! Full-screen terminal frontend for infra-sizer, built on `ratatui` and
//! `crossterm`.
//!
//! One question per screen with a thin progress bar, a prompt panel and an
//! answer panel showing a placeholder until something is typed. After the
//! last answer the inline report is shown and Enter requests the download.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use infra_sizer::{MemoryExporter, Questionnaire, SizerError, run_session};
//! use infra_sizer_ratatui_wizard::RatatuiWizard;
//!
//! fn main() -> Result<(), SizerError> {
//!     let mut session = Questionnaire::standard();
//!     run_session(
//!         &mut session,
//!         &RatatuiWizard::new(),
//!         &MemoryExporter::new(),
//!         Path::new("Infra_Sizer_Report.pdf"),
//!     )?;
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiError, RatatuiWizard, Theme};

/// Header shown above every question.
pub const TITLE: &str = "Infra Sizer Chatbot";
