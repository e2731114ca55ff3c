//! Scripted frontend for running a questionnaire without user interaction.
//!
//! `ScriptedFrontend` feeds a fixed list of inputs into the controller, one
//! per prompt. Blank inputs are submitted too, so a script can exercise the
//! "blank answer is ignored" path exactly like a user pressing Enter on an
//! empty box.
//!
//! # Example
//!
//! ```rust
//! use infra_sizer::{Frontend, Questionnaire, ScriptedFrontend};
//!
//! let frontend = ScriptedFrontend::new([
//!     "Chatbot support", "Inference", "Text", "5000", "50",
//!     "200", "High", "200ms", "Contextual", "LLAMA3 8B",
//! ]);
//! let mut session = Questionnaire::standard();
//! frontend.collect(&mut session).unwrap();
//! assert!(session.is_complete());
//! ```

use std::cell::RefCell;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use tracing::{debug, trace};

use crate::{
    ExportDecision, Frontend, InlineReport, Questionnaire, QuestionnaireError, SizerError,
};

/// Error type for `ScriptedFrontend`.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script ran out of answers after {answered} of {total} prompts")]
    ScriptExhausted { answered: usize, total: usize },

    #[error("Failed to read script: {0}")]
    Io(#[from] io::Error),
}

impl From<ScriptError> for SizerError {
    fn from(err: ScriptError) -> Self {
        SizerError::frontend(err)
    }
}

/// A frontend that answers from a pre-recorded list.
#[derive(Debug, Clone)]
pub struct ScriptedFrontend {
    inputs: Vec<String>,
    decision: ExportDecision,
    presented: RefCell<Vec<InlineReport>>,
}

impl ScriptedFrontend {
    /// Create a frontend that submits `inputs` in order and then exports.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            decision: ExportDecision::Export,
            presented: RefCell::new(Vec::new()),
        }
    }

    /// Read one input per line.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, ScriptError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(lines))
    }

    /// Read one input per line from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(text.lines()))
    }

    /// Answer the report screen with `decision`.
    pub fn with_decision(mut self, decision: ExportDecision) -> Self {
        self.decision = decision;
        self
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Reports passed to [`Frontend::present`] so far.
    pub fn presented(&self) -> Vec<InlineReport> {
        self.presented.borrow().clone()
    }
}

impl Frontend for ScriptedFrontend {
    type Error = ScriptError;

    fn collect(&self, session: &mut Questionnaire) -> Result<(), Self::Error> {
        for input in &self.inputs {
            match session.submit_answer(input.as_str()) {
                Ok(_) => {}
                Err(QuestionnaireError::EmptyInput) => {
                    trace!("script submitted a blank answer");
                }
                Err(QuestionnaireError::AlreadyComplete) => {
                    debug!("ignoring script lines after completion");
                    break;
                }
            }
        }

        if session.is_complete() {
            Ok(())
        } else {
            let (answered, total) = session.progress();
            Err(ScriptError::ScriptExhausted { answered, total })
        }
    }

    fn present(&self, report: &InlineReport) -> Result<ExportDecision, Self::Error> {
        self.presented.borrow_mut().push(report.clone());
        Ok(self.decision)
    }
}
