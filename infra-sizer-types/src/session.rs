//! The questionnaire controller.
//!
//! A session walks through a [`PromptSet`] one prompt at a time. The only
//! mutation is submitting a non-blank answer, which either advances to the
//! next prompt or completes the session. After every accepted submission the
//! controller hands out a fresh [`SessionState`] snapshot and notifies its
//! listeners, so a presentation layer never reads half-updated state.

use std::fmt;

use tracing::{debug, info, trace};

use crate::{Answers, Prompt, PromptSet, QuestionnaireError};

/// Position in the questionnaire state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for the answer to prompt `i`.
    Asking(usize),
    /// Every prompt is answered. Terminal.
    Complete,
}

/// Snapshot of a session.
///
/// While the session is not complete, `answers().len() == current_index()`.
/// Once complete, `answers().len()` equals the number of prompts and
/// `current_index()` stays on the last prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    answers: Answers,
    pending_input: String,
    is_complete: bool,
}

impl SessionState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Text typed into the answer box but not yet submitted.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn stage(&self) -> Stage {
        if self.is_complete {
            Stage::Complete
        } else {
            Stage::Asking(self.current_index)
        }
    }
}

/// Callback invoked with the new snapshot after each accepted answer.
pub type Listener = Box<dyn FnMut(&SessionState)>;

/// Drives a single pass through a prompt set.
pub struct Questionnaire {
    prompts: PromptSet,
    state: SessionState,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Questionnaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Questionnaire")
            .field("prompts", &self.prompts)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

impl Questionnaire {
    /// Start a session at the first prompt.
    pub fn new(prompts: PromptSet) -> Self {
        Self {
            prompts,
            state: SessionState::default(),
            listeners: Vec::new(),
        }
    }

    /// Start a session over [`PromptSet::standard`].
    pub fn standard() -> Self {
        Self::new(PromptSet::standard().clone())
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    /// Current state, borrowed.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current state, owned.
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn answers(&self) -> &Answers {
        &self.state.answers
    }

    /// The prompt waiting for an answer, or `None` once complete.
    pub fn current_prompt(&self) -> Option<&Prompt> {
        match self.stage() {
            Stage::Asking(index) => self.prompts.get(index),
            Stage::Complete => None,
        }
    }

    /// `(answered, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.state.answers.len(), self.prompts.len())
    }

    /// Label for the submit button: "Finish" on the last prompt, "Next" otherwise.
    pub fn submit_label(&self) -> &'static str {
        if self.state.current_index + 1 >= self.prompts.len() {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Register a callback for new snapshots.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the answer box contents.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.state.pending_input = text.into();
    }

    /// Submit an answer to the current prompt.
    ///
    /// Blank text is rejected with [`QuestionnaireError::EmptyInput`] and a
    /// completed session with [`QuestionnaireError::AlreadyComplete`]; in both
    /// cases nothing changes. Any other text is accepted verbatim.
    pub fn submit_answer(
        &mut self,
        text: impl Into<String>,
    ) -> Result<SessionState, QuestionnaireError> {
        let text = text.into();
        self.check_submittable(&text)?;
        Ok(self.accept(text))
    }

    /// Submit the answer box contents, clearing it on success.
    pub fn submit_pending(&mut self) -> Result<SessionState, QuestionnaireError> {
        self.check_submittable(&self.state.pending_input)?;
        let text = std::mem::take(&mut self.state.pending_input);
        Ok(self.accept(text))
    }

    fn check_submittable(&self, text: &str) -> Result<(), QuestionnaireError> {
        if self.state.is_complete {
            return Err(QuestionnaireError::AlreadyComplete);
        }
        if text.trim().is_empty() {
            trace!(index = self.state.current_index, "ignoring blank answer");
            return Err(QuestionnaireError::EmptyInput);
        }
        Ok(())
    }

    fn accept(&mut self, text: String) -> SessionState {
        let index = self.state.current_index;
        let key = self.prompts.prompts()[index].key();
        self.state.answers.push(key, text);

        if index + 1 < self.prompts.len() {
            self.state.current_index += 1;
            debug!(index, %key, "answer accepted");
        } else {
            self.state.is_complete = true;
            info!(answers = self.state.answers.len(), "questionnaire complete");
        }

        let snapshot = self.state.clone();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
        snapshot
    }
}
