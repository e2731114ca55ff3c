use crate::{Answers, PromptKey, ReportError};

/// The collected answers as named fields.
///
/// Built by key from [`Answers`], so it does not depend on the order the
/// prompts were asked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizingProfile {
    pub use_case: String,
    pub workload: String,
    pub data_type: String,
    pub total_users: String,
    pub concurrent_users: String,
    pub queries_per_hour: String,
    pub accuracy: String,
    pub latency: String,
    pub prompting_strategy: String,
    pub model: String,
}

impl SizingProfile {
    /// Build a profile, failing on the first key without an answer.
    pub fn from_answers(answers: &Answers) -> Result<Self, ReportError> {
        let take = |key: PromptKey| {
            answers
                .get(key)
                .map(str::to_string)
                .ok_or(ReportError::MissingAnswer(key))
        };

        Ok(Self {
            use_case: take(PromptKey::UseCase)?,
            workload: take(PromptKey::Workload)?,
            data_type: take(PromptKey::DataType)?,
            total_users: take(PromptKey::TotalUsers)?,
            concurrent_users: take(PromptKey::ConcurrentUsers)?,
            queries_per_hour: take(PromptKey::QueriesPerHour)?,
            accuracy: take(PromptKey::Accuracy)?,
            latency: take(PromptKey::Latency)?,
            prompting_strategy: take(PromptKey::PromptingStrategy)?,
            model: take(PromptKey::Model)?,
        })
    }

    /// Field for `key`.
    pub fn answer(&self, key: PromptKey) -> &str {
        match key {
            PromptKey::UseCase => &self.use_case,
            PromptKey::Workload => &self.workload,
            PromptKey::DataType => &self.data_type,
            PromptKey::TotalUsers => &self.total_users,
            PromptKey::ConcurrentUsers => &self.concurrent_users,
            PromptKey::QueriesPerHour => &self.queries_per_hour,
            PromptKey::Accuracy => &self.accuracy,
            PromptKey::Latency => &self.latency,
            PromptKey::PromptingStrategy => &self.prompting_strategy,
            PromptKey::Model => &self.model,
        }
    }
}

impl TryFrom<&Answers> for SizingProfile {
    type Error = ReportError;

    fn try_from(answers: &Answers) -> Result<Self, Self::Error> {
        Self::from_answers(answers)
    }
}
