use std::fmt;
use std::sync::LazyLock;

/// Placeholder shown in an empty answer box.
pub const DEFAULT_PLACEHOLDER: &str = "Type your answer here...";

/// Semantic tag of a prompt.
///
/// Answers are looked up by key, never by their position in the prompt set,
/// so reordering prompts cannot change which answer ends up in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PromptKey {
    UseCase,
    Workload,
    DataType,
    TotalUsers,
    ConcurrentUsers,
    QueriesPerHour,
    Accuracy,
    Latency,
    PromptingStrategy,
    Model,
}

impl PromptKey {
    /// All keys, in the order of the standard prompt set.
    pub const ALL: [PromptKey; 10] = [
        PromptKey::UseCase,
        PromptKey::Workload,
        PromptKey::DataType,
        PromptKey::TotalUsers,
        PromptKey::ConcurrentUsers,
        PromptKey::QueriesPerHour,
        PromptKey::Accuracy,
        PromptKey::Latency,
        PromptKey::PromptingStrategy,
        PromptKey::Model,
    ];

    /// Stable snake_case name, used in logs and script files.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKey::UseCase => "use_case",
            PromptKey::Workload => "workload",
            PromptKey::DataType => "data_type",
            PromptKey::TotalUsers => "total_users",
            PromptKey::ConcurrentUsers => "concurrent_users",
            PromptKey::QueriesPerHour => "queries_per_hour",
            PromptKey::Accuracy => "accuracy",
            PromptKey::Latency => "latency",
            PromptKey::PromptingStrategy => "prompting_strategy",
            PromptKey::Model => "model",
        }
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single question shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// What the answer means.
    key: PromptKey,

    /// The question text.
    ask: String,

    /// Hint shown while the answer box is empty.
    placeholder: String,
}

impl Prompt {
    /// Create a new prompt with the default placeholder.
    pub fn new(key: PromptKey, ask: impl Into<String>) -> Self {
        Self {
            key,
            ask: ask.into(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Replace the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn key(&self) -> PromptKey {
        self.key
    }

    pub fn ask(&self) -> &str {
        &self.ask
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

/// Error returned when building an invalid prompt set.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PromptSetError {
    #[error("A prompt set needs at least one prompt")]
    Empty,

    #[error("Prompt key '{0}' appears more than once")]
    DuplicateKey(PromptKey),
}

/// The ordered, immutable sequence of prompts of a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    prompts: Vec<Prompt>,
}

static STANDARD: LazyLock<PromptSet> = LazyLock::new(|| PromptSet {
    prompts: vec![
        Prompt::new(PromptKey::UseCase, "Hey there! What is your use case?"),
        Prompt::new(
            PromptKey::Workload,
            "Awesome! Are you using inference, fine-tuning, or retraining?",
        ),
        Prompt::new(
            PromptKey::DataType,
            "Cool! What type of data will your model process? (Text, Image, Audio, Video)",
        ),
        Prompt::new(
            PromptKey::TotalUsers,
            "Got it! What is the expected number of total users?",
        ),
        Prompt::new(
            PromptKey::ConcurrentUsers,
            "And how many users will use it concurrently?",
        ),
        Prompt::new(
            PromptKey::QueriesPerHour,
            "Nice! How many queries per hour do you expect?",
        ),
        Prompt::new(
            PromptKey::Accuracy,
            "What is your desired response accuracy? (Low, Medium, High)",
        ),
        Prompt::new(
            PromptKey::Latency,
            "What is your latency requirement (in ms or sec)?",
        ),
        Prompt::new(
            PromptKey::PromptingStrategy,
            "Almost done! What is your prompting strategy? (Chain-of-Thought, Contextual)",
        ),
        Prompt::new(
            PromptKey::Model,
            "Last one! What model are you planning to use? (LLAMA3 8B, CoPilot, Azure OpenAI, etc.)",
        ),
    ],
});

impl PromptSet {
    /// Create a prompt set. Keys must be unique.
    pub fn new(prompts: Vec<Prompt>) -> Result<Self, PromptSetError> {
        if prompts.is_empty() {
            return Err(PromptSetError::Empty);
        }
        for (i, prompt) in prompts.iter().enumerate() {
            if prompts[..i].iter().any(|p| p.key == prompt.key) {
                return Err(PromptSetError::DuplicateKey(prompt.key));
            }
        }
        Ok(Self { prompts })
    }

    /// The ten infrastructure sizing prompts.
    pub fn standard() -> &'static PromptSet {
        &STANDARD
    }

    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.prompts.get(index)
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.iter()
    }

    /// Position of the prompt tagged with `key`.
    pub fn position(&self, key: PromptKey) -> Option<usize> {
        self.prompts.iter().position(|p| p.key == key)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Always `false` for a constructed set; kept for the usual `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl<'a> IntoIterator for &'a PromptSet {
    type Item = &'a Prompt;
    type IntoIter = std::slice::Iter<'a, Prompt>;

    fn into_iter(self) -> Self::IntoIter {
        self.prompts.iter()
    }
}
