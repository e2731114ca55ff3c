use crate::PromptKey;

/// One submitted answer, tagged with the key of the prompt it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: PromptKey,
    pub text: String,
}

/// Answers collected during a session, in the order they were submitted.
///
/// The text is stored exactly as typed; the questionnaire only rejects
/// answers that are blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<Answer>,
}

impl Answers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an answer.
    pub fn push(&mut self, key: PromptKey, text: impl Into<String>) {
        self.entries.push(Answer {
            key,
            text: text.into(),
        });
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: PromptKey, text: impl Into<String>) -> Self {
        self.push(key, text);
        self
    }

    /// Text of the answer tagged with `key`.
    pub fn get(&self, key: PromptKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|answer| answer.key == key)
            .map(|answer| answer.text.as_str())
    }

    pub fn contains(&self, key: PromptKey) -> bool {
        self.get(key).is_some()
    }

    /// Answer at a submission position.
    pub fn at(&self, index: usize) -> Option<&Answer> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Answers {
    type Item = Answer;
    type IntoIter = std::vec::IntoIter<Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get_by_key() {
        let mut answers = Answers::new();
        answers.push(PromptKey::UseCase, "Chatbot support");
        answers.push(PromptKey::Model, "LLAMA3 8B");

        assert_eq!(answers.get(PromptKey::Model), Some("LLAMA3 8B"));
        assert_eq!(answers.get(PromptKey::Latency), None);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.at(0).unwrap().key, PromptKey::UseCase);
    }

    #[test]
    fn text_is_kept_verbatim() {
        let answers = Answers::new().with(PromptKey::Latency, "  200ms \n");
        assert_eq!(answers.get(PromptKey::Latency), Some("  200ms \n"));
    }

    #[test]
    fn iteration_follows_submission_order() {
        let answers = Answers::new()
            .with(PromptKey::Model, "a")
            .with(PromptKey::UseCase, "b");
        let keys: Vec<_> = answers.iter().map(|a| a.key).collect();
        assert_eq!(keys, vec![PromptKey::Model, PromptKey::UseCase]);
    }
}
