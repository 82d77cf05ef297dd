//! Question catalog
//!
//! The catalog is the fixed, ordered list of questions every session walks
//! through. It is built once at startup and shared read-only; the last entry
//! is always [`QuestionEntry::End`].

use crate::models::{QuestionDefinition, QuestionEntry};

const BUILTIN_QUESTIONS: [&str; 2] = [
    "Introduce yourself briefly please",
    "What are some of the difficult projects you've handled?",
];

/// Immutable ordered sequence of questions terminated by an end marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    entries: Vec<QuestionEntry>,
}

impl QuestionCatalog {
    /// Build a catalog from the questions to ask, in order.
    ///
    /// Any `End` entries in the input are dropped and a single terminal
    /// entry is appended, so the result is never empty.
    pub fn new(questions: impl IntoIterator<Item = QuestionEntry>) -> Self {
        let mut entries: Vec<QuestionEntry> = questions
            .into_iter()
            .filter(|entry| !entry.is_end())
            .collect();
        entries.push(QuestionEntry::End);

        Self { entries }
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Self {
        Self::new(BUILTIN_QUESTIONS.iter().map(|prompt| QuestionEntry::explanatory(*prompt)))
    }

    /// Build from configured definitions, falling back to the built-in questions
    pub fn from_definitions(definitions: &[QuestionDefinition]) -> Self {
        if definitions.is_empty() {
            return Self::builtin();
        }
        Self::new(definitions.iter().map(QuestionEntry::from))
    }

    /// Entry at `index`, clamped to the terminal entry when out of range
    pub fn entry_at(&self, index: u64) -> &QuestionEntry {
        let clamped = usize::try_from(index)
            .unwrap_or(usize::MAX)
            .min(self.entries.len() - 1);
        &self.entries[clamped]
    }

    /// Number of entries, including the terminal one
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of questions actually asked
    pub fn question_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Cursor value at which the session has reached the end
    pub fn terminal_index(&self) -> u64 {
        self.question_count() as u64
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
