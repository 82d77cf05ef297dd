//! Question model definitions

use serde::{Deserialize, Serialize};

/// Kind of answer a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// Free-form spoken or written response
    Explanatory,
    /// Boolean response
    TrueOrFalse,
}

/// Instruction sent to the interview client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandType {
    AskQuestion,
    EndInterview,
}

/// A single position in the question catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionEntry {
    /// Ask the candidate a question
    Ask { kind: QuestionType, prompt: String },
    /// Terminal marker: the interview is over
    End,
}

impl QuestionEntry {
    /// Create an explanatory question
    pub fn explanatory(prompt: impl Into<String>) -> Self {
        Self::Ask {
            kind: QuestionType::Explanatory,
            prompt: prompt.into(),
        }
    }

    /// Create a true-or-false question
    pub fn true_or_false(prompt: impl Into<String>) -> Self {
        Self::Ask {
            kind: QuestionType::TrueOrFalse,
            prompt: prompt.into(),
        }
    }

    /// Whether this entry ends the interview
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Prompt text, if this entry asks a question
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::Ask { prompt, .. } => Some(prompt),
            Self::End => None,
        }
    }
}

/// Wire shape of a question as returned to the interview client
///
/// `type` and `question` are serialized as `null` for the terminal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub command: CommandType,
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub question: Option<String>,
}

impl From<&QuestionEntry> for Question {
    fn from(entry: &QuestionEntry) -> Self {
        match entry {
            QuestionEntry::Ask { kind, prompt } => Self {
                command: CommandType::AskQuestion,
                question_type: Some(*kind),
                question: Some(prompt.clone()),
            },
            QuestionEntry::End => Self {
                command: CommandType::EndInterview,
                question_type: None,
                question: None,
            },
        }
    }
}

impl From<QuestionEntry> for Question {
    fn from(entry: QuestionEntry) -> Self {
        Self::from(&entry)
    }
}

/// Question definition as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
}

impl From<&QuestionDefinition> for QuestionEntry {
    fn from(definition: &QuestionDefinition) -> Self {
        Self::Ask {
            kind: definition.question_type,
            prompt: definition.question.clone(),
        }
    }
}
