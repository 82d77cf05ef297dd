//! Answer submission and decision models

use serde::{Deserialize, Serialize};

/// Request body for answer validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

/// Outcome of evaluating an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDecision {
    /// Clarifying prompt to ask before moving on
    pub followup_question: Option<String>,
    /// Whether the session should advance to the next question
    pub proceed_to_next_question: bool,
}

impl FlowDecision {
    /// Accept the answer and move on without a follow-up
    pub fn proceed() -> Self {
        Self {
            followup_question: None,
            proceed_to_next_question: true,
        }
    }

    /// Stay on the current question and ask for clarification
    pub fn follow_up(prompt: impl Into<String>) -> Self {
        Self {
            followup_question: Some(prompt.into()),
            proceed_to_next_question: false,
        }
    }
}
