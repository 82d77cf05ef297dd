//! Data models module
//!
//! This module contains the request, response and catalog models

pub mod answer;
pub mod question;

pub use answer::{AnswerRequest, FlowDecision};
pub use question::{CommandType, Question, QuestionDefinition, QuestionEntry, QuestionType};
