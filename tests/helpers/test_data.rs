//! Test data helpers for creating settings and backend keys

use interview_orchestrator::config::{Settings, StorageBackend};
use interview_orchestrator::models::{QuestionDefinition, QuestionType};

pub const INTRODUCE_YOURSELF: &str = "Introduce yourself";
pub const HARDEST_PROJECT: &str = "Hardest project?";
pub const THREE_HOURS_SECONDS: u64 = 10800;

/// Settings pointing at the in-memory backend with the two-question catalog
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.redis.backend = StorageBackend::Memory;
    settings.logging.level = "debug".to_string();
    settings.interview.questions = vec![
        QuestionDefinition {
            question_type: QuestionType::Explanatory,
            question: INTRODUCE_YOURSELF.to_string(),
        },
        QuestionDefinition {
            question_type: QuestionType::Explanatory,
            question: HARDEST_PROJECT.to_string(),
        },
    ];
    settings
}

/// Backend key for a session under the default namespace
pub fn cursor_key(session_id: &str) -> String {
    format!("interview:{}:question:idx", session_id)
}
