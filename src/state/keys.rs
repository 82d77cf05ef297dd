//! Key layout for session state in the key-value backend

const QUESTION_SEGMENT: &str = "question";
const CURSOR_SUFFIX: &str = "idx";

/// Builds backend keys for a session, e.g. `interview:{session_id}:question:idx`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    namespace: String,
}

impl SessionKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Key holding the index of the next question to serve
    pub fn cursor_key(&self, session_id: &str) -> String {
        format!("{}:{}:{}:{}", self.namespace, session_id, QUESTION_SEGMENT, CURSOR_SUFFIX)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self::new("interview")
    }
}
