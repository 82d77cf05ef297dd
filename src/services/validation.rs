//! Answer validation service
//!
//! Evaluating an answer and persisting the outcome are separate steps: an
//! [`AnswerPolicy`] turns the answer into a [`FlowDecision`] without touching
//! storage, then the service advances the session (or only refreshes its
//! retention window when the policy holds it on the current question).

use std::sync::Arc;
use tracing::{debug, info};
use crate::models::{FlowDecision, QuestionEntry};
use crate::state::{QuestionCatalog, SessionStateStore};
use crate::utils::logging::log_session_progress;

/// Decides what happens after a candidate answers a question
pub trait AnswerPolicy: Send + Sync {
    fn evaluate(&self, question: &QuestionEntry, answer: &str) -> FlowDecision;

    fn name(&self) -> &'static str;
}

/// Accepts every answer and never asks a follow-up
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl AnswerPolicy for AcceptAll {
    fn evaluate(&self, _question: &QuestionEntry, _answer: &str) -> FlowDecision {
        FlowDecision::proceed()
    }

    fn name(&self) -> &'static str {
        "accept_all"
    }
}

/// Service validating answers and recording session progress
#[derive(Clone)]
pub struct ValidationService {
    catalog: Arc<QuestionCatalog>,
    store: SessionStateStore,
    policy: Arc<dyn AnswerPolicy>,
    session_ttl_seconds: u64,
}

impl ValidationService {
    /// Create a new ValidationService with the accept-all policy
    pub fn new(catalog: Arc<QuestionCatalog>, store: SessionStateStore, session_ttl_seconds: u64) -> Self {
        Self {
            catalog,
            store,
            policy: Arc::new(AcceptAll),
            session_ttl_seconds,
        }
    }

    /// Replace the answer policy
    pub fn with_policy(mut self, policy: Arc<dyn AnswerPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Evaluate an answer for the session's current question and record the outcome.
    ///
    /// Every call (re)applies the retention window. Backend failures are
    /// logged and the decision is still returned.
    ///
    /// The cursor is read and then advanced with a separate atomic increment,
    /// so no increment is lost, but a concurrent request may move the cursor
    /// between the two. A policy that inspects the question can therefore judge
    /// one question while a different one is skipped. `AcceptAll` ignores the
    /// question and is unaffected.
    pub async fn validate_answer(&self, session_id: &str, answer: &str) -> FlowDecision {
        let cursor = self.store.read_cursor(session_id).await;
        let question = self.catalog.entry_at(cursor);
        let decision = self.policy.evaluate(question, answer);

        debug!(
            session_id = session_id,
            cursor = cursor,
            answer_len = answer.len(),
            policy = self.policy.name(),
            proceed = decision.proceed_to_next_question,
            "Answer evaluated"
        );

        if decision.proceed_to_next_question {
            if let Some(next) = self.store.advance(session_id, Some(self.session_ttl_seconds)).await {
                log_session_progress(session_id, "validate_answer", next - 1, next);
            }
        } else {
            let refreshed = self.store.refresh_ttl(session_id, self.session_ttl_seconds).await;
            info!(
                session_id = session_id,
                cursor = cursor,
                refreshed = refreshed,
                "Follow-up requested, session held on current question"
            );
        }

        decision
    }

    pub fn session_ttl_seconds(&self) -> u64 {
        self.session_ttl_seconds
    }
}

impl std::fmt::Debug for ValidationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationService")
            .field("store", &self.store)
            .field("policy", &self.policy.name())
            .field("session_ttl_seconds", &self.session_ttl_seconds)
            .finish_non_exhaustive()
    }
}
