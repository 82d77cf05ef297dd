//! Question flow endpoints
//!
//! `GET /next/:session_id` serves the next question and
//! `POST /validate/:session_id` records an answer. Neither endpoint fails on
//! backend trouble; the services degrade instead.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use crate::models::{AnswerRequest, FlowDecision, Question};
use super::AppState;

/// Routes mounted under `/questions`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/next/:session_id", get(get_next_question))
        .route("/validate/:session_id", post(validate_answer))
}

/// Get the next question for a session
pub async fn get_next_question(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Question> {
    let entry = state.services.question_service.next_question(&session_id).await;
    let question = Question::from(&entry);

    info!(session_id = %session_id, command = ?question.command, "Question served");
    Json(question)
}

/// Validate an answer for the session's current question
pub async fn validate_answer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Json<FlowDecision> {
    let decision = state
        .services
        .validation_service
        .validate_answer(&session_id, &request.answer)
        .await;

    info!(
        session_id = %session_id,
        proceed = decision.proceed_to_next_question,
        followup = decision.followup_question.is_some(),
        "Answer validated"
    );
    Json(decision)
}
