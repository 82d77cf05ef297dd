//! Answer validation integration tests
//!
//! Covers the accept-all policy, the three-hour retention window applied on
//! every validation, atomic progression under concurrency, custom policies
//! holding a session on its question, and degraded backend behaviour.

mod helpers;

use std::sync::Arc;
use std::time::Duration;
use assert_matches::assert_matches;
use futures::future::join_all;
use interview_orchestrator::models::{FlowDecision, QuestionEntry};
use interview_orchestrator::services::AnswerPolicy;
use interview_orchestrator::InterviewError;
use helpers::*;

#[tokio::test]
async fn test_validate_advances_fresh_session() {
    let ctx = TestContext::new();

    let decision = ctx.validation().validate_answer("s2", "I am an engineer").await;

    assert_eq!(decision.followup_question, None);
    assert!(decision.proceed_to_next_question);
    assert_eq!(ctx.stored_cursor("s2"), Some(1));
}

#[tokio::test]
async fn test_validate_advances_regardless_of_content() {
    let ctx = TestContext::new();

    for (i, answer) in ["", "no", "   ", "a very long answer ".repeat(100).as_str()].iter().enumerate() {
        let decision = ctx.validation().validate_answer("s3", answer).await;
        assert_eq!(decision, FlowDecision::proceed());
        assert_eq!(ctx.stored_cursor("s3"), Some(i as u64 + 1));
    }
}

#[tokio::test(start_paused = true)]
async fn test_validate_applies_three_hour_expiry() {
    let ctx = TestContext::new();
    ctx.validation().validate_answer("s4", "answer").await;

    assert_eq!(
        ctx.backend.ttl_remaining(&cursor_key("s4")),
        Some(Duration::from_secs(THREE_HOURS_SECONDS))
    );

    tokio::time::advance(Duration::from_secs(THREE_HOURS_SECONDS - 1)).await;
    assert_eq!(ctx.store().read_cursor("s4").await, 1);

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(ctx.store().try_read_cursor("s4").await.unwrap(), None);
    assert_eq!(ctx.store().read_cursor("s4").await, 0);
}

#[tokio::test(start_paused = true)]
async fn test_validate_refreshes_expiry() {
    let ctx = TestContext::new();
    ctx.validation().validate_answer("s5", "first").await;

    tokio::time::advance(Duration::from_secs(THREE_HOURS_SECONDS - 60)).await;
    ctx.validation().validate_answer("s5", "second").await;

    assert_eq!(
        ctx.backend.ttl_remaining(&cursor_key("s5")),
        Some(Duration::from_secs(THREE_HOURS_SECONDS))
    );
    tokio::time::advance(Duration::from_secs(120)).await;
    assert_eq!(ctx.store().read_cursor("s5").await, 2);
}

#[tokio::test(start_paused = true)]
async fn test_next_question_alone_sets_no_expiry() {
    let ctx = TestContext::new();
    ctx.questions().next_question("s6").await;

    assert_eq!(ctx.backend.ttl_remaining(&cursor_key("s6")), None);
    tokio::time::advance(Duration::from_secs(THREE_HOURS_SECONDS * 2)).await;
    assert_eq!(ctx.store().read_cursor("s6").await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_validations_do_not_lose_updates() {
    let ctx = TestContext::new();
    let service = ctx.validation().clone();

    let first = service.clone();
    let second = service.clone();
    let (a, b) = tokio::join!(
        tokio::spawn(async move { first.validate_answer("race", "answer one").await }),
        tokio::spawn(async move { second.validate_answer("race", "answer two").await }),
    );

    assert_eq!(a.unwrap(), FlowDecision::proceed());
    assert_eq!(b.unwrap(), FlowDecision::proceed());
    assert_eq!(ctx.stored_cursor("race"), Some(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_concurrent_validations() {
    let ctx = TestContext::new();
    let service = ctx.validation().clone();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.validate_answer("burst", &format!("answer {}", i)).await })
        })
        .collect();
    for result in join_all(handles).await {
        assert!(result.unwrap().proceed_to_next_question);
    }

    assert_eq!(ctx.stored_cursor("burst"), Some(50));
}

/// Asks for more detail on short answers
struct RequireDetail;

impl AnswerPolicy for RequireDetail {
    fn evaluate(&self, question: &QuestionEntry, answer: &str) -> FlowDecision {
        match question {
            QuestionEntry::Ask { .. } if answer.split_whitespace().count() < 3 => {
                FlowDecision::follow_up("Could you tell me a bit more?")
            }
            _ => FlowDecision::proceed(),
        }
    }

    fn name(&self) -> &'static str {
        "require_detail"
    }
}

#[tokio::test(start_paused = true)]
async fn test_custom_policy_holds_session_and_refreshes_expiry() {
    let ctx = TestContext::new();
    let service = ctx.validation().clone().with_policy(Arc::new(RequireDetail));

    // Establish a cursor with an expiry first
    service.validate_answer("s7", "I build distributed systems").await;
    tokio::time::advance(Duration::from_secs(600)).await;

    let decision = service.validate_answer("s7", "Payments").await;
    assert_eq!(decision.followup_question.as_deref(), Some("Could you tell me a bit more?"));
    assert!(!decision.proceed_to_next_question);
    assert_eq!(ctx.stored_cursor("s7"), Some(1));
    assert_eq!(
        ctx.backend.ttl_remaining(&cursor_key("s7")),
        Some(Duration::from_secs(THREE_HOURS_SECONDS))
    );

    let decision = service.validate_answer("s7", "A payments ledger migration").await;
    assert_eq!(decision, FlowDecision::proceed());
    assert_eq!(ctx.stored_cursor("s7"), Some(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_question_aware_policy_never_loses_increments() {
    let ctx = TestContext::new();
    let service = ctx.validation().clone().with_policy(Arc::new(RequireDetail));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.validate_answer("parallel", "a detailed enough answer").await })
        })
        .collect();
    for result in join_all(handles).await {
        assert_eq!(result.unwrap(), FlowDecision::proceed());
    }

    // Each evaluation may have seen a stale cursor, but every advance landed
    assert_eq!(ctx.stored_cursor("parallel"), Some(10));
}

#[tokio::test]
async fn test_unreachable_backend_still_proceeds() {
    let services = unreachable_services();

    let decision = services.validation_service.validate_answer("s8", "answer").await;

    assert_eq!(decision, FlowDecision::proceed());
}

#[tokio::test]
async fn test_store_distinguishes_absent_from_failure() {
    let ctx = TestContext::new();
    let failing = unreachable_services();

    assert_matches!(ctx.store().try_read_cursor("fresh").await, Ok(None));
    assert_matches!(
        failing.store.try_read_cursor("fresh").await,
        Err(InterviewError::ServiceUnavailable(_))
    );

    // The degrading forms hide the difference
    assert_eq!(ctx.store().read_cursor("fresh").await, 0);
    assert_eq!(failing.store.read_cursor("fresh").await, 0);
    assert!(!failing.store.write_cursor("fresh", 1, Some(THREE_HOURS_SECONDS)).await);
}
