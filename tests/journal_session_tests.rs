//! Integration tests for a journaling session driven through the library API.
//!
//! These tests follow a user through logging entries, watching the streak,
//! and generating a summary with a stand-in summarization service.

use chrono::{Duration, NaiveDate};
use std::cell::RefCell;
use std::collections::BTreeSet;
use symptom_sleuth::ai::{build_prompt, Message, Summarizer};
use symptom_sleuth::errors::{AIError, AppError, ValidationError};
use symptom_sleuth::journal_core::{EntrySubmission, Mood, PainArea};
use symptom_sleuth::{ops, AppResult, SessionState};
use tempfile::tempdir;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn submission(date: NaiveDate, text: &str, mood: Mood, pain: &[PainArea]) -> EntrySubmission {
    EntrySubmission {
        date,
        symptom_text: text.to_string(),
        mood,
        athlete_mode: !pain.is_empty(),
        pain_areas: pain.iter().copied().collect::<BTreeSet<_>>(),
    }
}

/// Echoes the user prompt back so tests can inspect what was sent.
struct EchoSummarizer {
    calls: RefCell<usize>,
}

impl Summarizer for EchoSummarizer {
    async fn complete(&self, messages: &[Message]) -> AppResult<String> {
        *self.calls.borrow_mut() += 1;
        Ok(messages.last().map(|m| m.content.clone()).unwrap_or_default())
    }
}

struct FailingSummarizer;

impl Summarizer for FailingSummarizer {
    async fn complete(&self, _messages: &[Message]) -> AppResult<String> {
        Err(AIError::Api {
            status: 503,
            message: "The server is overloaded".to_string(),
        }
        .into())
    }
}

#[test]
fn test_documented_streak_scenario() {
    let mut session = SessionState::new();

    let streak = ops::log_entry(
        &mut session,
        &submission(day(2024, 1, 1), "headache", Mood::Good, &[]),
    )
    .unwrap();
    assert_eq!(streak.streak_count, 1);

    let streak = ops::log_entry(
        &mut session,
        &submission(day(2024, 1, 2), "sore knee", Mood::Low, &[PainArea::Knee]),
    )
    .unwrap();
    assert_eq!(streak.streak_count, 2);

    let streak = ops::log_entry(
        &mut session,
        &submission(day(2024, 1, 5), "feeling great", Mood::Great, &[]),
    )
    .unwrap();
    assert_eq!(streak.streak_count, 1);

    let streak = ops::log_entry(
        &mut session,
        &submission(day(2024, 1, 4), "forgot to log this", Mood::Neutral, &[]),
    )
    .unwrap();
    assert_eq!(streak.streak_count, 1);
    assert_eq!(streak.last_log_date, Some(day(2024, 1, 4)));

    // Submission order is preserved, display order is its exact reverse
    let dates: Vec<_> = session.entries.all().iter().map(|e| e.date()).collect();
    assert_eq!(
        dates,
        vec![day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 5), day(2024, 1, 4)]
    );
    let mut displayed: Vec<_> = session.entries.display_order().map(|e| e.date()).collect();
    displayed.reverse();
    assert_eq!(displayed, dates);
}

#[test]
fn test_month_of_daily_entries() {
    let mut session = SessionState::new();
    let start = day(2024, 2, 1);

    for n in 0..31 {
        let date = start + Duration::days(n);
        let streak =
            ops::log_entry(&mut session, &submission(date, "check-in", Mood::Good, &[])).unwrap();
        assert_eq!(streak.streak_count, n as u32 + 1);
    }
}

#[test]
fn test_rejected_submissions_leave_session_untouched() {
    let mut session = SessionState::new();
    ops::log_entry(
        &mut session,
        &submission(day(2024, 1, 1), "cough", Mood::Neutral, &[]),
    )
    .unwrap();
    let streak_before = session.streak;

    for text in ["", "   ", "\t\n"] {
        let result = ops::log_entry(
            &mut session,
            &submission(day(2024, 1, 2), text, Mood::Neutral, &[]),
        );
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::EmptySymptoms))
        ));
    }

    assert_eq!(session.entries.len(), 1);
    assert_eq!(session.streak, streak_before);
}

#[tokio::test]
async fn test_summary_uses_submission_order_and_template() {
    let mut session = SessionState::new();
    ops::log_entry(
        &mut session,
        &submission(day(2024, 1, 1), "headache", Mood::Good, &[]),
    )
    .unwrap();
    ops::log_entry(
        &mut session,
        &submission(day(2024, 1, 2), "sore knee", Mood::Low, &[PainArea::Knee]),
    )
    .unwrap();

    let summarizer = EchoSummarizer {
        calls: RefCell::new(0),
    };
    let summary = ops::generate_summary(&mut session, &summarizer)
        .await
        .unwrap();

    assert_eq!(summary, build_prompt(session.entries.all()));
    let first = summary
        .find("Monday, January 01: Mood 😊. Pain: None. headache")
        .unwrap();
    let second = summary
        .find("Tuesday, January 02: Mood 😞. Pain: Knee. sore knee")
        .unwrap();
    assert!(first < second);
    assert!(summary.contains("Summarize this in 3 paragraphs."));
    assert_eq!(*summarizer.calls.borrow(), 1);
}

#[tokio::test]
async fn test_failed_summary_keeps_previous_export() {
    let dir = tempdir().unwrap();
    let mut session = SessionState::new();
    for d in 1..=2 {
        ops::log_entry(
            &mut session,
            &submission(day(2024, 1, d), "fatigue", Mood::Neutral, &[]),
        )
        .unwrap();
    }

    let echo = EchoSummarizer {
        calls: RefCell::new(0),
    };
    let first = ops::generate_summary(&mut session, &echo).await.unwrap();

    let result = ops::generate_summary(&mut session, &FailingSummarizer).await;
    match result {
        Err(AppError::AI(AIError::Api { status, message })) => {
            assert_eq!(status, 503);
            assert_eq!(message, "The server is overloaded");
        }
        other => panic!("Expected AIError::Api, got {:?}", other),
    }
    assert_eq!(session.last_summary.as_deref(), Some(first.as_str()));

    let path = ops::export_report(&session, &ops::report_path(dir.path(), None)).unwrap();
    assert!(std::fs::read(path).unwrap().starts_with(b"%PDF"));
}
