//! System prompt and message builders for physician summaries.
//!
//! This module turns the entry log into the text sent to the summarization
//! service.

use super::openai::Message;
use crate::journal_core::Entry;

/// System instruction sent ahead of every summary request.
pub const SYSTEM_PROMPT: &str = "You are a compassionate medical assistant.";

/// Formats one entry as a single log line.
///
/// `{display date}: Mood {emoji}. Pain: {areas or None}. {symptoms}`
pub fn format_entry_line(entry: &Entry) -> String {
    format!(
        "{}: Mood {}. Pain: {}. {}",
        entry.display_date(),
        entry.mood(),
        entry.pain_summary().as_deref().unwrap_or("None"),
        entry.symptom_text()
    )
}

/// Builds the summary request text for a sequence of entries.
///
/// Lines appear in the order the entries are given, which for the session
/// log is submission order. No truncation is applied; callers talking to a
/// service with a context limit must trim the input themselves.
///
/// Callers are expected to pass at least two entries: a single entry does
/// not describe a trend. The session operations enforce this before
/// calling in.
///
/// # Examples
///
/// ```
/// use symptom_sleuth::ai::prompts::build_prompt;
/// use symptom_sleuth::journal_core::{Entry, Mood};
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let entries = vec![
///     Entry::new(day(1), "headache", Mood::Good, BTreeSet::new()).unwrap(),
///     Entry::new(day(2), "tired", Mood::Low, BTreeSet::new()).unwrap(),
/// ];
/// let prompt = build_prompt(&entries);
/// assert!(prompt.contains("Monday, January 01: Mood 😊. Pain: None. headache"));
/// assert!(prompt.contains("3 paragraphs"));
/// ```
pub fn build_prompt(entries: &[Entry]) -> String {
    let logs = entries
        .iter()
        .map(format_entry_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
You are a helpful and professional medical assistant. Analyze the following symptom logs and summarize them clearly for a physician.
Focus on frequency, intensity, emotional trends, body pain, and recurring issues.

Logs:
{}

Summarize this in 3 paragraphs.
"#,
        logs
    )
}

/// Builds the message exchange for a physician summary.
///
/// # Returns
///
/// The system instruction followed by the built prompt as the user message.
pub fn summary_prompt(entries: &[Entry]) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(build_prompt(entries)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::openai::Role;
    use crate::journal_core::{Mood, PainArea};
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn entry(day: u32, text: &str, mood: Mood, pain: &[PainArea]) -> Entry {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        Entry::new(date, text, mood, pain.iter().copied().collect::<BTreeSet<_>>()).unwrap()
    }

    #[test]
    fn test_format_entry_line_without_pain() {
        let line = format_entry_line(&entry(1, "mild headache", Mood::Good, &[]));
        assert_eq!(line, "Monday, January 01: Mood 😊. Pain: None. mild headache");
    }

    #[test]
    fn test_format_entry_line_with_pain() {
        let line = format_entry_line(&entry(
            2,
            "knee swollen after run",
            Mood::Low,
            &[PainArea::Knee, PainArea::Ankle],
        ));
        assert_eq!(
            line,
            "Tuesday, January 02: Mood 😞. Pain: Knee, Ankle. knee swollen after run"
        );
    }

    #[test]
    fn test_build_prompt_keeps_input_order() {
        let entries = vec![
            entry(5, "fever", Mood::Great, &[]),
            entry(4, "cough", Mood::Neutral, &[PainArea::Back]),
            entry(6, "better", Mood::Good, &[]),
        ];
        let prompt = build_prompt(&entries);

        let lines: Vec<_> = prompt
            .lines()
            .filter(|line| line.contains(": Mood "))
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("fever"));
        assert!(lines[1].ends_with("cough"));
        assert!(lines[2].ends_with("better"));
        assert!(lines[0].contains("Pain: None"));
        assert!(lines[2].contains("Pain: None"));
        assert!(lines[1].contains("Pain: Back"));
    }

    #[test]
    fn test_build_prompt_includes_instructions() {
        let entries = vec![
            entry(1, "headache", Mood::Good, &[]),
            entry(2, "sore knee", Mood::Low, &[PainArea::Knee]),
        ];
        let prompt = build_prompt(&entries);

        assert!(prompt.contains("summarize them clearly for a physician"));
        assert!(prompt.contains("frequency, intensity, emotional trends, body pain"));
        assert!(prompt.contains("Summarize this in 3 paragraphs."));
        assert!(prompt.contains("Monday, January 01: Mood 😊. Pain: None. headache"));
        assert!(prompt.contains("Tuesday, January 02: Mood 😞. Pain: Knee. sore knee"));
    }

    #[test]
    fn test_summary_prompt_structure() {
        let entries = vec![
            entry(1, "headache", Mood::Good, &[]),
            entry(2, "tired", Mood::Neutral, &[]),
        ];
        let messages = summary_prompt(&entries);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, build_prompt(&entries));
    }
}
