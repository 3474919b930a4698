//! Journal entry model: moods, pain areas, and the immutable `Entry`.

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, DISPLAY_DATE_FORMAT};
use crate::errors::ValidationError;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How the user felt on the day of an entry, from lowest to highest valence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Mood {
    /// 😞
    Low,
    /// 😐
    Neutral,
    /// 😊
    #[default]
    Good,
    /// 😄
    Great,
}

impl Mood {
    /// All moods in ascending order.
    pub const ALL: [Mood; 4] = [Mood::Low, Mood::Neutral, Mood::Good, Mood::Great];

    /// The emoji shown in forms, entry listings and summary prompts.
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Low => "😞",
            Mood::Neutral => "😐",
            Mood::Good => "😊",
            Mood::Great => "😄",
        }
    }

    /// Lower-case name accepted on input.
    pub fn name(self) -> &'static str {
        match self {
            Mood::Low => "low",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    /// 1-based position on the scale, as offered in the shell form.
    pub fn level(self) -> u8 {
        match self {
            Mood::Low => 1,
            Mood::Neutral => 2,
            Mood::Good => 3,
            Mood::Great => 4,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    /// Accepts the scale number, the name (any case) or the emoji.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| {
                input == mood.emoji()
                    || input.eq_ignore_ascii_case(mood.name())
                    || input == mood.level().to_string()
            })
            .ok_or_else(|| ValidationError::UnknownMood(input.to_string()))
    }
}

/// Body regions that can be flagged while Athlete Mode is on.
///
/// Variant order is the vocabulary order, so sets of pain areas iterate
/// head to foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PainArea {
    Head,
    Neck,
    Shoulder,
    Back,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
    Foot,
}

impl PainArea {
    /// The full vocabulary in display order.
    pub const ALL: [PainArea; 10] = [
        PainArea::Head,
        PainArea::Neck,
        PainArea::Shoulder,
        PainArea::Back,
        PainArea::Elbow,
        PainArea::Wrist,
        PainArea::Hip,
        PainArea::Knee,
        PainArea::Ankle,
        PainArea::Foot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PainArea::Head => "Head",
            PainArea::Neck => "Neck",
            PainArea::Shoulder => "Shoulder",
            PainArea::Back => "Back",
            PainArea::Elbow => "Elbow",
            PainArea::Wrist => "Wrist",
            PainArea::Hip => "Hip",
            PainArea::Knee => "Knee",
            PainArea::Ankle => "Ankle",
            PainArea::Foot => "Foot",
        }
    }

    /// Parses a comma-separated list such as `"knee, Ankle"`.
    ///
    /// Blank items are skipped and duplicates collapse. Any unknown item
    /// rejects the whole list.
    pub fn parse_list(input: &str) -> Result<BTreeSet<PainArea>, ValidationError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(PainArea::from_str)
            .collect()
    }
}

impl fmt::Display for PainArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PainArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        PainArea::ALL
            .into_iter()
            .find(|area| input.eq_ignore_ascii_case(area.label()))
            .ok_or_else(|| ValidationError::UnknownPainArea(input.to_string()))
    }
}

/// Parses a user-supplied date in `YYYY-MM-DD` or `YYYYMMDD` form.
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(input, DATE_FORMAT_COMPACT))
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Raw form data for one submission, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySubmission {
    pub date: NaiveDate,
    pub symptom_text: String,
    pub mood: Mood,
    pub athlete_mode: bool,
    /// Ignored unless `athlete_mode` is set.
    pub pain_areas: BTreeSet<PainArea>,
}

/// One immutable journal record.
///
/// Entries can only be built through [`Entry::new`], which guarantees the
/// symptom text is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    date: NaiveDate,
    symptom_text: String,
    mood: Mood,
    pain_areas: BTreeSet<PainArea>,
}

impl Entry {
    /// Creates an entry, trimming the symptom text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptySymptoms` if the text is empty or only
    /// whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use symptom_sleuth::journal_core::{Entry, Mood};
    /// use chrono::NaiveDate;
    /// use std::collections::BTreeSet;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let entry = Entry::new(date, "  mild headache ", Mood::Good, BTreeSet::new()).unwrap();
    /// assert_eq!(entry.symptom_text(), "mild headache");
    /// assert_eq!(entry.display_date(), "Monday, January 01");
    ///
    /// assert!(Entry::new(date, "   ", Mood::Good, BTreeSet::new()).is_err());
    /// ```
    pub fn new(
        date: NaiveDate,
        symptom_text: &str,
        mood: Mood,
        pain_areas: BTreeSet<PainArea>,
    ) -> Result<Self, ValidationError> {
        let symptom_text = symptom_text.trim();
        if symptom_text.is_empty() {
            return Err(ValidationError::EmptySymptoms);
        }

        Ok(Self {
            date,
            symptom_text: symptom_text.to_string(),
            mood,
            pain_areas,
        })
    }

    /// Builds an entry from form data, dropping pain areas when Athlete Mode
    /// was off.
    pub fn from_submission(submission: &EntrySubmission) -> Result<Self, ValidationError> {
        let pain_areas = if submission.athlete_mode {
            submission.pain_areas.clone()
        } else {
            BTreeSet::new()
        };
        Entry::new(
            submission.date,
            &submission.symptom_text,
            submission.mood,
            pain_areas,
        )
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date rendered for people, e.g. `Monday, January 01`.
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn symptom_text(&self) -> &str {
        &self.symptom_text
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn pain_areas(&self) -> &BTreeSet<PainArea> {
        &self.pain_areas
    }

    /// Pain areas joined with `", "`, or `None` when there are none.
    pub fn pain_summary(&self) -> Option<String> {
        if self.pain_areas.is_empty() {
            return None;
        }
        Some(
            self.pain_areas
                .iter()
                .map(|area| area.label())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mood_parsing_accepts_level_name_and_emoji() {
        assert_eq!("1".parse::<Mood>().unwrap(), Mood::Low);
        assert_eq!("Neutral".parse::<Mood>().unwrap(), Mood::Neutral);
        assert_eq!(" 😊 ".parse::<Mood>().unwrap(), Mood::Good);
        assert_eq!("GREAT".parse::<Mood>().unwrap(), Mood::Great);

        let err = "ecstatic".parse::<Mood>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownMood("ecstatic".to_string()));
        assert!("5".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_order_and_default() {
        assert!(Mood::Low < Mood::Neutral);
        assert!(Mood::Good < Mood::Great);
        assert_eq!(Mood::default(), Mood::Good);
        assert_eq!(Mood::Great.to_string(), "😄");
    }

    #[test]
    fn test_pain_area_list_parsing() {
        let areas = PainArea::parse_list("knee, Back,, KNEE ").unwrap();
        assert_eq!(
            areas.into_iter().collect::<Vec<_>>(),
            vec![PainArea::Back, PainArea::Knee]
        );

        assert!(PainArea::parse_list("").unwrap().is_empty());
        assert_eq!(
            PainArea::parse_list("Knee, Tail").unwrap_err(),
            ValidationError::UnknownPainArea("Tail".to_string())
        );
    }

    #[test]
    fn test_parse_entry_date_formats() {
        assert_eq!(parse_entry_date("2024-01-15").unwrap(), date(2024, 1, 15));
        assert_eq!(parse_entry_date("20240115").unwrap(), date(2024, 1, 15));
        assert!(matches!(
            parse_entry_date("15/01/2024"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_entry_rejects_blank_symptoms() {
        for text in ["", "   ", "\n\t"] {
            assert_eq!(
                Entry::new(date(2024, 1, 1), text, Mood::Good, BTreeSet::new()),
                Err(ValidationError::EmptySymptoms)
            );
        }
    }

    #[test]
    fn test_from_submission_drops_pain_without_athlete_mode() {
        let mut submission = EntrySubmission {
            date: date(2024, 1, 2),
            symptom_text: "sore after practice".to_string(),
            mood: Mood::Low,
            athlete_mode: false,
            pain_areas: BTreeSet::from([PainArea::Knee]),
        };
        let entry = Entry::from_submission(&submission).unwrap();
        assert!(entry.pain_areas().is_empty());
        assert_eq!(entry.pain_summary(), None);

        submission.athlete_mode = true;
        let entry = Entry::from_submission(&submission).unwrap();
        assert_eq!(entry.pain_summary().as_deref(), Some("Knee"));
    }

    #[test]
    fn test_pain_summary_uses_vocabulary_order() {
        let areas = BTreeSet::from([PainArea::Foot, PainArea::Head, PainArea::Knee]);
        let entry = Entry::new(date(2024, 3, 1), "aches", Mood::Neutral, areas).unwrap();
        assert_eq!(entry.pain_summary().as_deref(), Some("Head, Knee, Foot"));
    }
}
