//! Interactive journaling shell.
//!
//! The shell reads one command per line and walks the user through the entry
//! form when they log. It works over any `BufRead`/`Write` pair, so the
//! binary drives it with stdin/stdout and tests with in-memory buffers.
//! Errors from the operations are printed and the session carries on; only
//! terminal I/O failures end the loop.

use crate::ai::Summarizer;
use crate::constants::{APP_DESCRIPTION, APP_TITLE, MIN_ENTRIES_FOR_SUMMARY};
use crate::errors::{AppError, AppResult, ValidationError};
use crate::journal_core::{parse_entry_date, EntrySubmission, Mood, PainArea};
use crate::ops;
use crate::session::SessionState;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

const HELP_TEXT: &str = "Commands:
  log              Log a new entry
  entries          Show your entries, newest first
  streak           Show your logging streak
  summary          Generate an AI summary for your doctor (needs 2+ entries)
  show-summary     Show the last generated summary
  export [PATH]    Save the last summary as a PDF report
  help             Show this help
  quit             End the session (entries are not saved)";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Log,
    Entries,
    Streak,
    Summary,
    ShowSummary,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "log" => ShellCommand::Log,
            "entries" => ShellCommand::Entries,
            "streak" => ShellCommand::Streak,
            "summary" | "summarize" => ShellCommand::Summary,
            "show-summary" => ShellCommand::ShowSummary,
            "export" => ShellCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(other.to_string()),
        };
        Ok(command)
    }
}

/// The interactive front end of one session.
pub struct Shell<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
    export_dir: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell.
    ///
    /// # Arguments
    ///
    /// * `today` - Date offered when the user leaves the date blank
    /// * `export_dir` - Directory reports go to when `export` has no path
    pub fn new(input: R, output: W, today: NaiveDate, export_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            today,
            export_dir,
        }
    }

    /// Runs commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` only if the terminal cannot be read or written.
    pub async fn run<S: Summarizer>(
        &mut self,
        session: &mut SessionState,
        summarizer: &S,
    ) -> AppResult<()> {
        writeln!(self.output, "🤒 {}", APP_TITLE)?;
        writeln!(self.output, "{}", APP_DESCRIPTION)?;
        writeln!(self.output, "Type 'help' for the list of commands.")?;

        while let Some(line) = self.prompt_line("> ")? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(word) => {
                    writeln!(
                        self.output,
                        "Unknown command '{}'. Type 'help' for the list of commands.",
                        word
                    )?;
                    continue;
                }
            };
            debug!("Shell command: {:?}", command);

            match command {
                ShellCommand::Log => self.log(session)?,
                ShellCommand::Entries => self.entries(session)?,
                ShellCommand::Streak => self.streak(session)?,
                ShellCommand::Summary => self.summary(session, summarizer).await?,
                ShellCommand::ShowSummary => self.show_summary(session)?,
                ShellCommand::Export(path) => self.export(session, path)?,
                ShellCommand::Help => writeln!(self.output, "{}", HELP_TEXT)?,
                ShellCommand::Quit => break,
            }
        }

        writeln!(self.output, "Take care! Your entries from this session are not saved.")?;
        Ok(())
    }

    fn log(&mut self, session: &mut SessionState) -> AppResult<()> {
        let Some(submission) = self.read_submission()? else {
            writeln!(self.output, "\nEntry cancelled.")?;
            return Ok(());
        };

        match ops::log_entry(session, &submission) {
            Ok(streak) => writeln!(
                self.output,
                "Logged! You're on a {}-day streak! 🌟",
                streak.streak_count
            )?,
            Err(AppError::Validation(ValidationError::EmptySymptoms)) => writeln!(
                self.output,
                "Nothing logged: describe your symptoms to save an entry."
            )?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    /// Walks through the entry form. Returns `None` if input ends midway.
    fn read_submission(&mut self) -> io::Result<Option<EntrySubmission>> {
        let today = self.today;
        let date_prompt = format!("Date [YYYY-MM-DD, blank for {}]: ", today);
        let Some(date) = self.prompt_parsed(&date_prompt, Some(today), parse_entry_date)? else {
            return Ok(None);
        };

        let Some(symptom_text) = self.read_symptoms()? else {
            return Ok(None);
        };

        let scale = Mood::ALL
            .iter()
            .map(|mood| format!("{}={}", mood.level(), mood.emoji()))
            .collect::<Vec<_>>()
            .join(" ");
        let mood_prompt = format!("Mood today ({}) [{}]: ", scale, Mood::default().level());
        let Some(mood) = self.prompt_parsed(&mood_prompt, Some(Mood::default()), Mood::from_str)?
        else {
            return Ok(None);
        };

        let Some(athlete_mode) = self.prompt_yes_no("🏃 Athlete Mode: log body pain?", false)?
        else {
            return Ok(None);
        };

        let mut pain_areas = BTreeSet::new();
        if athlete_mode {
            let vocabulary = PainArea::ALL
                .iter()
                .map(|area| area.label())
                .collect::<Vec<_>>()
                .join(", ");
            let pain_prompt = format!("Body parts in pain, comma-separated ({}): ", vocabulary);
            match self.prompt_parsed(&pain_prompt, None, PainArea::parse_list)? {
                Some(areas) => pain_areas = areas,
                None => return Ok(None),
            }
        }

        Ok(Some(EntrySubmission {
            date,
            symptom_text,
            mood,
            athlete_mode,
            pain_areas,
        }))
    }

    /// Reads the symptom description, which may span several lines and ends
    /// at the first blank line. Returns `None` if input ends first.
    fn read_symptoms(&mut self) -> io::Result<Option<String>> {
        let mut lines = Vec::new();
        let mut prompt = "Describe your symptoms (finish with a blank line): ";
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(Some(lines.join("\n")));
            }
            lines.push(line);
            prompt = "... ";
        }
    }

    fn entries(&mut self, session: &SessionState) -> AppResult<()> {
        if session.entries.is_empty() {
            writeln!(self.output, "No entries yet. Use 'log' to add one.")?;
            return Ok(());
        }

        writeln!(self.output, "📝 Your Entries")?;
        for entry in session.entries.display_order() {
            writeln!(
                self.output,
                "\n**{}** — Mood: {}\n{}",
                entry.display_date(),
                entry.mood(),
                entry.symptom_text()
            )?;
            if let Some(pain) = entry.pain_summary() {
                writeln!(self.output, "_Pain Areas_: {}", pain)?;
            }
        }
        Ok(())
    }

    fn streak(&mut self, session: &SessionState) -> AppResult<()> {
        match session.streak.last_log_date {
            Some(last) => writeln!(
                self.output,
                "You're on a {}-day streak (last entry dated {}).",
                session.streak.streak_count, last
            )?,
            None => writeln!(self.output, "No streak yet. Log an entry to start one.")?,
        }
        Ok(())
    }

    async fn summary<S: Summarizer>(
        &mut self,
        session: &mut SessionState,
        summarizer: &S,
    ) -> AppResult<()> {
        if session.entries.len() >= MIN_ENTRIES_FOR_SUMMARY {
            writeln!(self.output, "🧠 Analyzing logs...")?;
            self.output.flush()?;
        }

        match ops::generate_summary(session, summarizer).await {
            Ok(summary) => writeln!(self.output, "🧠 AI Summary\n\n{}", summary)?,
            Err(e @ AppError::InsufficientEntries { .. }) => writeln!(self.output, "{}", e)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn show_summary(&mut self, session: &SessionState) -> AppResult<()> {
        match &session.last_summary {
            Some(summary) => writeln!(self.output, "{}", summary)?,
            None => writeln!(self.output, "No summary yet. Use 'summary' to generate one.")?,
        }
        Ok(())
    }

    fn export(&mut self, session: &SessionState, path: Option<PathBuf>) -> AppResult<()> {
        let destination = ops::report_path(&self.export_dir, path.as_deref());
        match ops::export_report(session, &destination) {
            Ok(written) => writeln!(self.output, "📄 Report saved to {}", written.display())?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    /// Prints `prompt` and reads one line. Returns `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
    /// read.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Reads a value, asking again until it parses. Blank input yields
    /// `default` when there is one.
    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        default: Option<T>,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> io::Result<Option<T>>
    where
        T: Clone,
    {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                if let Some(value) = &default {
                    return Ok(Some(value.clone()));
                }
            }
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn prompt_yes_no(&mut self, question: &str, default: bool) -> io::Result<Option<bool>> {
        let prompt = if default {
            format!("{} [Y/n] ", question)
        } else {
            format!("{} [y/N] ", question)
        };

        loop {
            let Some(line) = self.prompt_line(&prompt)? else {
                return Ok(None);
            };
            match line.trim().to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }
}
