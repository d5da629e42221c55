//! Session state for one UI process: the editable headline list, the API
//! settings, and the notice/results produced by the last action.

use headlines::config::{UiConfig, clamp_timeout_secs};
use headlines::scoring::clean_with_index;

/// Headlines the list starts with.
pub const SAMPLE_HEADLINES: [&str; 3] = [
    "Tech stocks rally as AI demand grows",
    "Oil prices fall after weak global demand report",
    "Retail sales beat expectations in January",
];

pub const EMPTY_PLACEHOLDER: &str = "(empty)";
pub const UNSCORED_LABEL: &str = "n/a";

pub const MSG_NOTHING_TO_SCORE: &str = "Add at least one non-empty headline before scoring.";
pub const MSG_NO_LINES: &str = "No non-empty lines found.";
pub const MSG_SCORED: &str = "Scoring complete.";
pub const MSG_LABEL_MISMATCH: &str =
    "API returned a different number of labels than headlines. Check your server implementation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// One-shot message shown on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// One line of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub headline: String,
    pub label: String,
}

/// Cleaned headlines ready to send, with the positions they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBatch {
    pub api_url: String,
    pub timeout_secs: u64,
    pub indexes: Vec<usize>,
    pub cleaned: Vec<String>,
    /// The list as it was when the batch was taken.
    pub snapshot: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HeadlineSession {
    headlines: Vec<String>,
    api_url: String,
    timeout_secs: u64,
    notice: Option<Notice>,
    results: Option<Vec<ResultRow>>,
}

impl Default for HeadlineSession {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl HeadlineSession {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            headlines: SAMPLE_HEADLINES.iter().map(|h| h.to_string()).collect(),
            api_url: config.api_url.clone(),
            timeout_secs: clamp_timeout_secs(config.timeout_secs),
            notice: None,
            results: None,
        }
    }

    pub fn with_headlines<I, S>(mut self, headlines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headlines = headlines.into_iter().map(Into::into).collect();
        if self.headlines.is_empty() {
            self.headlines.push(String::new());
        }
        self
    }

    pub fn headlines(&self) -> &[String] {
        &self.headlines
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn results(&self) -> Option<&[ResultRow]> {
        self.results.as_deref()
    }

    /// Removes the notice and results so they show exactly once.
    pub fn take_outcome(&mut self) -> (Option<Notice>, Option<Vec<ResultRow>>) {
        (self.notice.take(), self.results.take())
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn add(&mut self) {
        self.headlines.push(String::new());
    }

    /// Replaces the entry at `index`; out-of-range indexes are ignored.
    pub fn edit(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.headlines.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Removes the entry at `index`. The list never ends up empty.
    pub fn delete(&mut self, index: usize) {
        if index < self.headlines.len() {
            self.headlines.remove(index);
        }
        if self.headlines.is_empty() {
            self.headlines.push(String::new());
        }
    }

    pub fn remove_empty(&mut self) {
        self.headlines.retain(|h| !h.trim().is_empty());
    }

    pub fn clear(&mut self) {
        self.headlines = vec![String::new()];
    }

    /// Replaces the list with the non-blank lines of `text`.
    ///
    /// Returns the number loaded; zero leaves the list untouched.
    pub fn bulk_load(&mut self, text: &str) -> usize {
        let lines: Vec<&str> = text.lines().collect();
        let (_, parsed) = clean_with_index(&lines);

        if parsed.is_empty() {
            self.notice = Some(Notice::warning(MSG_NO_LINES));
            return 0;
        }

        let count = parsed.len();
        self.headlines = parsed;
        self.notice = Some(Notice::success(format!("Loaded {} headlines.", count)));
        count
    }

    pub fn update_settings(&mut self, api_url: String, timeout_secs: u64) {
        self.api_url = api_url;
        self.timeout_secs = clamp_timeout_secs(timeout_secs);
    }

    /// Snapshot for an outbound score call, or `None` (with the error notice
    /// set) when nothing is left after cleaning.
    pub fn begin_scoring(&mut self) -> Option<ScoreBatch> {
        let (indexes, cleaned) = clean_with_index(&self.headlines);
        if cleaned.is_empty() {
            self.notice = Some(Notice::error(MSG_NOTHING_TO_SCORE));
            self.results = None;
            return None;
        }

        Some(ScoreBatch {
            api_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
            indexes,
            cleaned,
            snapshot: self.headlines.clone(),
        })
    }

    /// Records the outcome of a score call made with `batch`.
    pub fn finish_scoring(&mut self, batch: &ScoreBatch, outcome: Result<Vec<String>, String>) {
        match outcome {
            Err(message) => {
                self.notice = Some(Notice::error(message));
                self.results = None;
            }
            Ok(labels) => match merge_labels(&batch.snapshot, &batch.indexes, labels) {
                Some(rows) => {
                    self.notice = Some(Notice::success(MSG_SCORED));
                    self.results = Some(rows);
                }
                None => {
                    self.notice = Some(Notice::error(MSG_LABEL_MISMATCH));
                    self.results = None;
                }
            },
        }
    }
}

/// Places each label back at its headline's original position.
///
/// Returns `None` when the label count differs from the kept count.
pub fn merge_labels(
    headlines: &[String],
    indexes: &[usize],
    labels: Vec<String>,
) -> Option<Vec<ResultRow>> {
    if labels.len() != indexes.len() {
        return None;
    }

    let mut by_index: Vec<Option<String>> = vec![None; headlines.len()];
    for (&idx, label) in indexes.iter().zip(labels) {
        if let Some(slot) = by_index.get_mut(idx) {
            *slot = Some(label);
        }
    }

    Some(
        headlines
            .iter()
            .zip(by_index)
            .map(|(headline, label)| {
                let stripped = headline.trim();
                ResultRow {
                    headline: if stripped.is_empty() {
                        EMPTY_PLACEHOLDER.to_string()
                    } else {
                        stripped.to_string()
                    },
                    label: label.unwrap_or_else(|| UNSCORED_LABEL.to_string()),
                }
            })
            .collect(),
    )
}
