//! Headline scoring: clean → encode (one batch) → classify (one batch).
//!
//! Every front end (CLI, service, UI) cleans its input with the helpers here
//! before anything reaches the model, so blank lines are never scored and
//! labels line up one-to-one with the cleaned list.

pub mod error;
pub mod scorer;


pub use error::ScoringError;
pub use scorer::HeadlineScorer;

/// Trims every entry and drops the ones left empty, keeping order.
pub fn clean_headlines<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    clean_with_index(raw).1
}

/// Like [`clean_headlines`], also returning each survivor's original index.
pub fn clean_with_index<S: AsRef<str>>(raw: &[S]) -> (Vec<usize>, Vec<String>) {
    raw.iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let stripped = value.as_ref().trim();
            (!stripped.is_empty()).then(|| (idx, stripped.to_string()))
        })
        .unzip()
}
