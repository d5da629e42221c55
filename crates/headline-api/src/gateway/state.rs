use std::sync::Arc;

use headlines::scoring::HeadlineScorer;

/// Shared handler state: the scorer, built once at startup and never mutated.
pub struct AppState<E, P> {
    pub scorer: Arc<HeadlineScorer<E, P>>,
}

impl<E, P> Clone for AppState<E, P> {
    fn clone(&self) -> Self {
        Self {
            scorer: Arc::clone(&self.scorer),
        }
    }
}

impl<E, P> AppState<E, P> {
    pub fn new(scorer: HeadlineScorer<E, P>) -> Self {
        Self {
            scorer: Arc::new(scorer),
        }
    }
}
