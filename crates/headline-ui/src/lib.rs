//! Browser UI for editing a headline list and scoring it through the
//! scoring service.

pub mod client;
pub mod render;
pub mod routes;
pub mod session;

pub use client::{ClientError, ScoreApi, ScoreClient};
pub use routes::{UiState, create_router};
pub use session::{HeadlineSession, ResultRow};
