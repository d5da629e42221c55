//! Headline scoring service library (router, handlers and state), used by the
//! `score_headlines_api` binary and by tests that need an in-process server.

pub mod gateway;

pub use gateway::{AppState, create_router_with_state};
