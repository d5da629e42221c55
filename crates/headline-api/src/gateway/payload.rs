use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreRequest {
    pub headlines: Vec<String>,
}

/// One label per non-blank request headline, in request order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreResponse {
    pub labels: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}
