//! Cross-cutting, shared constants.
//!
//! Model identifiers and file names live here so the CLI, the service and the
//! loader agree on where things are.

/// Public identifier of the sentence encoder.
pub const ENCODER_MODEL_NAME: &str = "all-MiniLM-L6-v2";

/// Hub organisation that publishes [`ENCODER_MODEL_NAME`].
pub const ENCODER_MODEL_ORG: &str = "sentence-transformers";

/// Output dimension of [`ENCODER_MODEL_NAME`].
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token budget of [`ENCODER_MODEL_NAME`]; longer inputs are truncated.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Directory (next to the executable) holding the classifier and encoder files.
pub const MODELS_DIR_NAME: &str = "models";

/// File name of the serialized classifier inside the models directory.
pub const CLASSIFIER_ARTIFACT: &str = "svm.json";

/// Files a sentence-encoder directory must contain.
pub const ENCODER_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

/// Default port of the scoring service.
pub const DEFAULT_API_PORT: u16 = 8081;

/// Default port of the browser UI.
pub const DEFAULT_UI_PORT: u16 = 9081;

/// Default base URL the UI calls.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8081";

/// Default UI request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Bounds for the UI request timeout.
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;
