use json_utils_path::PathError;
use thiserror::Error;

/// Failure of a facade call: bad input text, a model that does not map to
/// JSON, or a path error from the core.
#[derive(Debug, Error)]
pub enum JsonUtilsError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(&'static str),
}
