use thiserror::Error;

/// Errors that can occur while loading a raw blueprint graph payload.
#[derive(Error, Debug, Clone)]
pub enum BlueprintLoadError {
    #[error("Failed to read blueprint graph file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse blueprint graph JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur when converting a custom user format into a keiro `BlueprintGraph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid graph data: {0}")]
    ValidationError(String),
}
