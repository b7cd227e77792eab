use thiserror::Error;

#[derive(Debug, Error)]
pub enum PosterError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Request error: {0}")]
    Request(String),
    #[error("Response error: {0}")]
    Response(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("AWS error: {0}")]
    Aws(String),
    #[error("AWS service error: {0}")]
    AwsService(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Logo decode error: {0}")]
    LogoDecode(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("Generation error: {0}")]
    Generation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PosterError>;

/// Turns a failed step into its documented degraded output.
///
/// Every recoverable failure in the pipeline (upstream LLM, logo decode, render)
/// resolves through this instead of being dropped silently: the error is logged
/// with its context and the fallback value takes its place.
pub trait OrDegrade<T> {
    fn or_degrade<F>(self, context: &str, fallback: F) -> T
    where
        F: FnOnce() -> T;
}

impl<T> OrDegrade<T> for Result<T> {
    fn or_degrade<F>(self, context: &str, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{} degraded: {}", context, e);
                fallback()
            }
        }
    }
}
