use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
