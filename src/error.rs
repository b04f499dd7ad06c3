use reqwest::StatusCode;

/// Why a scenario did not pass.
#[derive(thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to reach the API under test")]
    Transport(#[from] reqwest::Error),
    #[error("Expected status {expected}, got {actual}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("Response is missing the `{0}` header")]
    MissingHeader(String),
    #[error("Expected header `{header}` to contain {expected:?}, got {actual:?}")]
    HeaderMismatch {
        header: String,
        expected: String,
        actual: String,
    },
    #[error("Response body could not be decoded")]
    MalformedBody(#[source] serde_json::Error),
    #[error("Response body is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("Expected `{field}` to be {expected:?}, got {actual:?}")]
    FieldMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
    #[error("Expected {expected} items, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl std::fmt::Debug for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
