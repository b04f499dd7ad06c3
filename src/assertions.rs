//! Checks applied to responses from the API under test.
//!
//! Each helper returns a `ScenarioError` carrying both the expected and the
//! observed value instead of panicking, so the runner can record the failure
//! and move on to the next scenario.

use crate::domain::Post;
use crate::error::ScenarioError;
use reqwest::header::HeaderName;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

pub fn assert_status(response: &Response, expected: StatusCode) -> Result<(), ScenarioError> {
    let actual = response.status();
    if actual != expected {
        return Err(ScenarioError::UnexpectedStatus { expected, actual });
    }
    Ok(())
}

pub fn assert_header_contains(
    response: &Response,
    header: HeaderName,
    expected: &str,
) -> Result<(), ScenarioError> {
    let value = response
        .headers()
        .get(&header)
        .ok_or_else(|| ScenarioError::MissingHeader(header.to_string()))?;
    let actual = String::from_utf8_lossy(value.as_bytes());
    if !actual.contains(expected) {
        return Err(ScenarioError::HeaderMismatch {
            header: header.to_string(),
            expected: expected.to_owned(),
            actual: actual.into_owned(),
        });
    }
    Ok(())
}

/// Consumes the response and decodes its body as JSON.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ScenarioError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ScenarioError::MalformedBody)
}

pub fn assert_field_eq(
    field: &'static str,
    expected: &str,
    actual: Option<&str>,
) -> Result<(), ScenarioError> {
    match actual {
        None => Err(ScenarioError::MissingField(field)),
        Some(actual) if actual != expected => Err(ScenarioError::FieldMismatch {
            field,
            expected: expected.to_owned(),
            actual: actual.to_owned(),
        }),
        Some(_) => Ok(()),
    }
}

pub fn assert_post_id(post: &Post, requested: u64) -> Result<(), ScenarioError> {
    let id = post.id.as_ref().ok_or(ScenarioError::MissingField("id"))?;
    if !id.matches(requested) {
        return Err(ScenarioError::FieldMismatch {
            field: "id",
            expected: requested.to_string(),
            actual: id.to_string(),
        });
    }
    Ok(())
}

pub fn assert_len(expected: usize, actual: usize) -> Result<(), ScenarioError> {
    if expected != actual {
        return Err(ScenarioError::LengthMismatch { expected, actual });
    }
    Ok(())
}
