use serde::{Deserialize, Serialize};

/// Identifier as echoed back by the API.
///
/// Seeded records carry numeric ids while records created over HTTP may
/// come back with string ids, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(u64),
    Text(String),
}

impl PostId {
    pub fn matches(&self, requested: u64) -> bool {
        match self {
            PostId::Number(id) => *id == requested,
            PostId::Text(id) => id.trim().parse::<u64>().is_ok_and(|id| id == requested),
        }
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostId::Number(id) => write!(f, "{}", id),
            PostId::Text(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: Option<PostId>,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Protected routes store the body under `text` instead of `content`.
    pub text: Option<String>,
    pub author: Option<String>,
}

/// Body for the public `/posts` routes.
#[derive(Debug, Serialize)]
pub struct NewPost<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub title: &'a str,
    pub content: &'a str,
    pub author: &'a str,
}

/// Body for the protected `/{owner}/posts` route.
#[derive(Debug, Serialize)]
pub struct OwnedPost<'a> {
    pub title: &'a str,
    pub text: &'a str,
}
