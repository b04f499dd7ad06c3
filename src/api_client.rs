use crate::domain::{AccessToken, Credentials, NewPost, OwnedPost};
use reqwest::{Client, Response};
use std::fmt::Display;

/// Thin client for the posts API.
///
/// Every call hands back the raw response whatever its status: expecting a
/// 401 or a 404 is as legitimate as expecting a 200, so status checks are
/// left to the caller. Only transport failures surface as errors.
#[derive(Clone, Debug)]
pub struct PostsApiClient {
    base_url: String,
    http_client: Client,
}

impl PostsApiClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "Listing posts", skip(self))]
    pub async fn list_posts(&self) -> Result<Response, reqwest::Error> {
        self.http_client
            .get(format!("{}/posts", self.base_url))
            .send()
            .await
    }

    #[tracing::instrument(name = "Listing a page of posts", skip(self))]
    pub async fn list_posts_page(
        &self,
        start: usize,
        end: usize,
    ) -> Result<Response, reqwest::Error> {
        self.http_client
            .get(format!("{}/posts", self.base_url))
            .query(&[("_start", start), ("_end", end)])
            .send()
            .await
    }

    #[tracing::instrument(
        name = "Fetching a post",
        skip(self, post_id),
        fields(post_id = %post_id)
    )]
    pub async fn get_post(&self, post_id: impl Display) -> Result<Response, reqwest::Error> {
        self.http_client
            .get(format!("{}/posts/{}", self.base_url, post_id))
            .send()
            .await
    }

    #[tracing::instrument(name = "Creating a post", skip_all, fields(post_id = ?post.id))]
    pub async fn create_post(&self, post: &NewPost<'_>) -> Result<Response, reqwest::Error> {
        self.http_client
            .post(format!("{}/posts", self.base_url))
            .json(post)
            .send()
            .await
    }

    /// Posts to the protected `/{owner}/posts` route, with a bearer token when one is given.
    #[tracing::instrument(
        name = "Creating an owned post",
        skip(self, post, token),
        fields(authenticated = token.is_some())
    )]
    pub async fn create_owned_post(
        &self,
        owner_id: u64,
        post: &OwnedPost<'_>,
        token: Option<&AccessToken>,
    ) -> Result<Response, reqwest::Error> {
        let mut request = self
            .http_client
            .post(format!("{}/{}/posts", self.base_url, owner_id))
            .json(post);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }
        request.send().await
    }

    #[tracing::instrument(
        name = "Updating a post",
        skip(self, post_id, post),
        fields(post_id = %post_id)
    )]
    pub async fn update_post(
        &self,
        post_id: impl Display,
        post: &NewPost<'_>,
    ) -> Result<Response, reqwest::Error> {
        self.http_client
            .put(format!("{}/posts/{}", self.base_url, post_id))
            .json(post)
            .send()
            .await
    }

    #[tracing::instrument(
        name = "Deleting a post",
        skip(self, post_id),
        fields(post_id = %post_id)
    )]
    pub async fn delete_post(&self, post_id: impl Display) -> Result<Response, reqwest::Error> {
        self.http_client
            .delete(format!("{}/posts/{}", self.base_url, post_id))
            .send()
            .await
    }

    #[tracing::instrument(
        name = "Registering a user",
        skip_all,
        fields(email = %credentials.email)
    )]
    pub async fn register(
        &self,
        credentials: &Credentials<'_>,
    ) -> Result<Response, reqwest::Error> {
        self.http_client
            .post(format!("{}/register", self.base_url))
            .json(&credentials.body())
            .send()
            .await
    }

    #[tracing::instrument(name = "Logging in", skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials<'_>) -> Result<Response, reqwest::Error> {
        self.http_client
            .post(format!("{}/login", self.base_url))
            .json(&credentials.body())
            .send()
            .await
    }
}
