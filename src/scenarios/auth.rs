use super::ScenarioContext;
use crate::assertions::{assert_field_eq, assert_status, json_body};
use crate::domain::{LoginResponse, OwnedPost, Post};
use crate::error::ScenarioError;
use reqwest::StatusCode;

fn owned_post(ctx: &ScenarioContext) -> OwnedPost<'_> {
    OwnedPost {
        title: &ctx.user.title,
        text: &ctx.user.content,
    }
}

pub(super) async fn unauthorized_create(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let response = ctx
        .client
        .create_owned_post(ctx.suite.protected_owner_id, &owned_post(ctx), None)
        .await?;
    assert_status(&response, StatusCode::UNAUTHORIZED)
}

pub(super) async fn authenticated_create(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let credentials = ctx.user.credentials();

    let response = ctx.client.register(&credentials).await?;
    assert_status(&response, StatusCode::CREATED)?;

    let response = ctx.client.login(&credentials).await?;
    assert_status(&response, StatusCode::OK)?;
    let login: LoginResponse = json_body(response).await?;
    let token = login
        .into_token()
        .ok_or(ScenarioError::MissingField("accessToken"))?;

    let post = owned_post(ctx);
    let response = ctx
        .client
        .create_owned_post(ctx.suite.protected_owner_id, &post, Some(&token))
        .await?;
    assert_status(&response, StatusCode::CREATED)?;
    let created: Post = json_body(response).await?;
    assert_field_eq("title", post.title, created.title.as_deref())?;
    assert_field_eq("text", post.text, created.text.as_deref())
}
