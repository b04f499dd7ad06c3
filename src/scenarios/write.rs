use super::ScenarioContext;
use crate::assertions::{assert_field_eq, assert_status, json_body};
use crate::domain::{NewPost, Post};
use crate::error::ScenarioError;
use reqwest::StatusCode;

fn original_post(ctx: &ScenarioContext, id: Option<u32>) -> NewPost<'_> {
    NewPost {
        id,
        title: &ctx.user.title,
        content: &ctx.user.content,
        author: &ctx.user.author,
    }
}

fn updated_post(ctx: &ScenarioContext) -> NewPost<'_> {
    NewPost {
        id: None,
        title: &ctx.user.title,
        content: &ctx.user.content_updated,
        author: &ctx.user.author,
    }
}

pub(super) async fn public_create(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let response = ctx.client.create_post(&original_post(ctx, None)).await?;
    assert_status(&response, StatusCode::CREATED)
}

pub(super) async fn update_non_existing(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let response = ctx
        .client
        .update_post(ctx.user.post_id, &updated_post(ctx))
        .await?;
    assert_status(&response, StatusCode::NOT_FOUND)
}

pub(super) async fn create_then_update(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let post_id = ctx.user.post_id;

    let response = ctx
        .client
        .create_post(&original_post(ctx, Some(post_id)))
        .await?;
    assert_status(&response, StatusCode::CREATED)?;

    let update = updated_post(ctx);
    let response = ctx.client.update_post(post_id, &update).await?;
    assert_status(&response, StatusCode::OK)?;
    let updated: Post = json_body(response).await?;
    assert_field_eq("content", update.content, updated.content.as_deref())
}

pub(super) async fn delete_non_existing(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    // A word can never collide with a numeric id
    let response = ctx.client.delete_post(&ctx.user.title).await?;
    assert_status(&response, StatusCode::NOT_FOUND)
}

pub(super) async fn delete_then_verify_gone(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let post_id = ctx.user.post_id;

    let response = ctx.client.delete_post(post_id).await?;
    assert_status(&response, StatusCode::OK)?;

    let response = ctx.client.get_post(post_id).await?;
    assert_status(&response, StatusCode::NOT_FOUND)
}
