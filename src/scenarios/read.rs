use super::ScenarioContext;
use crate::assertions::{
    assert_header_contains, assert_len, assert_post_id, assert_status, json_body,
};
use crate::domain::Post;
use crate::error::ScenarioError;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

pub(super) async fn list_all_posts(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let response = ctx.client.list_posts().await?;
    assert_status(&response, StatusCode::OK)?;
    assert_header_contains(&response, CONTENT_TYPE, "application/json")
}

pub(super) async fn paginated_list(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    let suite = &ctx.suite;
    let response = ctx
        .client
        .list_posts_page(suite.page_start, suite.page_end)
        .await?;
    assert_status(&response, StatusCode::OK)?;
    let posts: Vec<serde_json::Value> = json_body(response).await?;
    assert_len(suite.expected_page_len(), posts.len())
}

pub(super) async fn get_by_id(ctx: &ScenarioContext) -> Result<(), ScenarioError> {
    for &post_id in &ctx.suite.known_post_ids {
        let response = ctx.client.get_post(post_id).await?;
        assert_status(&response, StatusCode::OK)?;
        let post: Post = json_body(response).await?;
        assert_post_id(&post, post_id)?;
    }
    Ok(())
}
