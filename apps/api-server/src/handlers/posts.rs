//! Post operation handlers.
//!
//! Each handler validates its parameters, calls the session and writes the
//! result. Failures short-circuit through `AppError`.

use actix_web::HttpResponse;

use social_core::domain::LikeDelta;
use social_core::ports::PostSession;
use social_shared::dto::PostResponse;

use super::params::QueryParams;
use crate::middleware::error::AppResult;
use crate::response::send_json;

/// GET /posts.get
pub async fn list(posts: &dyn PostSession) -> AppResult<HttpResponse> {
    let body: Vec<PostResponse> = posts
        .list_active()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    send_json(&body)
}

/// GET /posts.getById?id=
pub async fn get_by_id(posts: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
    let id = params.id()?;
    let post = posts.get_active_by_id(id).await?;

    send_json(&PostResponse::from(post))
}

/// GET /posts.post?content=
pub async fn create(posts: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
    let content = params.content()?;
    let post = posts.create(content).await?;
    tracing::info!(post_id = post.id, "Post created");

    send_json(&PostResponse::from(post))
}

/// GET /posts.edit?id=&content=
pub async fn edit(posts: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
    let id = params.id()?;
    let content = params.content()?;
    let post = posts.update_content(id, content).await?;

    send_json(&PostResponse::from(post))
}

/// GET /posts.delete?id=
pub async fn delete(posts: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
    let id = params.id()?;
    let post = posts.set_removed(id, true).await?;
    tracing::info!(post_id = id, "Post removed");

    send_json(&PostResponse::with_removed(post))
}

/// GET /posts.restore?id=
pub async fn restore(posts: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
    let id = params.id()?;
    let post = posts.set_removed(id, false).await?;
    tracing::info!(post_id = id, "Post restored");

    send_json(&PostResponse::with_removed(post))
}

/// GET /posts.like?id=
pub async fn like(posts: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
    adjust(posts, params, LikeDelta::Like).await
}

/// GET /posts.dislike?id=
pub async fn dislike(posts: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
    adjust(posts, params, LikeDelta::Dislike).await
}

async fn adjust(
    posts: &dyn PostSession,
    params: &QueryParams,
    delta: LikeDelta,
) -> AppResult<HttpResponse> {
    let id = params.id()?;
    let post = posts.adjust_likes(id, delta).await?;

    send_json(&PostResponse::from(post))
}
