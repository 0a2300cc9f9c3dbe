use axum::http::StatusCode;
use axum::{extract::Path, Extension, Json};
use sqlx::PgPool;
use uuid::Uuid;

use crate::http_error::AppError;
use crate::plugins::posts::models::{AuthorName, CreatePost, PostDto, UpdatePost};
use crate::plugins::posts::repo;

// Presence is enforced by the typed body; emptiness is checked here so the
// client gets a 400 naming the field instead of a store error.
fn check_fields(author: &AuthorName, title: &str, content: &str) -> Result<(), AppError> {
    if author.first_name.trim().is_empty() {
        return Err(AppError::bad_request("author.firstName must be non-empty"));
    }
    if author.last_name.trim().is_empty() {
        return Err(AppError::bad_request("author.lastName must be non-empty"));
    }
    if title.is_empty() {
        return Err(AppError::bad_request("title must be non-empty"));
    }
    if content.is_empty() {
        return Err(AppError::bad_request("content must be non-empty"));
    }
    Ok(())
}

pub async fn create_post(
    Extension(pool): Extension<PgPool>,
    Json(payload): Json<CreatePost>,
) -> Result<(StatusCode, Json<PostDto>), AppError> {
    check_fields(&payload.author, &payload.title, &payload.content)?;

    let rec = repo::insert_post(
        &pool,
        &payload.author.first_name,
        &payload.author.last_name,
        &payload.title,
        &payload.content,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(rec.into())))
}

pub async fn list_posts(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<PostDto>>, AppError> {
    let recs = repo::list_posts(&pool).await?;
    Ok(Json(recs.into_iter().map(PostDto::from).collect()))
}

pub async fn get_post(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostDto>, AppError> {
    let rec = repo::get_post(&pool, id).await?;
    Ok(Json(rec.into()))
}

pub async fn update_post(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePost>,
) -> Result<StatusCode, AppError> {
    check_fields(&payload.author, &payload.title, &payload.content)?;

    repo::update_post(
        &pool,
        id,
        &payload.author.first_name,
        &payload.author.last_name,
        &payload.title,
        &payload.content,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_post(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo::delete_post(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
