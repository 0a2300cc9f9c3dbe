use crate::http_error::AppError;
use crate::plugins::posts::models::PostRecord;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn insert_post(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    title: &str,
    content: &str,
) -> Result<PostRecord, AppError> {
    let rec = sqlx::query_as::<_, PostRecord>(
        "INSERT INTO posts (first_name, last_name, title, content) VALUES ($1,$2,$3,$4) RETURNING id, first_name, last_name, title, content, created",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await
    .map_err(AppError::from)?;
    Ok(rec)
}

pub async fn list_posts(pool: &PgPool) -> Result<Vec<PostRecord>, AppError> {
    let recs = sqlx::query_as::<_, PostRecord>(
        "SELECT id, first_name, last_name, title, content, created FROM posts ORDER BY created DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(AppError::from)?;
    Ok(recs)
}

pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<PostRecord, AppError> {
    let rec = sqlx::query_as::<_, PostRecord>(
        "SELECT id, first_name, last_name, title, content, created FROM posts WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .map_err(AppError::from)?;
    Ok(rec)
}

/// Replaces author/title/content in place; id and created are untouched.
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    first_name: &str,
    last_name: &str,
    title: &str,
    content: &str,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE posts SET first_name = $1, last_name = $2, title = $3, content = $4 WHERE id = $5",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(title)
    .bind(content)
    .bind(id)
    .execute(pool)
    .await
    .map_err(AppError::from)?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("notFound"));
    }
    Ok(())
}

pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::from)?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("notFound"));
    }
    Ok(())
}
