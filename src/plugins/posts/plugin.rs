use crate::kernel::Plugin;
use crate::plugins::posts::handlers::*;
use axum::{routing::delete, routing::get, routing::post, routing::put, Extension, Router};
use sqlx::PgPool;

pub struct PostsPlugin {
    pub pool: PgPool,
}

impl PostsPlugin {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Plugin for PostsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", post(create_post))
            .route("/", get(list_posts))
            .route("/:id", get(get_post))
            .route("/:id", put(update_post))
            .route("/:id", delete(delete_post))
            .layer(Extension(self.pool.clone()))
    }

    fn name(&self) -> &'static str {
        "posts"
    }
}
