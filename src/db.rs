use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Connects to the store and applies the embedded migrations, so a freshly
/// created database is immediately usable.
pub async fn init_db(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::debug!("database ready, migrations applied");

    Ok(pool)
}
