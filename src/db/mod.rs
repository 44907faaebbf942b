pub mod models;

use std::num::NonZeroU32;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn create_pool(database_url: &str, max_connections: NonZeroU32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.get())
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
