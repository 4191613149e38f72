use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

const MIGRATIONS_DIR: &str = "./migrations";
const MAX_CONNECTIONS: u32 = 5;

/// Opens the sqlite database, creating the file on first run, and
/// brings the schema up to date before handing out the pool.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    Migrator::new(Path::new(MIGRATIONS_DIR))
        .await?
        .run(&pool)
        .await?;

    Ok(pool)
}
