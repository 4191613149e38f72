use mailgate_infrastructure::SqliteOptionStore;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub whitelist_store: Arc<SqliteOptionStore>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            whitelist_store: Arc::new(SqliteOptionStore::new(pool)),
        }
    }
}
