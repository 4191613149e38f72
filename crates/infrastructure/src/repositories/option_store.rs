use async_trait::async_trait;
use mailgate_application::ports::WhitelistStore;
use mailgate_domain::{DomainError, Whitelist};
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Name of the options row holding the whitelist.
const WHITELIST_OPTION: &str = "registration_whitelist";

/// Key/value adapter over the `options` table. The whitelist lives in a
/// single JSON-encoded row, so replacing it is one atomic UPSERT.
pub struct SqliteOptionStore {
    pool: SqlitePool,
}

impl SqliteOptionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WhitelistStore for SqliteOptionStore {
    async fn get(&self) -> Result<Whitelist, DomainError> {
        let row = sqlx::query("SELECT value FROM options WHERE name = ?")
            .bind(WHITELIST_OPTION)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => {
                let value: String = row.get("value");
                let domains: Vec<String> = serde_json::from_str(&value).map_err(|e| {
                    DomainError::DatabaseError(format!("corrupt whitelist value: {e}"))
                })?;
                Ok(Whitelist::new(domains))
            }
            None => Ok(Whitelist::default()),
        }
    }

    async fn set(&self, whitelist: &Whitelist) -> Result<(), DomainError> {
        let value = serde_json::to_string(whitelist.domains())
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query(
            "INSERT INTO options (name, value) VALUES (?, ?)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value",
        )
        .bind(WHITELIST_OPTION)
        .bind(&value)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        debug!(count = whitelist.len(), "Whitelist persisted");
        Ok(())
    }
}
