use anyhow::Context;

use super::executor::SqlExecutor;

pub const PERSON_TABLE: &str = "Person";
pub const REQUEST_LOG_TABLE: &str = "RequestLog";

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS RequestLog (
    id INTEGER PRIMARY KEY,
    method TEXT NOT NULL,
    url TEXT NOT NULL,
    timestamp TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS Person (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    birthdate TEXT,
    bio TEXT,
    lucky_number INTEGER
);
";

/// Create both tables unless they already exist. Safe to call on every start.
pub async fn ensure_schema(exec: &SqlExecutor) -> anyhow::Result<()> {
    exec.execute_batch(CREATE_TABLES)
        .await
        .context("failed to create tables")?;
    tracing::debug!(tables = ?[PERSON_TABLE, REQUEST_LOG_TABLE], "Schema ready");
    Ok(())
}
