//! Uniform execution of parameterized SQL against the store.
//!
//! Statements are plain SQL text with `?` placeholders; values are always
//! bound, never interpolated.

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement, Value,
};

use crate::domain::pagination::Pagination;

/// Outcome metadata of a write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub rows_affected: u64,
    pub last_insert_id: u64,
}

/// Thin wrapper over a shared connection handle.
#[derive(Clone)]
pub struct SqlExecutor {
    conn: DatabaseConnection,
}

impl SqlExecutor {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn statement(sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(DbBackend::Sqlite, sql, values)
    }

    /// Insert, update or delete.
    pub async fn run(&self, sql: &str, values: Vec<Value>) -> Result<RunOutcome, DbErr> {
        let res = self.conn.execute(Self::statement(sql, values)).await?;
        Ok(RunOutcome {
            rows_affected: res.rows_affected(),
            last_insert_id: res.last_insert_id(),
        })
    }

    /// First matching row, if any.
    pub async fn get<T: FromQueryResult>(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<Option<T>, DbErr> {
        T::find_by_statement(Self::statement(sql, values))
            .one(&self.conn)
            .await
    }

    /// Every matching row, or one window of them when `page` is given.
    pub async fn all<T: FromQueryResult>(
        &self,
        sql: &str,
        mut values: Vec<Value>,
        page: Option<Pagination>,
    ) -> Result<Vec<T>, DbErr> {
        let stmt = match page {
            Some(p) => {
                values.push(p.limit().into());
                values.push(p.offset().into());
                Self::statement(&paginated(sql), values)
            }
            None => Self::statement(sql, values),
        };
        T::find_by_statement(stmt).all(&self.conn).await
    }

    /// Unparameterized statements, possibly several separated by `;`.
    pub async fn execute_batch(&self, sql: &str) -> Result<(), DbErr> {
        self.conn.execute_unprepared(sql).await?;
        Ok(())
    }
}

fn paginated(sql: &str) -> String {
    format!("{} LIMIT ? OFFSET ?", sql.trim_end().trim_end_matches(';'))
}
