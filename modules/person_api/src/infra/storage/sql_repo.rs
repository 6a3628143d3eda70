//! Raw-SQL repository implementations of the domain ports.

use anyhow::Context;
use async_trait::async_trait;

use crate::contract::model::{NewPerson, NewRequestLog, Person, RequestLogEntry};
use crate::domain::pagination::Pagination;
use crate::domain::repo::{PersonsRepository, RequestLogRepository};

use super::executor::SqlExecutor;
use super::rows::{PersonRow, RequestLogRow};

const SELECT_PERSONS: &str = "SELECT * FROM Person";
const SELECT_PERSON: &str = "SELECT * FROM Person WHERE id = ?";
const INSERT_PERSON: &str = "INSERT INTO Person \
     (first_name, last_name, email, birthdate, bio, lucky_number) \
     VALUES (?, ?, ?, ?, ?, ?)";
const UPDATE_PERSON: &str = "UPDATE Person SET \
     first_name = ?, last_name = ?, email = ?, birthdate = ?, bio = ?, lucky_number = ? \
     WHERE id = ?";
const DELETE_PERSON: &str = "DELETE FROM Person WHERE id = ?";

const INSERT_REQUEST_LOG: &str = "INSERT INTO RequestLog (method, url, timestamp) VALUES (?, ?, ?)";
const SELECT_REQUEST_LOGS: &str = "SELECT * FROM RequestLog ORDER BY id DESC";

fn person_values(p: NewPerson) -> Vec<sea_orm::Value> {
    vec![
        p.first_name.into(),
        p.last_name.into(),
        p.email.into(),
        p.birthdate.into(),
        p.bio.into(),
        p.lucky_number.into(),
    ]
}

pub struct SqlPersonsRepository {
    exec: SqlExecutor,
}

impl SqlPersonsRepository {
    pub fn new(exec: SqlExecutor) -> Self {
        Self { exec }
    }
}

#[async_trait]
impl PersonsRepository for SqlPersonsRepository {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>> {
        let row: Option<PersonRow> = self
            .exec
            .get(SELECT_PERSON, vec![id.into()])
            .await
            .context("find_by_id failed")?;
        Ok(row.map(Into::into))
    }

    async fn list(&self, page: Option<Pagination>) -> anyhow::Result<Vec<Person>> {
        let rows: Vec<PersonRow> = self
            .exec
            .all(SELECT_PERSONS, vec![], page)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, p: NewPerson) -> anyhow::Result<i64> {
        let out = self
            .exec
            .run(INSERT_PERSON, person_values(p))
            .await
            .context("insert failed")?;
        i64::try_from(out.last_insert_id).context("insert id out of range")
    }

    async fn update(&self, id: i64, p: NewPerson) -> anyhow::Result<u64> {
        let mut values = person_values(p);
        values.push(id.into());
        let out = self
            .exec
            .run(UPDATE_PERSON, values)
            .await
            .context("update failed")?;
        Ok(out.rows_affected)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<u64> {
        let out = self
            .exec
            .run(DELETE_PERSON, vec![id.into()])
            .await
            .context("delete failed")?;
        Ok(out.rows_affected)
    }
}

pub struct SqlRequestLogRepository {
    exec: SqlExecutor,
}

impl SqlRequestLogRepository {
    pub fn new(exec: SqlExecutor) -> Self {
        Self { exec }
    }
}

#[async_trait]
impl RequestLogRepository for SqlRequestLogRepository {
    async fn insert(&self, entry: NewRequestLog) -> anyhow::Result<i64> {
        let out = self
            .exec
            .run(
                INSERT_REQUEST_LOG,
                vec![entry.method.into(), entry.url.into(), entry.timestamp.into()],
            )
            .await
            .context("request log insert failed")?;
        i64::try_from(out.last_insert_id).context("insert id out of range")
    }

    async fn list_newest_first(&self) -> anyhow::Result<Vec<RequestLogEntry>> {
        let rows: Vec<RequestLogRow> = self
            .exec
            .all(SELECT_REQUEST_LOGS, vec![], None)
            .await
            .context("request log listing failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::storage::connect::{connect, StoreOptions};
    use crate::infra::storage::schema::ensure_schema;

    async fn executor() -> SqlExecutor {
        let exec = SqlExecutor::new(connect(&StoreOptions::in_memory()).await.unwrap());
        ensure_schema(&exec).await.unwrap();
        exec
    }

    fn person(first: &str) -> NewPerson {
        NewPerson {
            first_name: first.into(),
            last_name: "Tester".into(),
            email: format!("{}@example.com", first.to_lowercase()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn person_crud_against_sqlite() {
        let repo = SqlPersonsRepository::new(executor().await);

        let id = repo
            .insert(NewPerson {
                bio: Some("Likes tests".into()),
                lucky_number: Some(42),
                ..person("Ada")
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Ada");
        assert_eq!(found.bio.as_deref(), Some("Likes tests"));
        assert_eq!(found.lucky_number, Some(42));
        assert_eq!(found.birthdate, None);

        assert_eq!(repo.update(id, person("Grace")).await.unwrap(), 1);
        let updated = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(updated.first_name, "Grace");
        assert_eq!(updated.lucky_number, None);

        assert_eq!(repo.update(99, person("Nobody")).await.unwrap(), 0);
        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_pages_in_store_order() {
        let repo = SqlPersonsRepository::new(executor().await);
        for i in 0..7 {
            repo.insert(person(&format!("P{i}"))).await.unwrap();
        }

        let page = repo.list(Pagination::new(2, 3)).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|p| p.id).collect();
        assert_eq!(ids, [4, 5, 6]);
        assert_eq!(repo.list(None).await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn request_logs_are_listed_newest_first() {
        let repo = SqlRequestLogRepository::new(executor().await);
        for url in ["/a", "/b", "/c"] {
            repo.insert(NewRequestLog {
                method: "GET".into(),
                url: url.into(),
                timestamp: "2024-05-01T10:00:00.000Z".into(),
            })
            .await
            .unwrap();
        }
        let urls: Vec<String> = repo
            .list_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.url)
            .collect();
        assert_eq!(urls, ["/c", "/b", "/a"]);
    }

    #[tokio::test]
    async fn missing_table_error_keeps_store_message() {
        let exec = SqlExecutor::new(connect(&StoreOptions::in_memory()).await.unwrap());
        let repo = SqlPersonsRepository::new(exec);
        let err = repo.find_by_id(1).await.unwrap_err();
        assert!(format!("{err:#}").contains("find_by_id failed"));
        assert!(err.root_cause().to_string().contains("no such table"));
    }
}
