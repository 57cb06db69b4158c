mod embedded;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use embedded::migrations;
use thiserror::Error;

use tokio_postgres::{Client, NoTls, Row};

use chrono::Utc;

use crate::models::Note;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),
    #[error("note not found: {0}")]
    NotFound(i64),
}

/// Persistence seam for `Note` records. Implemented by the PostgreSQL
/// repository and by an in-memory store used in tests.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Inserts a note with defaults already applied and returns the
    /// persisted entity, including the store-assigned id.
    async fn create(&self, title: String, content: String) -> Result<Note, StoreError>;

    /// All notes, most recently modified first.
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    /// Overwrites only the supplied fields and refreshes the timestamp.
    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, StoreError>;

    /// Hard delete.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

pub struct Repository {
    client: Client,
}

impl Repository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        timestamp: row.get("timestamp"),
    }
}

#[async_trait]
impl NoteStore for Repository {
    async fn create(&self, title: String, content: String) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notes (title, content, timestamp) VALUES ($1, $2, $3) \
                 RETURNING id, title, content, timestamp",
                &[&title, &content, &Utc::now()],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id, title, content, timestamp FROM notes ORDER BY timestamp DESC",
                &[],
            )
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_opt(
                "UPDATE notes SET title = COALESCE($2, title), \
                 content = COALESCE($3, content), timestamp = $4 \
                 WHERE id = $1 RETURNING id, title, content, timestamp",
                &[&id, &title, &content, &Utc::now()],
            )
            .await?;

        row.map(|row| note_from_row(&row))
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        if rows == 1 {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }
}
