//! Contact-form inbox: visitor messages with a read flag.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

pub struct ContactStore;

impl ContactStore {
    pub async fn submit(pool: &PgPool, p: &ContactPayload) -> Result<i64, AppError> {
        let required = [&p.name, &p.email, &p.message];
        if required
            .iter()
            .any(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
        {
            return Err(AppError::BadRequest(
                "Name, email, and message are required".into(),
            ));
        }
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&p.name)
        .bind(&p.email)
        .bind(&p.subject)
        .bind(&p.message)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    pub async fn get_all(pool: &PgPool) -> Result<Vec<ContactMessageRow>, AppError> {
        let rows = sqlx::query_as(
            "SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_unread(pool: &PgPool) -> Result<Vec<ContactMessageRow>, AppError> {
        let rows = sqlx::query_as(
            r#"
            SELECT * FROM contact_messages
            WHERE is_read = FALSE
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn mark_read(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
