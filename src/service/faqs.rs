//! FAQ store: orderable question/answer rows grouped by category.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FaqRow {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl FaqPayload {
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.answer.is_none()
            && self.category.is_none()
            && self.is_active.is_none()
            && self.display_order.is_none()
    }
}

pub struct FaqStore;

impl FaqStore {
    pub async fn get_all(pool: &PgPool) -> Result<Vec<FaqRow>, AppError> {
        let rows = sqlx::query_as("SELECT * FROM faqs ORDER BY display_order ASC, id ASC")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_active(pool: &PgPool) -> Result<Vec<FaqRow>, AppError> {
        let rows = sqlx::query_as(
            "SELECT * FROM faqs WHERE is_active = TRUE ORDER BY display_order ASC, id ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_category(pool: &PgPool, category: &str) -> Result<Vec<FaqRow>, AppError> {
        let rows = sqlx::query_as(
            r#"
            SELECT * FROM faqs
            WHERE category = $1 AND is_active = TRUE
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<FaqRow>, AppError> {
        let row = sqlx::query_as("SELECT * FROM faqs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, p: &FaqPayload) -> Result<i64, AppError> {
        let question = p
            .question
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Question and answer are required".into()))?;
        let answer = p
            .answer
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Question and answer are required".into()))?;
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO faqs (question, answer, category, is_active, display_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(question)
        .bind(answer)
        .bind(p.category.as_deref().unwrap_or("general"))
        .bind(p.is_active.unwrap_or(true))
        .bind(p.display_order.unwrap_or(0))
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    pub async fn update(pool: &PgPool, id: i64, p: &FaqPayload) -> Result<bool, AppError> {
        if p.is_empty() {
            return Err(AppError::BadRequest("No data provided".into()));
        }
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE faqs SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(v) = &p.question {
                set.push("question = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.answer {
                set.push("answer = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.category {
                set.push("category = ").push_bind_unseparated(v);
            }
            if let Some(v) = p.is_active {
                set.push("is_active = ").push_bind_unseparated(v);
            }
            if let Some(v) = p.display_order {
                set.push("display_order = ").push_bind_unseparated(v);
            }
            set.push("updated_at = NOW()");
        }
        qb.push(" WHERE id = ").push_bind(id);
        let result = qb.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard delete; FAQs carry no history.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_fields_is_empty() {
        let p: FaqPayload = serde_json::from_str("{}").unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn payload_deserializes_known_fields() {
        let p: FaqPayload = serde_json::from_str(
            r#"{"question": "Do you deliver?", "answer": "Yes.", "category": "shipping"}"#,
        )
        .unwrap();
        assert_eq!(p.category.as_deref(), Some("shipping"));
        assert!(!p.is_empty());
    }
}
