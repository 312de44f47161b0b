//! Social media links shown in the site footer.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialMediaRow {
    pub id: i64,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialMediaPayload {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl SocialMediaPayload {
    pub fn is_empty(&self) -> bool {
        self.platform.is_none()
            && self.url.is_none()
            && self.icon.is_none()
            && self.is_active.is_none()
            && self.display_order.is_none()
    }
}

pub struct SocialMediaStore;

impl SocialMediaStore {
    pub async fn get_all(pool: &PgPool) -> Result<Vec<SocialMediaRow>, AppError> {
        let rows = sqlx::query_as("SELECT * FROM social_media ORDER BY display_order ASC, id ASC")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_active(pool: &PgPool) -> Result<Vec<SocialMediaRow>, AppError> {
        let rows = sqlx::query_as(
            "SELECT * FROM social_media WHERE is_active = TRUE ORDER BY display_order ASC, id ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(pool: &PgPool, p: &SocialMediaPayload) -> Result<i64, AppError> {
        let platform = p
            .platform
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Platform and URL are required".into()))?;
        let url = p
            .url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Platform and URL are required".into()))?;
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO social_media (platform, url, icon, is_active, display_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(platform)
        .bind(url)
        .bind(&p.icon)
        .bind(p.is_active.unwrap_or(true))
        .bind(p.display_order.unwrap_or(0))
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    pub async fn update(pool: &PgPool, id: i64, p: &SocialMediaPayload) -> Result<bool, AppError> {
        if p.is_empty() {
            return Err(AppError::BadRequest("No data provided".into()));
        }
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE social_media SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(v) = &p.platform {
                set.push("platform = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.url {
                set.push("url = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.icon {
                set.push("icon = ").push_bind_unseparated(v);
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

    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM social_media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
