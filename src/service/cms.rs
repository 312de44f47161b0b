//! CMS content store: named sections holding arbitrary JSON blobs.

use crate::error::AppError;
use serde_json::{Map, Value};
use sqlx::PgPool;

/// Reserved section name holding the UI theme configuration.
pub const THEME_SECTION: &str = "theme";

/// Placeholder identity recorded in created_by/updated_by; the service has no
/// authenticated-user propagation.
const SYSTEM_USER: i64 = 1;

pub struct CmsStore;

impl CmsStore {
    /// All active sections as a map from section name to parsed JSON.
    /// Rows whose stored value cannot be decoded are dropped from the output.
    pub async fn get_all_content(pool: &PgPool) -> Result<Map<String, Value>, AppError> {
        let rows: Vec<(String, Option<Value>)> =
            sqlx::query_as("SELECT section, content_data FROM cms_content WHERE is_active = TRUE")
                .fetch_all(pool)
                .await?;

        let mut content = Map::new();
        for (section, data) in rows {
            match data.and_then(decode_stored_json) {
                Some(value) => {
                    content.insert(section, value);
                }
                None => {
                    tracing::warn!(section = %section, "skipping section with undecodable content");
                }
            }
        }
        Ok(content)
    }

    /// Insert or replace one section's content. The UNIQUE constraint on
    /// `section` makes this a single atomic statement.
    pub async fn upsert_section(
        pool: &PgPool,
        section: &str,
        content: &Value,
    ) -> Result<(), AppError> {
        tracing::debug!(section = %section, "upsert cms section");
        sqlx::query(
            r#"
            INSERT INTO cms_content (section, content_data, created_by, updated_by)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (section)
            DO UPDATE SET content_data = EXCLUDED.content_data,
                          updated_by = $3,
                          updated_at = NOW()
            "#,
        )
        .bind(section)
        .bind(content)
        .bind(SYSTEM_USER)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// The stored theme, if any. Returns None when the `theme` section is
    /// absent, inactive, or undecodable; the handler falls back to a default
    /// palette in that case.
    pub async fn get_theme(pool: &PgPool) -> Result<Option<Value>, AppError> {
        let row: Option<(Option<Value>,)> = sqlx::query_as(
            "SELECT content_data FROM cms_content WHERE section = $1 AND is_active = TRUE LIMIT 1",
        )
        .bind(THEME_SECTION)
        .fetch_optional(pool)
        .await?;
        Ok(row.and_then(|(data,)| data).and_then(decode_stored_json))
    }

    pub async fn upsert_theme(pool: &PgPool, theme: &Value) -> Result<(), AppError> {
        Self::upsert_section(pool, THEME_SECTION, theme).await
    }
}

/// Stored values are normally JSON objects, but historical rows may carry JSON
/// encoded a second time as a string. Re-parse those; anything that still
/// fails to decode yields None.
pub(crate) fn decode_stored_json(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) => serde_json::from_str(&s).ok(),
        other => Some(other),
    }
}
