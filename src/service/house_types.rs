//! House-type catalog: soft-deletable, orderable CRUD over the `house_types` table.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HouseTypeRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_start: Option<i64>,
    pub type_category: String,
    pub land_size: Option<String>,
    pub building_size: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub floors: i32,
    pub carport: i32,
    pub image_url: Option<String>,
    pub features: Option<Value>,
    pub specifications: Option<Value>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HouseTypeRow {
    /// Older rows may store `features`/`specifications` as JSON encoded a
    /// second time into a string. Decode those in place; values that are
    /// already arrays/objects pass through.
    fn normalized(mut self) -> Self {
        self.features = self.features.map(normalize_json_column);
        self.specifications = self.specifications.map(normalize_json_column);
        self
    }
}

fn normalize_json_column(value: Value) -> Value {
    match value {
        Value::String(s) => serde_json::from_str(&s).unwrap_or(Value::String(s)),
        other => other,
    }
}

/// Client-supplied catalog fields. Any subset may be present; unknown JSON
/// keys are ignored, so column lists are only ever built from this fixed set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseTypePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_start: Option<i64>,
    pub type_category: Option<String>,
    pub land_size: Option<String>,
    pub building_size: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floors: Option<i32>,
    pub carport: Option<i32>,
    pub image_url: Option<String>,
    pub features: Option<Value>,
    pub specifications: Option<Value>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl HouseTypePayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price_start.is_none()
            && self.type_category.is_none()
            && self.land_size.is_none()
            && self.building_size.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.floors.is_none()
            && self.carport.is_none()
            && self.image_url.is_none()
            && self.features.is_none()
            && self.specifications.is_none()
            && self.is_active.is_none()
            && self.display_order.is_none()
    }
}

/// The exact column values `create` binds, catalog defaults already applied
/// for omitted fields.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewHouseType<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price_start: Option<i64>,
    pub type_category: &'a str,
    pub land_size: Option<&'a str>,
    pub building_size: Option<&'a str>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub floors: i32,
    pub carport: i32,
    pub image_url: Option<&'a str>,
    pub features: Option<&'a Value>,
    pub specifications: Option<&'a Value>,
    pub is_active: bool,
    pub display_order: i32,
}

impl<'a> NewHouseType<'a> {
    pub(crate) fn from_payload(p: &'a HouseTypePayload) -> Result<Self, AppError> {
        let name = p
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Name is required".into()))?;
        Ok(NewHouseType {
            name,
            description: p.description.as_deref(),
            price_start: p.price_start,
            type_category: p.type_category.as_deref().unwrap_or("Modern"),
            land_size: p.land_size.as_deref(),
            building_size: p.building_size.as_deref(),
            bedrooms: p.bedrooms.unwrap_or(0),
            bathrooms: p.bathrooms.unwrap_or(0),
            floors: p.floors.unwrap_or(1),
            carport: p.carport.unwrap_or(0),
            image_url: p.image_url.as_deref(),
            features: p.features.as_ref(),
            specifications: p.specifications.as_ref(),
            is_active: p.is_active.unwrap_or(true),
            display_order: p.display_order.unwrap_or(0),
        })
    }
}

pub struct HouseTypeStore;

impl HouseTypeStore {
    /// All house types ordered by display_order, then id. Inactive rows are
    /// excluded unless asked for.
    pub async fn get_all(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<HouseTypeRow>, AppError> {
        let sql = if include_inactive {
            "SELECT * FROM house_types ORDER BY display_order ASC, id ASC"
        } else {
            "SELECT * FROM house_types WHERE is_active = TRUE ORDER BY display_order ASC, id ASC"
        };
        let rows: Vec<HouseTypeRow> = sqlx::query_as(sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(HouseTypeRow::normalized).collect())
    }

    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<HouseTypeRow>, AppError> {
        let row: Option<HouseTypeRow> =
            sqlx::query_as("SELECT * FROM house_types WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(HouseTypeRow::normalized))
    }

    pub async fn get_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<HouseTypeRow>, AppError> {
        let rows: Vec<HouseTypeRow> = sqlx::query_as(
            r#"
            SELECT * FROM house_types
            WHERE type_category = $1 AND is_active = TRUE
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(HouseTypeRow::normalized).collect())
    }

    /// Insert a new house type, applying catalog defaults for omitted fields.
    /// Returns the new row id.
    pub async fn create(pool: &PgPool, p: &HouseTypePayload) -> Result<i64, AppError> {
        let values = NewHouseType::from_payload(p)?;
        tracing::debug!(name = %values.name, "create house type");
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO house_types
                (name, description, price_start, type_category, land_size, building_size,
                 bedrooms, bathrooms, floors, carport, image_url, features, specifications,
                 is_active, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id
            "#,
        )
        .bind(values.name)
        .bind(values.description)
        .bind(values.price_start)
        .bind(values.type_category)
        .bind(values.land_size)
        .bind(values.building_size)
        .bind(values.bedrooms)
        .bind(values.bathrooms)
        .bind(values.floors)
        .bind(values.carport)
        .bind(values.image_url)
        .bind(values.features)
        .bind(values.specifications)
        .bind(values.is_active)
        .bind(values.display_order)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Update only the fields present in the payload. Returns false when no
    /// row has that id.
    pub async fn update(pool: &PgPool, id: i64, p: &HouseTypePayload) -> Result<bool, AppError> {
        if p.is_empty() {
            return Err(AppError::BadRequest("No data provided".into()));
        }
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE house_types SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(v) = &p.name {
                set.push("name = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.description {
                set.push("description = ").push_bind_unseparated(v);
            }
            if let Some(v) = p.price_start {
                set.push("price_start = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.type_category {
                set.push("type_category = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.land_size {
                set.push("land_size = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.building_size {
                set.push("building_size = ").push_bind_unseparated(v);
            }
            if let Some(v) = p.bedrooms {
                set.push("bedrooms = ").push_bind_unseparated(v);
            }
            if let Some(v) = p.bathrooms {
                set.push("bathrooms = ").push_bind_unseparated(v);
            }
            if let Some(v) = p.floors {
                set.push("floors = ").push_bind_unseparated(v);
            }
            if let Some(v) = p.carport {
                set.push("carport = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.image_url {
                set.push("image_url = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.features {
                set.push("features = ").push_bind_unseparated(v);
            }
            if let Some(v) = &p.specifications {
                set.push("specifications = ").push_bind_unseparated(v);
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
        tracing::debug!(id, sql = %qb.sql(), "update house type");
        let result = qb.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft delete: flip is_active off, never remove the row.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE house_types SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn toggle_active(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE house_types SET is_active = NOT is_active WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the row's display_order. No uniqueness or gap-filling guarantee:
    /// concurrent reorders are last-write-wins and may leave duplicate values.
    pub async fn reorder(pool: &PgPool, id: i64, display_order: i32) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE house_types SET display_order = $2 WHERE id = $1")
            .bind(id)
            .bind(display_order)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stringified_features_are_decoded() {
        let v = Value::String(r#"["Garden", "Smart Home"]"#.to_string());
        assert_eq!(normalize_json_column(v), json!(["Garden", "Smart Home"]));
    }

    #[test]
    fn plain_text_features_are_kept_verbatim() {
        let v = Value::String("just a sentence".to_string());
        assert_eq!(normalize_json_column(v), Value::String("just a sentence".into()));
    }

    #[test]
    fn arrays_are_untouched() {
        let v = json!(["Carport"]);
        assert_eq!(normalize_json_column(v.clone()), v);
    }

    #[test]
    fn payload_from_empty_object_is_empty() {
        let p: HouseTypePayload = serde_json::from_str("{}").unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn payload_with_one_field_is_not_empty() {
        let p: HouseTypePayload = serde_json::from_str(r#"{"display_order": 3}"#).unwrap();
        assert!(!p.is_empty());
        assert_eq!(p.display_order, Some(3));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let p: HouseTypePayload =
            serde_json::from_str(r#"{"name": "Type A", "drop_table": "x"}"#).unwrap();
        assert_eq!(p.name.as_deref(), Some("Type A"));
    }

    #[test]
    fn minimal_payload_deserializes_catalog_fields() {
        let p: HouseTypePayload = serde_json::from_str(
            r#"{"name": "Minimalist 36", "price_start": 850000000, "land_size": "10x15 m"}"#,
        )
        .unwrap();
        assert_eq!(p.price_start, Some(850000000));
        assert_eq!(p.land_size.as_deref(), Some("10x15 m"));
        assert!(p.type_category.is_none());
    }

    #[test]
    fn name_only_payload_gets_every_catalog_default() {
        let p: HouseTypePayload = serde_json::from_str(r#"{"name": "Type A"}"#).unwrap();
        let values = NewHouseType::from_payload(&p).unwrap();
        assert_eq!(values.name, "Type A");
        assert_eq!(values.type_category, "Modern");
        assert_eq!(values.bedrooms, 0);
        assert_eq!(values.bathrooms, 0);
        assert_eq!(values.floors, 1);
        assert_eq!(values.carport, 0);
        assert!(values.is_active);
        assert_eq!(values.display_order, 0);
        assert_eq!(values.description, None);
        assert_eq!(values.price_start, None);
        assert_eq!(values.features, None);
        assert_eq!(values.specifications, None);
    }

    #[test]
    fn provided_fields_override_catalog_defaults() {
        let p: HouseTypePayload = serde_json::from_str(
            r#"{"name": "Loft", "type_category": "Industrial", "floors": 2, "is_active": false}"#,
        )
        .unwrap();
        let values = NewHouseType::from_payload(&p).unwrap();
        assert_eq!(values.type_category, "Industrial");
        assert_eq!(values.floors, 2);
        assert!(!values.is_active);
        // Untouched fields still default.
        assert_eq!(values.carport, 0);
    }

    #[test]
    fn blank_name_is_rejected() {
        let p: HouseTypePayload = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert!(NewHouseType::from_payload(&p).is_err());
    }

    /// DB-backed cases run only when DATABASE_URL points at a live database.
    async fn test_pool() -> Option<PgPool> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .ok()?;
        crate::store::ensure_tables(&pool).await.ok()?;
        Some(pool)
    }

    #[tokio::test]
    async fn create_persists_documented_defaults() {
        let Some(pool) = test_pool().await else { return };
        let p = HouseTypePayload {
            name: Some(format!("Defaults Check {}", std::process::id())),
            ..Default::default()
        };
        let id = HouseTypeStore::create(&pool, &p).await.unwrap();
        let row = HouseTypeStore::get_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(row.type_category, "Modern");
        assert_eq!(row.bedrooms, 0);
        assert_eq!(row.bathrooms, 0);
        assert_eq!(row.floors, 1);
        assert_eq!(row.carport, 0);
        assert!(row.is_active);
        assert_eq!(row.display_order, 0);
        sqlx::query("DELETE FROM house_types WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn soft_delete_keeps_row_reachable_via_include_inactive() {
        let Some(pool) = test_pool().await else { return };
        let p = HouseTypePayload {
            name: Some(format!("Soft Delete Check {}", std::process::id())),
            ..Default::default()
        };
        let id = HouseTypeStore::create(&pool, &p).await.unwrap();

        assert!(HouseTypeStore::delete(&pool, id).await.unwrap());
        let active = HouseTypeStore::get_all(&pool, false).await.unwrap();
        assert!(active.iter().all(|r| r.id != id));
        let all = HouseTypeStore::get_all(&pool, true).await.unwrap();
        let row = all.iter().find(|r| r.id == id).unwrap();
        assert!(!row.is_active);

        // A nonexistent id reports not-found and mutates nothing.
        assert!(!HouseTypeStore::delete(&pool, i64::MAX).await.unwrap());

        sqlx::query("DELETE FROM house_types WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn reorder_touches_only_the_target_row() {
        let Some(pool) = test_pool().await else { return };
        let mk = |n: u32| HouseTypePayload {
            name: Some(format!("Reorder Check {} {}", std::process::id(), n)),
            ..Default::default()
        };
        let first = HouseTypeStore::create(&pool, &mk(1)).await.unwrap();
        let second = HouseTypeStore::create(&pool, &mk(2)).await.unwrap();

        assert!(HouseTypeStore::reorder(&pool, first, 7).await.unwrap());
        let moved = HouseTypeStore::get_by_id(&pool, first).await.unwrap().unwrap();
        let untouched = HouseTypeStore::get_by_id(&pool, second).await.unwrap().unwrap();
        assert_eq!(moved.display_order, 7);
        assert_eq!(untouched.display_order, 0);
        assert!(untouched.is_active);

        for id in [first, second] {
            sqlx::query("DELETE FROM house_types WHERE id = $1")
                .bind(id)
                .execute(&pool)
                .await
                .unwrap();
        }
    }
}
