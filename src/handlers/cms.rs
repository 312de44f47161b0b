//! CMS endpoints: dynamic page content and theme configuration.

use crate::error::AppError;
use crate::service::CmsStore;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Serialize)]
pub struct ContentBody {
    pub status: &'static str,
    pub content: Map<String, Value>,
}

#[derive(Serialize)]
pub struct ThemeBody {
    pub status: &'static str,
    pub theme: Value,
}

#[derive(Deserialize)]
pub struct UpdateContentRequest {
    pub section: Option<String>,
    pub content: Option<Value>,
}

#[derive(Deserialize)]
pub struct UpdateThemeRequest {
    pub theme: Option<Value>,
}

/// GET /api/cms/content — all active sections, keyed by section name.
pub async fn get_content(State(state): State<AppState>) -> Result<Json<ContentBody>, AppError> {
    let content = CmsStore::get_all_content(&state.pool).await?;
    Ok(Json(ContentBody {
        status: "success",
        content,
    }))
}

/// PUT /api/cms/content — upsert one section, return the refreshed full map.
pub async fn update_content(
    State(state): State<AppState>,
    Json(body): Json<UpdateContentRequest>,
) -> Result<Json<ContentBody>, AppError> {
    let section = body
        .section
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Section is required".into()))?;
    let content = body.content.unwrap_or(Value::Null);
    CmsStore::upsert_section(&state.pool, section, &content).await?;
    let content = CmsStore::get_all_content(&state.pool).await?;
    Ok(Json(ContentBody {
        status: "success",
        content,
    }))
}

/// GET /api/cms/theme — stored theme, or the default palette when absent.
pub async fn get_theme(State(state): State<AppState>) -> Result<Json<ThemeBody>, AppError> {
    let theme = CmsStore::get_theme(&state.pool)
        .await?
        .filter(has_theme_content)
        .unwrap_or_else(default_theme);
    Ok(Json(ThemeBody {
        status: "success",
        theme,
    }))
}

/// Whether a stored theme value counts as present. Empty containers, empty
/// strings, zero, false, and null all fall back to the default palette; any
/// other stored value is served as-is, even when it is not an object.
fn has_theme_content(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// PUT /api/cms/theme — replace the theme; rejects a missing or empty object.
pub async fn update_theme(
    State(state): State<AppState>,
    Json(body): Json<UpdateThemeRequest>,
) -> Result<Json<ThemeBody>, AppError> {
    let theme = body
        .theme
        .filter(|t| t.as_object().is_some_and(|o| !o.is_empty()))
        .ok_or_else(|| AppError::BadRequest("Theme object required".into()))?;
    CmsStore::upsert_theme(&state.pool, &theme).await?;
    Ok(Json(ThemeBody {
        status: "success",
        theme,
    }))
}

/// Default dark palette served when no theme row exists.
pub fn default_theme() -> Value {
    json!({
        "navbarColor": "#0a0a0a",
        "navbarTextColor": "#ffffff",
        "fontFamily": "'Inter', 'Poppins', 'Segoe UI', sans-serif",
        "homeBgColor": "#000000",
        "aboutBgColor": "#000000",
        "newsBgColor": "#000000",
        "faqBgColor": "#000000",
        "qnaBgColor": "#000000",
        "contactBgColor": "#000000",
        "layoutBgColor": "#0a0a0a",
        "tourBgColor": "#000000"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_full_palette() {
        let theme = default_theme();
        let obj = theme.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert_eq!(theme["navbarColor"], "#0a0a0a");
        assert_eq!(theme["navbarTextColor"], "#ffffff");
        assert_eq!(theme["layoutBgColor"], "#0a0a0a");
        assert_eq!(theme["homeBgColor"], "#000000");
        assert_eq!(theme["tourBgColor"], "#000000");
        assert_eq!(
            theme["fontFamily"],
            "'Inter', 'Poppins', 'Segoe UI', sans-serif"
        );
    }

    #[test]
    fn update_content_request_tolerates_missing_fields() {
        let req: UpdateContentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.section.is_none());
        assert!(req.content.is_none());
    }

    #[test]
    fn non_object_stored_themes_are_still_served() {
        // A theme stored as an array (written via the generic content
        // endpoint) must not be masked by the default palette.
        assert!(has_theme_content(&json!(["#000000", "#ffffff"])));
        assert!(has_theme_content(&json!("dark")));
        assert!(has_theme_content(&json!({"navbarColor": "#111111"})));
    }

    #[test]
    fn empty_or_falsy_stored_themes_fall_back_to_default() {
        assert!(!has_theme_content(&json!({})));
        assert!(!has_theme_content(&json!([])));
        assert!(!has_theme_content(&json!("")));
        assert!(!has_theme_content(&json!(0)));
        assert!(!has_theme_content(&json!(false)));
        assert!(!has_theme_content(&Value::Null));
    }
}
