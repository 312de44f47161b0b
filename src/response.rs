//! Standard `{status: "success", ...}` envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessData<T> {
    pub status: &'static str,
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessList<T> {
    pub status: &'static str,
    pub data: Vec<T>,
    pub count: u64,
}

#[derive(Serialize)]
pub struct SuccessMessage {
    pub status: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct SuccessCreated {
    pub status: &'static str,
    pub message: String,
    pub id: i64,
}

pub fn success_data<T: Serialize>(data: T) -> (StatusCode, Json<SuccessData<T>>) {
    (
        StatusCode::OK,
        Json(SuccessData {
            status: "success",
            data,
        }),
    )
}

pub fn success_list<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<SuccessList<T>>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(SuccessList {
            status: "success",
            data,
            count,
        }),
    )
}

pub fn success_message(message: impl Into<String>) -> (StatusCode, Json<SuccessMessage>) {
    (
        StatusCode::OK,
        Json(SuccessMessage {
            status: "success",
            message: message.into(),
        }),
    )
}

pub fn success_created(id: i64, message: impl Into<String>) -> (StatusCode, Json<SuccessCreated>) {
    (
        StatusCode::CREATED,
        Json(SuccessCreated {
            status: "success",
            message: message.into(),
            id,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_carries_count() {
        let (status, Json(body)) = success_list(vec![1, 2, 3]);
        assert_eq!(status, StatusCode::OK);
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["count"], 3);
        assert_eq!(v["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn created_envelope_is_201_with_id() {
        let (status, Json(body)) = success_created(42, "House type created successfully");
        assert_eq!(status, StatusCode::CREATED);
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["id"], 42);
        assert_eq!(v["message"], "House type created successfully");
    }

    #[test]
    fn data_envelope_has_exactly_status_and_data() {
        let (_, Json(body)) = success_data(serde_json::json!({"a": 1}));
        let v = serde_json::to_value(&body).unwrap();
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["status", "data"]);
    }
}
