//! The `{success, data|error}` JSON wrapper every response uses.

use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;

pub fn success(data: impl Serialize) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

pub fn success_with_total(data: Vec<impl Serialize>) -> Json<Value> {
    let total = data.len();
    Json(json!({ "success": true, "data": data, "total": total }))
}

pub fn message(message: impl Display) -> Json<Value> {
    Json(json!({ "success": true, "message": message.to_string() }))
}

pub fn failure(error: impl Display) -> Json<Value> {
    Json(json!({ "success": false, "error": error.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_wraps_data() {
        let Json(body) = success(vec![1, 2, 3]);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!([1, 2, 3]));
    }

    #[test]
    fn total_counts_the_data() {
        let Json(body) = success_with_total(vec!["a", "b"]);
        assert_eq!(body["total"], 2);
    }

    #[test]
    fn failure_carries_the_error_text() {
        let Json(body) = failure("Student not found");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Student not found");
    }
}
