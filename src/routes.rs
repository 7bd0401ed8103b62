use crate::{
    error::{ApiError, ApiResult},
    routes::{
        books::{get_book, get_books, post_book},
        students::{delete_student, get_student, get_students, post_student, put_student},
    },
    state::{BooksState, StudentsState},
};
use axum::{Json, Router, extract::rejection::JsonRejection, routing::get};
use serde_json::Value;

pub mod books;
pub mod students;

pub fn students_router(state: StudentsState) -> Router {
    Router::new()
        .route("/students", get(get_students).post(post_student))
        .route(
            "/students/{id}",
            get(get_student).put(put_student).delete(delete_student),
        )
        .with_state(state)
}

pub fn books_router(state: BooksState) -> Router {
    Router::new()
        .route("/api/books", get(get_books).post(post_book))
        .route("/api/books/{id}", get(get_book))
        .with_state(state)
}

/// Unwraps an extracted JSON body, turning a missing/wrong content type into
/// the dedicated error and any other rejection into a bad-input one.
pub(crate) fn require_json(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Err(ApiError::WrongContentType),
        Err(rejection) => Err(ApiError::InvalidJson {
            message: rejection.body_text(),
        }),
    }
}
