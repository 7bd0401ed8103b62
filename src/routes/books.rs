use crate::{
    data::book::{BookForm, REQUIRED_FIELDS},
    envelope,
    error::{ApiError, ApiResult, MissingBookFieldSnafu, MissingBookSnafu},
    routes::require_json,
    state::BooksState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use snafu::OptionExt;

pub async fn get_books(State(state): State<BooksState>) -> Json<Value> {
    envelope::success_with_total(state.store().list().await)
}

pub async fn get_book(
    State(state): State<BooksState>,
    Path(id): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    let book = state
        .store()
        .get(id)
        .await
        .context(MissingBookSnafu { id })?;
    Ok(envelope::success(book))
}

pub async fn post_book(
    State(state): State<BooksState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let data = require_json(payload)?;
    for name in REQUIRED_FIELDS {
        data.get(name).context(MissingBookFieldSnafu { name })?;
    }

    let form: BookForm = serde_json::from_value(data).map_err(|error| ApiError::InvalidJson {
        message: error.to_string(),
    })?;
    let created = state.store().append(form).await;

    Ok((StatusCode::CREATED, envelope::success(created)))
}
