use crate::{
    data::student::{REQUIRED_FIELDS, StudentForm, StudentPatch},
    envelope,
    error::{ApiError, ApiResult, MissingStudentFieldSnafu, MissingStudentSnafu},
    routes::require_json,
    state::StudentsState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use snafu::{OptionExt, ensure};

/// Hard cap on list output; there is deliberately no paging below this.
const MAX_LISTED: i64 = 100;

pub async fn get_students(State(state): State<StudentsState>) -> ApiResult<impl IntoResponse> {
    let students = state.store().list(MAX_LISTED).await?;
    Ok(envelope::success(students))
}

pub async fn get_student(
    State(state): State<StudentsState>,
    Path(id): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    let student = state
        .store()
        .get(id)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(envelope::success(student))
}

pub async fn post_student(
    State(state): State<StudentsState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let data = require_json(payload)?;
    for name in REQUIRED_FIELDS {
        data.get(name).context(MissingStudentFieldSnafu { name })?;
    }

    let form: StudentForm =
        serde_json::from_value(data).map_err(|error| ApiError::InvalidJson {
            message: error.to_string(),
        })?;
    let created = state.store().insert(form.into_new()?).await?;

    Ok((StatusCode::CREATED, envelope::success(created)))
}

pub async fn put_student(
    State(state): State<StudentsState>,
    Path(id): Path<i32>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let mut student = state
        .store()
        .get(id)
        .await?
        .context(MissingStudentSnafu { id })?;

    let data = require_json(payload)?;
    let patch: StudentPatch =
        serde_json::from_value(data).map_err(|error| ApiError::InvalidJson {
            message: error.to_string(),
        })?;

    patch.apply(&mut student)?;
    state.store().update(&student).await?;

    Ok(envelope::success(student))
}

pub async fn delete_student(
    State(state): State<StudentsState>,
    Path(id): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    ensure!(
        state.store().remove(id).await?,
        MissingStudentSnafu { id }
    );
    Ok(envelope::message("Student successfully deleted"))
}
