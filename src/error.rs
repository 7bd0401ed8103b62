use crate::envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use snafu::Snafu;
use std::num::ParseIntError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Error making SQL query: {source}"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Content-type must be application/json"))]
    WrongContentType,
    #[snafu(display("Invalid JSON body: {}", message))]
    InvalidJson { message: String },
    #[snafu(display("Missing field: {}", name))]
    MissingStudentField { name: &'static str },
    #[snafu(display("Missing required FieldsL: {}", name))] // sic
    MissingBookField { name: &'static str },
    #[snafu(display("Invalid format, use YYYY-MM-DD"))]
    ParseBirthday { source: chrono::ParseError },
    #[snafu(display("Student not found"))]
    MissingStudent { id: i32 },
    #[snafu(display("Book not Found"))]
    MissingBook { id: i32 },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. }
            | Self::MigrateError { .. }
            | Self::MakeQuery { .. }
            | Self::BadEnvVar { .. }
            | Self::ParsePort { .. } => ISE,
            Self::WrongContentType
            | Self::InvalidJson { .. }
            | Self::MissingStudentField { .. }
            | Self::MissingBookField { .. }
            | Self::ParseBirthday { .. } => BI,
            Self::MissingStudent { .. } | Self::MissingBook { .. } => NF,
        };

        error!(?self, "Error!");
        (status_code, envelope::failure(&self)).into_response()
    }
}
