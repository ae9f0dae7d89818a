use actix_web::http::StatusCode;
use actix_web::ResponseError;
use http_api_problem::ApiError;
use crate::database::PageOutOfRangeError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct RosterApiError(
    #[source]
    #[from]
    ApiError,
);

impl ResponseError for RosterApiError {
    fn error_response(&self) -> actix_web::HttpResponse {
        self.0.error_response()
    }
}

pub fn internal_server_error<E: std::fmt::Display>(prefix: &str, error: E) -> RosterApiError {
    log::error!("{}: {}", prefix, error);
    let builder = ApiError::builder(StatusCode::INTERNAL_SERVER_ERROR);
    RosterApiError(if cfg!(debug_assertions) {
        builder.message(format!("{}: {}", prefix, error)).finish()
    } else {
        builder.finish()
    })
}

impl From<DbErr> for RosterApiError {
    fn from(e: DbErr) -> Self {
        internal_server_error("DbErr", e)
    }
}

impl From<PageOutOfRangeError> for RosterApiError {
    fn from(e: PageOutOfRangeError) -> Self {
        ApiError::builder(StatusCode::BAD_REQUEST)
            .message(e.to_string())
            .finish()
            .into()
    }
}

impl From<actix_web_validator::Error> for RosterApiError {
    fn from(e: actix_web_validator::Error) -> Self {
        match e {
            actix_web_validator::Error::Validate(v) => v.into(),
            _ => ApiError::builder(StatusCode::BAD_REQUEST)
                .message(format!("{}", e))
                .finish()
                .into(),
        }
    }
}

impl From<ValidationErrors> for RosterApiError {
    fn from(e: ValidationErrors) -> Self {
        RosterApiError(
            ApiError::builder(StatusCode::BAD_REQUEST)
                .message("One or more fields failed validation")
                .field("invalid-params", e.into_errors())
                .finish(),
        )
    }
}
