use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use o2o::o2o;
use observatorio_api::common::Detail;

#[derive(Debug, thiserror::Error, o2o)]
#[from_owned(diesel::result::Error| repeat(), return Self::Internal(@.into()))]
#[from_owned(diesel::ConnectionError)]
#[from_owned(tokio::task::JoinError)]
pub enum Error {
    #[error("{0}")]
    InvalidParameter(&'static str),
    #[error("{0}")]
    InvalidPayload(&'static str),
    #[error(transparent)]
    ExtractPath(#[from] PathRejection),
    #[error(transparent)]
    ExtractJson(#[from] JsonRejection),

    #[error("Could not find water body with id {0}")]
    NotFound(i32),
    #[error("A water body named '{0}' already exists")]
    Conflict(String),

    #[error("Could not checkout a connection from connection pool")]
    CheckoutConnectionPool,
    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ExtractPath(rejection) => rejection.status(),
            Error::ExtractJson(rejection) => rejection.status(),
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::CheckoutConnectionPool | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status();
        let detail = match &self {
            Error::ExtractPath(rejection) => rejection.body_text(),
            Error::ExtractJson(rejection) => rejection.body_text(),
            Error::CheckoutConnectionPool | Error::Internal(_) => {
                tracing::error!(error = ?self);
                "Internal server error".to_owned()
            }
            _ => self.to_string(),
        };
        (status_code, Json(Detail::new(detail))).into_response()
    }
}
