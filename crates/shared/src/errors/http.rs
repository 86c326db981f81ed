use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::BadRequest(msg) => HttpError::BadRequest(msg),
            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {}", errors.join("; ")))
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => {
                    error!("❌ Unresolved concurrency conflict: {msg}");
                    HttpError::Internal(format!("Concurrency conflict: {msg}"))
                }
                other => {
                    error!("❌ Repository failure: {other}");
                    HttpError::Internal("Repository error".into())
                }
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) | HttpError::Internal(msg) => msg,
        };

        (status, Json(ErrorResponse::error(msg))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_not_found_maps_to_404() {
        let err = HttpError::from(ServiceError::NotFound("Product not found".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn repository_not_found_maps_to_404() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400_with_joined_messages() {
        let err = HttpError::from(ServiceError::Validation(vec![
            "name: Name is required".into(),
            "price: Price cannot be negative".into(),
        ]));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        match err {
            HttpError::BadRequest(msg) => assert_eq!(
                msg,
                "Validation failed: name: Name is required; price: Price cannot be negative"
            ),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unresolved_conflict_is_internal() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Conflict(
            "could not serialize access".into(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_errors_hide_details() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )));
        match err {
            HttpError::Internal(msg) => assert_eq!(msg, "Repository error"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
