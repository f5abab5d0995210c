use crate::errors::{
    domain::DomainError, error::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(domain_err) => match domain_err {
                DomainError::InvalidArgument(msg) => HttpError::BadRequest(msg),
                DomainError::InvalidState(msg) => HttpError::Conflict(msg),
                DomainError::InvalidTransition { from, to } => HttpError::UnprocessableEntity(
                    format!("Cannot transition order from {from} to {to}"),
                ),
            },

            ServiceError::NotFound(entity) => HttpError::NotFound(format!("{entity} not found")),

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        HttpError::from(err).into_response().status()
    }

    #[test]
    fn each_domain_error_kind_maps_to_a_distinct_status() {
        let invalid_argument = status_of(ServiceError::Domain(DomainError::InvalidArgument(
            "empty item list".into(),
        )));
        let invalid_state = status_of(ServiceError::Domain(DomainError::InvalidState(
            "order already accepted".into(),
        )));
        let invalid_transition = status_of(ServiceError::Domain(DomainError::InvalidTransition {
            from: "DELIVERED".into(),
            to: "ACCEPTED".into(),
        }));
        let not_found = status_of(ServiceError::NotFound("Order".into()));

        assert_eq!(invalid_argument, StatusCode::BAD_REQUEST);
        assert_eq!(invalid_state, StatusCode::CONFLICT);
        assert_eq!(invalid_transition, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(not_found, StatusCode::NOT_FOUND);

        let statuses = [invalid_argument, invalid_state, invalid_transition, not_found];
        for (i, a) in statuses.iter().enumerate() {
            for b in statuses.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn repository_not_found_maps_to_404() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }
}
