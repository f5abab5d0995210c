mod domain;
mod error;
mod http;
mod repository;
mod service;

pub use self::domain::DomainError;
pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
