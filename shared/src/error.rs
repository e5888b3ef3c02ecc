use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("username is already taken: {0}")]
    DuplicateUsername(String),
    #[error("schedule is already reserved: {0}")]
    DuplicateReservation(String),
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("authentication is required")]
    UnauthenticatedError,
    #[error("operation is not permitted")]
    ForbiddenOperation,
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidRequestBody(#[from] JsonRejection),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("password hashing failed: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    /// クライアント起因のエラーかどうか
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::DuplicateUsername(_)
                | AppError::DuplicateReservation(_)
                | AppError::InvalidCredentials
                | AppError::UnauthenticatedError
                | AppError::ForbiddenOperation
                | AppError::EntityNotFound(_)
                | AppError::ValidationError(_)
                | AppError::InvalidRequestBody(_)
                | AppError::ConvertToUuidError(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // クライアントエラーはすべて本文なしの 400
        let status_code = if self.is_client_error() {
            tracing::debug!(error.message = %self, "Rejected request");
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        };

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_forbidden_share_the_same_status() {
        let not_found = AppError::EntityNotFound("reservation".into()).into_response();
        let forbidden = AppError::ForbiddenOperation.into_response();
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);
        assert_eq!(forbidden.status(), not_found.status());
    }

    #[test]
    fn storage_faults_are_server_errors() {
        let err = AppError::NoRowsAffectedError("no reservation deleted".into());
        assert!(!err.is_client_error());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn token_and_duplicate_failures_are_client_errors() {
        for err in [
            AppError::UnauthenticatedError,
            AppError::InvalidCredentials,
            AppError::DuplicateUsername("username".into()),
            AppError::DuplicateReservation("schedule".into()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
