use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    #[error("user not found")]
    UserNotFound,
    #[error("role not found")]
    RoleNotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("role already exists")]
    RoleAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::RoleNotFound => "ROLE_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::RoleAlreadyExists => "ROLE_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::RoleNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserAlreadyExists | Self::RoleAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; TraceLayer already records their status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
