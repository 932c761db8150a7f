use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skywings_core::CoreError;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    Anyhow(anyhow::Error),
}

/// Status and client-facing message for a service error.
pub fn classify(err: &CoreError) -> (StatusCode, String) {
    match err {
        CoreError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        CoreError::FieldErrors(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
        CoreError::UpstreamError { .. } => {
            tracing::error!("Upstream failure: {}", err);
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
        CoreError::Unavailable(_) => {
            tracing::warn!("{}", err);
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
        CoreError::StorageError(_) | CoreError::InternalError(_) => {
            tracing::error!("Internal Server Error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Anyhow(err) => match err.downcast_ref::<CoreError>() {
                Some(core) => classify(core),
                None => {
                    tracing::error!("Internal Server Error: {}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
                }
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_status() {
        let resp = AppError::from(CoreError::not_found("airline", 7)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::from(CoreError::Conflict("in use".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = AppError::from(CoreError::Unavailable("auth-api".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_unknown_errors_are_500() {
        let resp = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
