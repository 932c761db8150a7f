use skywings_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("HTTP error calling {service} {endpoint}: {source}")]
    Http {
        service: String,
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("{service} {endpoint} returned {status}: {body}")]
    Status {
        service: String,
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("failed to decode response from {service} {endpoint}: {source}")]
    Decode {
        service: String,
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("circuit breaker for {0} is open")]
    CircuitOpen(String),
    #[error("invalid base url for {service}: {url}")]
    BaseUrl { service: String, url: String },
}

/// Pull the message out of an `{"error": ...}` body, falling back to the raw
/// text.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

impl From<ConnectorError> for CoreError {
    fn from(err: ConnectorError) -> Self {
        match err {
            ConnectorError::Status {
                service,
                status,
                body,
                ..
            } => {
                let message = upstream_message(&body);
                match status {
                    400 | 422 => CoreError::ValidationError(message),
                    401 => CoreError::Unauthorized(message),
                    403 => CoreError::Forbidden(message),
                    404 => CoreError::NotFound(message),
                    409 => CoreError::Conflict(message),
                    _ => CoreError::UpstreamError {
                        service,
                        status,
                        message,
                    },
                }
            }
            ConnectorError::Http { service, .. } | ConnectorError::CircuitOpen(service) => {
                CoreError::Unavailable(service)
            }
            other => CoreError::InternalError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, body: &str) -> ConnectorError {
        ConnectorError::Status {
            service: "database-api".to_string(),
            endpoint: "/api/v1/db/airline/get/x".to_string(),
            status: code,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_mapping_keeps_upstream_message() {
        let err: CoreError = status(404, r#"{"error":"Airline not found with id: x"}"#).into();
        assert_eq!(err.to_string(), "Airline not found with id: x");

        let err: CoreError = status(401, "nope").into();
        assert!(matches!(err, CoreError::Unauthorized(m) if m == "nope"));

        let err: CoreError = status(500, r#"{"error":"Internal Server Error"}"#).into();
        assert!(matches!(err, CoreError::UpstreamError { status: 500, .. }));
    }

    #[test]
    fn test_open_circuit_is_unavailable() {
        let err: CoreError = ConnectorError::CircuitOpen("auth-api".to_string()).into();
        assert_eq!(err.to_string(), "auth-api is unavailable");
    }
}
