use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use openrouter_client::ClientError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("upstream request failed: HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingApiKey => AppError::MissingApiKey,
            ClientError::Api { status, message } => AppError::Upstream { status, message },
            other => AppError::InternalError(anyhow::Error::new(other)),
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: "api_error".to_string(),
            },
        };
        HttpResponse::build(status_code).json(error_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_mirrors_the_status_code() {
        let err = AppError::from(ClientError::Api {
            status: 429,
            message: "rate limited".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn missing_api_key_maps_to_internal_server_error() {
        let err = AppError::from(ClientError::MissingApiKey);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn stream_error_maps_to_internal_server_error() {
        let err = AppError::from(ClientError::Stream("reset".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unmappable_upstream_status_falls_back_to_500() {
        let err = AppError::Upstream {
            status: 17,
            message: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
