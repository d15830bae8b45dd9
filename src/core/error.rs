use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Gateway-facing variants mirror how Xendit reports failures: 4xx responses
/// become `InvalidRequest`/`Unauthorized`/`NotFound`, 429 becomes
/// `RateLimited` carrying the advertised retry-after, and 5xx becomes
/// `UpstreamUnavailable`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Bad input or an unclassified gateway 4xx
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Malformed webhook payload
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Bad credentials or failed webhook verification
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Operation refused by configuration (e.g. simulate outside test mode)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unknown payment intent or refund
    #[error("Not found: {0}")]
    NotFound(String),

    /// Gateway returned HTTP 429
    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        /// Seconds until the gateway accepts requests again, when advertised
        retry_after: Option<u64>,
    },

    /// Gateway 5xx or transport failure
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Capture attempted before the intent reached its terminal paid state
    #[error("Not ready for capture: observed status {observed}")]
    NotReady { observed: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::NotReady { .. } => StatusCode::CONFLICT,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        AppError::InvalidRequest(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Prefix the error message with the logical operation it occurred in,
    /// keeping the variant (and therefore the HTTP mapping) intact.
    pub fn in_operation(self, operation: &str) -> Self {
        match self {
            AppError::InvalidRequest(msg) => {
                AppError::InvalidRequest(format!("error in {}: {}", operation, msg))
            }
            AppError::BadRequest(msg) => {
                AppError::BadRequest(format!("error in {}: {}", operation, msg))
            }
            AppError::Unauthorized(msg) => {
                AppError::Unauthorized(format!("error in {}: {}", operation, msg))
            }
            AppError::Forbidden(msg) => {
                AppError::Forbidden(format!("error in {}: {}", operation, msg))
            }
            AppError::NotFound(msg) => {
                AppError::NotFound(format!("error in {}: {}", operation, msg))
            }
            AppError::RateLimited {
                message,
                retry_after,
            } => AppError::RateLimited {
                message: format!("error in {}: {}", operation, message),
                retry_after,
            },
            AppError::UpstreamUnavailable(msg) => {
                AppError::UpstreamUnavailable(format!("error in {}: {}", operation, msg))
            }
            AppError::NotReady { observed } => AppError::NotReady { observed },
            AppError::Configuration(msg) => {
                AppError::Configuration(format!("error in {}: {}", operation, msg))
            }
            AppError::Internal(msg) => {
                AppError::Internal(format!("error in {}: {}", operation, msg))
            }
        }
    }
}
