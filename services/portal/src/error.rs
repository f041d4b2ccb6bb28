use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Portal service domain error variants.
///
/// The guard and callback handler recover every variant into a redirect;
/// these responses are only seen by direct API consumers.
#[derive(Debug, thiserror::Error)]
pub enum PortalServiceError {
    #[error("not signed in")]
    NoIdentity,
    #[error("forbidden")]
    Forbidden,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("profile already exists")]
    ProfileExists,
    #[error("profile incomplete")]
    ProfileIncomplete,
    #[error("quote not found")]
    QuoteNotFound,
    #[error("missing data")]
    MissingData,
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("identity provider exchange failed")]
    ExchangeFailed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PortalServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoIdentity => "NO_IDENTITY",
            Self::Forbidden => "FORBIDDEN",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::ProfileExists => "PROFILE_EXISTS",
            Self::ProfileIncomplete => "PROFILE_INCOMPLETE",
            Self::QuoteNotFound => "QUOTE_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::ExchangeFailed => "EXCHANGE_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PortalServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoIdentity => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ProfileNotFound | Self::QuoteNotFound => StatusCode::NOT_FOUND,
            Self::ProfileExists | Self::ProfileIncomplete => StatusCode::CONFLICT,
            Self::MissingData | Self::InvalidAmount => StatusCode::BAD_REQUEST,
            Self::ExchangeFailed => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
