//! Session-token issue and validation.
//!
//! The portal does not run its own credential checks — the external identity
//! provider does. After a successful code exchange the portal issues one
//! self-signed JWT carrying the identity snapshot it needs for routing
//! decisions (id, email, display name, provider tag).

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session JWT lifetime in seconds (7 days, same as the cookie Max-Age).
pub const SESSION_TOKEN_EXP: u64 = 604_800;

/// Identity snapshot extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    /// Provider tag as issued: `"password"` or `"federated"`.
    pub provider: String,
    pub exp: u64,
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionTokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed session token")]
    Malformed,
    #[error("failed to sign session token")]
    Signing,
}

/// JWT claims for the session cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (UUID string).
    pub sub: String,
    /// Email as reported by the identity provider.
    pub email: String,
    /// Display name as reported by the identity provider.
    pub name: String,
    /// Provider tag: `"password"` or `"federated"`.
    pub provider: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a session token for an authenticated identity.
pub fn issue_session_token(
    user_id: Uuid,
    email: &str,
    display_name: &str,
    provider: &str,
    secret: &str,
) -> Result<String, SessionTokenError> {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_owned(),
        name: display_name.to_owned(),
        provider: provider.to_owned(),
        exp: now_secs() + SESSION_TOKEN_EXP,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| SessionTokenError::Signing)
}

/// Validate a session-cookie value, returning the identity snapshot.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`.
/// Default leeway (60s) tolerates clock skew against the provider.
pub fn validate_session_token(
    cookie_value: &str,
    secret: &str,
) -> Result<SessionIdentity, SessionTokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        cookie_value,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionTokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionTokenError::InvalidSignature,
        _ => SessionTokenError::Malformed,
    })?;

    let claims = data.claims;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| SessionTokenError::Malformed)?;

    Ok(SessionIdentity {
        user_id,
        email: claims.email,
        display_name: claims.name,
        provider: claims.provider,
        exp: claims.exp,
    })
}
