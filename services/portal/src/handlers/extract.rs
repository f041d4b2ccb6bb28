//! Session-cookie identity extractor.

use axum::extract::FromRequestParts;
use axum_extra::extract::CookieJar;
use http::request::Parts;

use wealth_session::cookie::WP_SESSION;
use wealth_session::token::validate_session_token;

use crate::domain::types::{AuthProvider, Identity};
use crate::error::PortalServiceError;
use crate::state::AppState;

/// Authenticated identity recovered from the `wp_session` cookie.
///
/// Returns 401 when the cookie is absent, expired, or fails validation.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = PortalServiceError;

    // Extract values synchronously so the returned future is 'static.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let cookie_value = CookieJar::from_headers(&parts.headers)
            .get(WP_SESSION)
            .map(|c| c.value().to_owned());
        let secret = state.jwt_secret.clone();

        async move {
            let cookie_value = cookie_value.ok_or(PortalServiceError::NoIdentity)?;
            let session = validate_session_token(&cookie_value, &secret)
                .map_err(|_| PortalServiceError::NoIdentity)?;
            let provider =
                AuthProvider::parse(&session.provider).unwrap_or(AuthProvider::Federated);
            Ok(Self(Identity {
                id: session.user_id,
                email: session.email,
                display_name: session.display_name,
                provider,
            }))
        }
    }
}
