use anyhow::anyhow;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use wealth_session::cookie::{clear_session_cookie, set_session_cookie};
use wealth_session::token::issue_session_token;

use crate::domain::repository::ProfileRepository;
use crate::domain::routing::{
    Decision, LOGIN_PATH, POST_AUTH_PATH, ProfileLookup, RouteContext, decide,
};
use crate::error::PortalServiceError;
use crate::handlers::extract::CurrentIdentity;
use crate::state::AppState;
use crate::usecase::callback::{CallbackInput, CallbackOutcome, CallbackUseCase};
use crate::usecase::profile::provision_profile;

// ── GET /auth/callback ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    #[serde(rename = "return")]
    pub return_url: Option<String>,
    pub error: Option<String>,
    /// `email_verification` for verification callbacks, absent for logins.
    pub flow: Option<String>,
}

pub async fn callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Result<impl IntoResponse, PortalServiceError> {
    let usecase = CallbackUseCase {
        provider: state.identity_provider(),
        profiles: state.profile_repo(),
        routing: state.routing.clone(),
    };

    let outcome = usecase
        .execute(CallbackInput {
            code: query.code,
            return_url: query.return_url,
            error_code: query.error,
            email_verification: query.flow.as_deref() == Some("email_verification"),
        })
        .await?;

    match outcome {
        CallbackOutcome::Rejected { location } => Ok((jar, Redirect::to(&location))),
        CallbackOutcome::Authenticated { identity, location } => {
            let token = issue_session_token(
                identity.id,
                &identity.email,
                &identity.display_name,
                identity.provider.as_str(),
                &state.jwt_secret,
            )
            .map_err(|e| PortalServiceError::Internal(anyhow!(e)))?;
            let jar = set_session_cookie(jar, token, state.cookie_domain.clone());
            Ok((jar, Redirect::to(&location)))
        }
    }
}

// ── GET /auth/portal ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PortalQuery {
    #[serde(rename = "return")]
    pub return_url: Option<String>,
}

/// Post-login landing decision for an already-established session.
pub async fn portal(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Query(query): Query<PortalQuery>,
) -> Result<Redirect, PortalServiceError> {
    let CurrentIdentity(identity) = identity;

    let lookup = match state.profile_repo().find_by_id(identity.id).await {
        Ok(Some(profile)) => ProfileLookup::Found(profile),
        Ok(None) => ProfileLookup::Missing,
        Err(e) => {
            tracing::warn!(error = %e, "profile store unavailable at portal");
            ProfileLookup::Unavailable
        }
    };

    let ctx = RouteContext {
        return_url: query.return_url,
        error_code: None,
        email_verification: false,
    };
    let decision = decide(Some(&identity), &lookup, POST_AUTH_PATH, &ctx, &state.routing);

    let location = match decision {
        Decision::RequireCompletion { provision } => {
            if let Some(new_profile) = provision {
                provision_profile(&state.profile_repo(), new_profile).await?;
            }
            crate::domain::routing::COMPLETION_PATH.to_owned()
        }
        Decision::AllowAdmin { target } => target.to_owned(),
        Decision::AllowUser { target, welcome } => {
            if welcome {
                format!("{target}?welcome=true")
            } else {
                target.to_owned()
            }
        }
        Decision::DenyUnauthenticated { .. } => format!("{LOGIN_PATH}?error=retry"),
        Decision::PassThrough => crate::domain::routing::USER_LANDING.to_owned(),
    };
    Ok(Redirect::to(&location))
}

// ── DELETE /auth/session ──────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, PortalServiceError> {
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    Ok((StatusCode::NO_CONTENT, jar))
}
