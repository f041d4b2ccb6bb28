//! Route guard middleware.
//!
//! Thin adapter over the routing decision: recover the identity from the
//! session cookie, look the profile up, run [`decide`], and translate the
//! outcome into a redirect or a pass-through. No completeness or role
//! checks live here.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use tracing::warn;

use wealth_session::cookie::WP_SESSION;
use wealth_session::token::validate_session_token;

use crate::domain::repository::ProfileRepository;
use crate::domain::routing::{
    COMPLETION_PATH, Decision, LOGIN_PATH, ProfileLookup, RouteClass, RouteContext, decide,
};
use crate::domain::types::{AuthProvider, Identity};
use crate::state::AppState;
use crate::usecase::profile::provision_profile;

fn login_with_return(path: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("redirectedFrom", path)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}

fn session_identity(jar: &CookieJar, secret: &str) -> Option<Identity> {
    let cookie_value = jar.get(WP_SESSION)?.value().to_owned();
    let session = validate_session_token(&cookie_value, secret).ok()?;
    Some(Identity {
        id: session.user_id,
        email: session.email,
        display_name: session.display_name,
        provider: AuthProvider::parse(&session.provider).unwrap_or(AuthProvider::Federated),
    })
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    // The callback route runs its own flow; never intercept it.
    if RouteClass::classify(&path) == RouteClass::Callback {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    let identity = session_identity(&jar, &state.jwt_secret);

    let lookup = match &identity {
        Some(identity) => match state.profile_repo().find_by_id(identity.id).await {
            Ok(Some(profile)) => ProfileLookup::Found(profile),
            Ok(None) => ProfileLookup::Missing,
            Err(e) => {
                warn!(error = %e, "profile store unavailable in route guard");
                ProfileLookup::Unavailable
            }
        },
        None => ProfileLookup::Missing,
    };

    let ctx = RouteContext {
        return_url: query_param(request.uri().query(), "return"),
        error_code: None,
        email_verification: false,
    };
    let decision = decide(identity.as_ref(), &lookup, &path, &ctx, &state.routing);

    match decision {
        Decision::PassThrough => next.run(request).await,
        Decision::DenyUnauthenticated { return_to } => {
            let location = match return_to {
                Some(path) => login_with_return(&path),
                // Store failure: fail closed with a generic retry message.
                None => format!("{LOGIN_PATH}?error=retry"),
            };
            Redirect::to(&location).into_response()
        }
        Decision::RequireCompletion { provision } => {
            if let Some(new_profile) = provision {
                if let Err(e) = provision_profile(&state.profile_repo(), new_profile).await {
                    warn!(error = %e, "profile provisioning failed in route guard");
                    return Redirect::to(&format!("{LOGIN_PATH}?error=retry")).into_response();
                }
            }
            Redirect::to(COMPLETION_PATH).into_response()
        }
        Decision::AllowAdmin { target } => Redirect::to(target).into_response(),
        Decision::AllowUser { target, welcome } => {
            if welcome {
                Redirect::to(&format!("{target}?welcome=true")).into_response()
            } else {
                Redirect::to(target).into_response()
            }
        }
    }
}
