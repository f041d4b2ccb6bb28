//! External-identity callback flow.
//!
//! One round trip per invocation: exchange the authorization code for an
//! identity, run the routing decision, execute any provisioning side effect
//! it requested, and report where to land. The handler turns the outcome
//! into a cookie + redirect.

use tracing::warn;

use crate::domain::repository::{IdentityProvider, ProfileRepository};
use crate::domain::routing::{
    Decision, LOGIN_PATH, POST_AUTH_PATH, ProfileLookup, RouteContext, RoutingConfig, decide,
};
use crate::domain::types::Identity;
use crate::error::PortalServiceError;
use crate::usecase::profile::provision_profile;

pub struct CallbackInput {
    pub code: Option<String>,
    pub return_url: Option<String>,
    /// Provider-reported failure code from the query string.
    pub error_code: Option<String>,
    /// True for email-verification callbacks, false for federated logins.
    pub email_verification: bool,
}

#[derive(Debug)]
pub enum CallbackOutcome {
    /// Redirect without establishing a session (provider error, bad code).
    Rejected { location: String },
    /// Session established: set the session cookie, then redirect.
    Authenticated {
        identity: Identity,
        location: String,
    },
}

pub struct CallbackUseCase<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    pub provider: P,
    pub profiles: R,
    pub routing: RoutingConfig,
}

impl<P, R> CallbackUseCase<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    pub async fn execute(&self, input: CallbackInput) -> Result<CallbackOutcome, PortalServiceError> {
        // Provider reported a failure before we got a code.
        if let Some(code) = input.error_code.as_deref() {
            warn!(error = code, "identity provider reported an error");
            return Ok(CallbackOutcome::Rejected {
                location: format!("{LOGIN_PATH}?error=oauth_error"),
            });
        }
        let Some(code) = input.code.as_deref() else {
            return Ok(CallbackOutcome::Rejected {
                location: format!("{LOGIN_PATH}?error=no_code"),
            });
        };

        let identity = match self.provider.exchange_code(code).await {
            Ok(identity) => identity,
            Err(PortalServiceError::ExchangeFailed) => {
                let reason = if input.email_verification {
                    "verification_failed"
                } else {
                    "oauth_error"
                };
                return Ok(CallbackOutcome::Rejected {
                    location: format!("{LOGIN_PATH}?error={reason}"),
                });
            }
            Err(e) => return Err(e),
        };

        let lookup = match self.profiles.find_by_id(identity.id).await {
            Ok(Some(profile)) => ProfileLookup::Found(profile),
            Ok(None) => ProfileLookup::Missing,
            Err(e) => {
                warn!(error = %e, "profile store unavailable during callback");
                ProfileLookup::Unavailable
            }
        };

        let ctx = RouteContext {
            return_url: input.return_url,
            error_code: None,
            email_verification: input.email_verification,
        };
        let decision = decide(Some(&identity), &lookup, POST_AUTH_PATH, &ctx, &self.routing);

        let location = match decision {
            Decision::RequireCompletion { provision } => {
                if let Some(new_profile) = provision {
                    provision_profile(&self.profiles, new_profile).await?;
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
            Decision::DenyUnauthenticated { .. } => {
                // Store failure: no session, generic retry message.
                return Ok(CallbackOutcome::Rejected {
                    location: format!("{LOGIN_PATH}?error=retry"),
                });
            }
            // Not produced for the post-auth path; keep the user-landing
            // fallback anyway.
            Decision::PassThrough => crate::domain::routing::USER_LANDING.to_owned(),
        };

        Ok(CallbackOutcome::Authenticated { identity, location })
    }
}
