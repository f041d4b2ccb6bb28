//! Session routing decision.
//!
//! One pure function decides, for an authenticated identity (or none) and its
//! stored profile (or none), which screen a request should land on. Every
//! call site — the route guard, the auth callback, the post-login portal
//! redirect — is a thin adapter over [`decide`]; none of them re-implements
//! completeness or role checks.

use uuid::Uuid;

use crate::domain::types::{Identity, Profile, UserRole};

/// Login screen, also the deny target for unauthenticated requests.
pub const LOGIN_PATH: &str = "/auth/login";
/// Profile-completion screen.
pub const COMPLETION_PATH: &str = "/auth/complete-profile";
/// Admin landing area.
pub const ADMIN_LANDING: &str = "/admin/dashboard";
/// User landing area.
pub const USER_LANDING: &str = "/dashboard";
/// Requested path used by the callback and portal call sites: the decision
/// for "just authenticated, where to land" is the auth-entry decision.
pub const POST_AUTH_PATH: &str = "/auth/portal";

/// Static classification of a requested path. Prefix-based; configuration,
/// not computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    AuthEntry,
    Completion,
    Callback,
    ProtectedUser,
    ProtectedAdmin,
}

impl RouteClass {
    pub fn classify(path: &str) -> Self {
        if path.starts_with("/auth/callback") {
            Self::Callback
        } else if path.starts_with(COMPLETION_PATH) {
            Self::Completion
        } else if path.starts_with("/auth/login")
            || path.starts_with("/auth/signup")
            || path.starts_with("/auth/portal")
            || path.starts_with("/auth/verify-email")
        {
            Self::AuthEntry
        } else if path.starts_with("/admin") {
            Self::ProtectedAdmin
        } else if path.starts_with("/dashboard") {
            Self::ProtectedUser
        } else {
            Self::Public
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, Self::ProtectedUser | Self::ProtectedAdmin)
    }
}

/// Configuration injected into the decision. No literals in the core logic.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Email address that is promoted to admin at provisioning time.
    pub admin_email: String,
    /// External referrer domain that triggers the welcome flag.
    pub referral_domain: String,
}

/// Query context accompanying a request: return URL, provider error code,
/// and whether this is an email-verification callback rather than a
/// federated-login one.
#[derive(Debug, Clone, Default)]
pub struct RouteContext {
    pub return_url: Option<String>,
    pub error_code: Option<String>,
    pub email_verification: bool,
}

impl RouteContext {
    /// True when the return URL points back at the configured referral
    /// domain. Presentation-only input for the welcome flag.
    fn is_referral(&self, cfg: &RoutingConfig) -> bool {
        let Some(raw) = self.return_url.as_deref() else {
            return false;
        };
        match url::Url::parse(raw) {
            Ok(parsed) => parsed
                .host_str()
                .is_some_and(|h| h == cfg.referral_domain || h.ends_with(&format!(".{}", cfg.referral_domain))),
            Err(_) => false,
        }
    }
}

/// Result of looking the profile up in the store, as seen by the decision.
/// `Missing` is not a failure — it is the provisioning signal. Any other
/// store error collapses to `Unavailable`.
#[derive(Debug, Clone)]
pub enum ProfileLookup {
    Found(Profile),
    Missing,
    Unavailable,
}

/// Minimal profile to provision on first federated login.
/// Phone and region start empty; the completion step fills them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}

/// Routing outcome plus any side-effect instruction for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Redirect to login, optionally preserving the requested path.
    DenyUnauthenticated { return_to: Option<String> },
    /// Redirect to the completion screen; `provision` is set when a minimal
    /// profile must be created first (first federated login).
    RequireCompletion { provision: Option<NewProfile> },
    /// Redirect to the admin landing area.
    AllowAdmin { target: &'static str },
    /// Redirect to the user landing area; `welcome` is presentation-only.
    AllowUser { target: &'static str, welcome: bool },
    /// Let the originally requested render proceed.
    PassThrough,
}

/// The session routing decision. Deterministic, no hidden state: everything
/// it reads arrives as an argument.
///
/// Precedence: unauthenticated check, then store failure, then provisioning,
/// then completion gating, then role-based routing. Completion gating always
/// wins over role routing — an incomplete admin goes to the completion
/// screen, never to the admin area.
pub fn decide(
    session: Option<&Identity>,
    profile: &ProfileLookup,
    requested_path: &str,
    ctx: &RouteContext,
    cfg: &RoutingConfig,
) -> Decision {
    let requested = RouteClass::classify(requested_path);

    let Some(identity) = session else {
        if requested.is_protected() {
            return Decision::DenyUnauthenticated {
                return_to: Some(requested_path.to_owned()),
            };
        }
        return Decision::PassThrough;
    };

    let profile = match profile {
        // Transient store failure: fail closed, no return target. The caller
        // surfaces a generic retry message.
        ProfileLookup::Unavailable => {
            return Decision::DenyUnauthenticated { return_to: None };
        }
        // First federated login: instruct the caller to provision a minimal
        // profile, then send to completion.
        ProfileLookup::Missing => {
            let role = if identity.email.eq_ignore_ascii_case(&cfg.admin_email) {
                UserRole::Admin
            } else {
                UserRole::User
            };
            return Decision::RequireCompletion {
                provision: Some(NewProfile {
                    id: identity.id,
                    email: identity.email.clone(),
                    full_name: identity.display_name.clone(),
                    role,
                }),
            };
        }
        ProfileLookup::Found(p) => p,
    };

    if !profile.is_complete() {
        // The completion screen and the callback route themselves must not
        // loop-redirect.
        return match requested {
            RouteClass::Completion | RouteClass::Callback => Decision::PassThrough,
            _ => Decision::RequireCompletion { provision: None },
        };
    }

    match requested {
        RouteClass::AuthEntry | RouteClass::Callback => match profile.role {
            UserRole::Admin => Decision::AllowAdmin {
                target: ADMIN_LANDING,
            },
            UserRole::User => Decision::AllowUser {
                target: USER_LANDING,
                welcome: ctx.is_referral(cfg),
            },
        },
        // Silent downgrade: a non-admin asking for the admin area lands on
        // the user dashboard, not on an error page.
        RouteClass::ProtectedAdmin if profile.role != UserRole::Admin => Decision::AllowUser {
            target: USER_LANDING,
            welcome: false,
        },
        // Public, completion, and the correctly-matched protected area all
        // render as requested. Admins may also browse the user dashboard.
        _ => Decision::PassThrough,
    }
}
