/// Portal service configuration loaded from environment variables.
#[derive(Debug)]
pub struct PortalConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `PORTAL_PORT`.
    pub portal_port: u16,
    /// HMAC secret for session tokens.
    pub jwt_secret: String,
    /// Domain attribute for the session cookie (e.g. "example.com").
    pub cookie_domain: String,
    /// Email address that is granted the admin role at provisioning.
    pub admin_email: String,
    /// Referral domain that triggers the first-visit welcome banner.
    pub referral_domain: String,
    /// Base URL of the hosted identity provider (e.g. "http://identity:3100").
    pub provider_url: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            portal_port: std::env::var("PORTAL_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            admin_email: std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL"),
            referral_domain: std::env::var("REFERRAL_DOMAIN").expect("REFERRAL_DOMAIN"),
            provider_url: std::env::var("PROVIDER_URL").expect("PROVIDER_URL"),
        }
    }
}
