use sea_orm::Database;
use tracing::info;

use wealth_portal::config::PortalConfig;
use wealth_portal::domain::routing::RoutingConfig;
use wealth_portal::router::build_router;
use wealth_portal::state::AppState;
use wealth_portal::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = PortalConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        http: reqwest::Client::new(),
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
        provider_url: config.provider_url,
        routing: RoutingConfig {
            admin_email: config.admin_email,
            referral_domain: config.referral_domain,
        },
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.portal_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("portal service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
