use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    admin::{
        admin_dashboard, create_quote, delete_quote, list_quotes, list_users, update_quote,
        update_role,
    },
    dashboard::get_dashboard,
    guard::route_guard,
    health::{healthz, readyz},
    profile::{complete_profile, get_me, signup_profile, update_me},
    quote::random_quote,
    session::{callback, logout, portal},
    transaction::{add_transaction, list_transactions, money_flow_summary},
};
use crate::state::AppState;
use crate::telemetry::request_id_layer;

pub fn build_router(state: AppState) -> Router {
    // Screen routes run through the routing decision; API routes enforce
    // identity and role per handler.
    let guarded = Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/money-flow", get(list_transactions))
        .route("/dashboard/money-flow", post(add_transaction))
        .route("/dashboard/money-flow/summary", get(money_flow_summary))
        .route("/admin/dashboard", get(admin_dashboard))
        .route("/admin/users", get(list_users))
        .route("/admin/users/{id}/role", patch(update_role))
        .route("/admin/quotes", get(list_quotes))
        .route("/admin/quotes", post(create_quote))
        .route("/admin/quotes/{id}", patch(update_quote))
        .route("/admin/quotes/{id}", delete(delete_quote))
        .layer(middleware::from_fn_with_state(state.clone(), route_guard));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Session. The portal redirect runs the routing decision itself, so
        // it stays outside the guard layer.
        .route("/auth/callback", get(callback))
        .route("/auth/portal", get(portal))
        .route("/auth/session", delete(logout))
        // Profiles
        .route("/profiles", post(signup_profile))
        .route("/profiles/@me", get(get_me))
        .route("/profiles/@me", patch(update_me))
        .route("/profiles/@me/complete", post(complete_profile))
        // Quotes
        .route("/quotes/random", get(random_quote))
        .merge(guarded)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
