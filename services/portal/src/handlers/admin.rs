use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::types::UserRole;
use crate::error::PortalServiceError;
use crate::handlers::extract::CurrentIdentity;
use crate::handlers::profile::ProfileResponse;
use crate::handlers::quote::QuoteResponse;
use crate::state::AppState;
use crate::usecase::admin::{ListUsersUseCase, UpdateRoleUseCase, ensure_admin};
use crate::usecase::quote::{
    CreateQuoteInput, CreateQuoteUseCase, DeleteQuoteUseCase, ListQuotesUseCase, UpdateQuoteInput,
    UpdateQuoteUseCase,
};

// ── GET /admin/dashboard ─────────────────────────────────────────────────────

#[derive(serde::Serialize)]
pub struct AdminDashboardResponse {
    pub user_count: usize,
    pub quote_count: usize,
}

pub async fn admin_dashboard(
    identity: CurrentIdentity,
    State(state): State<AppState>,
) -> Result<Json<AdminDashboardResponse>, PortalServiceError> {
    ensure_admin(&state.profile_repo(), identity.0.id).await?;
    let users = ListUsersUseCase {
        repo: state.profile_repo(),
    }
    .execute(identity.0.id)
    .await?;
    let quotes = ListQuotesUseCase {
        repo: state.quote_repo(),
    }
    .execute()
    .await?;
    Ok(Json(AdminDashboardResponse {
        user_count: users.len(),
        quote_count: quotes.len(),
    }))
}

// ── GET /admin/users ─────────────────────────────────────────────────────────

pub async fn list_users(
    identity: CurrentIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileResponse>>, PortalServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.profile_repo(),
    };
    let users = usecase.execute(identity.0.id).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

// ── PATCH /admin/users/{id}/role ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

pub async fn update_role(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<StatusCode, PortalServiceError> {
    let role = UserRole::parse(&body.role).ok_or(PortalServiceError::MissingData)?;
    let usecase = UpdateRoleUseCase {
        repo: state.profile_repo(),
    };
    usecase.execute(identity.0.id, user_id, role).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /admin/quotes ────────────────────────────────────────────────────────

pub async fn list_quotes(
    identity: CurrentIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuoteResponse>>, PortalServiceError> {
    ensure_admin(&state.profile_repo(), identity.0.id).await?;
    let usecase = ListQuotesUseCase {
        repo: state.quote_repo(),
    };
    let quotes = usecase.execute().await?;
    Ok(Json(quotes.into_iter().map(Into::into).collect()))
}

// ── POST /admin/quotes ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateQuoteRequest {
    pub quote: String,
    pub author: String,
}

pub async fn create_quote(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), PortalServiceError> {
    ensure_admin(&state.profile_repo(), identity.0.id).await?;
    let usecase = CreateQuoteUseCase {
        repo: state.quote_repo(),
    };
    let quote = usecase
        .execute(CreateQuoteInput {
            quote: body.quote,
            author: body.author,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(quote.into())))
}

// ── PATCH /admin/quotes/{id} ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateQuoteRequest {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub active: Option<bool>,
}

pub async fn update_quote(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Path(quote_id): Path<Uuid>,
    Json(body): Json<UpdateQuoteRequest>,
) -> Result<StatusCode, PortalServiceError> {
    ensure_admin(&state.profile_repo(), identity.0.id).await?;
    let usecase = UpdateQuoteUseCase {
        repo: state.quote_repo(),
    };
    usecase
        .execute(
            quote_id,
            UpdateQuoteInput {
                quote: body.quote,
                author: body.author,
                active: body.active,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /admin/quotes/{id} ────────────────────────────────────────────────

pub async fn delete_quote(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Path(quote_id): Path<Uuid>,
) -> Result<StatusCode, PortalServiceError> {
    ensure_admin(&state.profile_repo(), identity.0.id).await?;
    let usecase = DeleteQuoteUseCase {
        repo: state.quote_repo(),
    };
    usecase.execute(quote_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
