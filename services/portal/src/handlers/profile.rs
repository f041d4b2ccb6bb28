use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::Profile;
use crate::error::PortalServiceError;
use crate::handlers::extract::CurrentIdentity;
use crate::state::AppState;
use crate::usecase::profile::{
    CompleteProfileInput, CompleteProfileUseCase, GetProfileUseCase, SignupProfileInput,
    SignupProfileUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub region: String,
    pub role: &'static str,
    pub complete: bool,
    #[serde(serialize_with = "crate::timefmt::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "crate::timefmt::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            complete: profile.is_complete(),
            email: profile.email,
            full_name: profile.full_name,
            phone_number: profile.phone_number,
            region: profile.region,
            role: profile.role.as_str(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ── POST /profiles ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupProfileRequest {
    pub full_name: String,
    pub phone_number: String,
    pub region: String,
}

pub async fn signup_profile(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Json(body): Json<SignupProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), PortalServiceError> {
    let usecase = SignupProfileUseCase {
        repo: state.profile_repo(),
        admin_email: state.routing.admin_email.clone(),
    };
    let profile = usecase
        .execute(
            &identity.0,
            SignupProfileInput {
                full_name: body.full_name,
                phone_number: body.phone_number,
                region: body.region,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

// ── GET /profiles/@me ────────────────────────────────────────────────────────

pub async fn get_me(
    identity: CurrentIdentity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, PortalServiceError> {
    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(identity.0.id).await?;
    Ok(Json(profile.into()))
}

// ── PATCH /profiles/@me ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
}

pub async fn update_me(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<StatusCode, PortalServiceError> {
    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
    };
    usecase
        .execute(
            identity.0.id,
            UpdateProfileInput {
                full_name: body.full_name,
                email: body.email,
                region: body.region,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /profiles/@me/complete ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CompleteProfileRequest {
    pub phone_number: String,
    pub region: String,
}

pub async fn complete_profile(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Json(body): Json<CompleteProfileRequest>,
) -> Result<StatusCode, PortalServiceError> {
    let usecase = CompleteProfileUseCase {
        repo: state.profile_repo(),
    };
    usecase
        .execute(
            identity.0.id,
            CompleteProfileInput {
                phone_number: body.phone_number,
                region: body.region,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
