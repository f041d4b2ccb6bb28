use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ProfileRepository;
use crate::domain::routing::NewProfile;
use crate::domain::types::{Identity, Profile, UserRole};
use crate::error::PortalServiceError;

/// Execute a provisioning side effect requested by the routing decision.
///
/// Idempotent: the "profile absent" check is the only dedup guard, so a
/// stale or duplicate callback code never double-provisions.
pub async fn provision_profile<R: ProfileRepository>(
    repo: &R,
    new_profile: NewProfile,
) -> Result<(), PortalServiceError> {
    if repo.find_by_id(new_profile.id).await?.is_some() {
        return Ok(());
    }
    let now = Utc::now();
    let profile = Profile {
        id: new_profile.id,
        email: new_profile.email,
        full_name: new_profile.full_name,
        phone_number: String::new(),
        region: String::new(),
        role: new_profile.role,
        created_at: now,
        updated_at: now,
    };
    repo.create(&profile).await
}

/// Assert the user's profile is complete. The route guard gates the screens;
/// this is the API-level check for direct write calls.
pub async fn ensure_complete<R: ProfileRepository>(
    repo: &R,
    user_id: Uuid,
) -> Result<Profile, PortalServiceError> {
    let profile = repo
        .find_by_id(user_id)
        .await?
        .ok_or(PortalServiceError::ProfileNotFound)?;
    if !profile.is_complete() {
        return Err(PortalServiceError::ProfileIncomplete);
    }
    Ok(profile)
}

// ── Signup (email/password) ──────────────────────────────────────────────────

/// Profile created synchronously at email/password signup: all fields are
/// collected up front, so the record is complete from the start.
pub struct SignupProfileInput {
    pub full_name: String,
    pub phone_number: String,
    pub region: String,
}

pub struct SignupProfileUseCase<R: ProfileRepository> {
    pub repo: R,
    pub admin_email: String,
}

impl<R: ProfileRepository> SignupProfileUseCase<R> {
    pub async fn execute(
        &self,
        identity: &Identity,
        input: SignupProfileInput,
    ) -> Result<Profile, PortalServiceError> {
        if input.full_name.is_empty() || input.phone_number.is_empty() || input.region.is_empty() {
            return Err(PortalServiceError::MissingData);
        }
        if self.repo.find_by_id(identity.id).await?.is_some() {
            return Err(PortalServiceError::ProfileExists);
        }
        let role = if identity.email.eq_ignore_ascii_case(&self.admin_email) {
            UserRole::Admin
        } else {
            UserRole::User
        };
        let now = Utc::now();
        let profile = Profile {
            id: identity.id,
            email: identity.email.clone(),
            full_name: input.full_name,
            phone_number: input.phone_number,
            region: input.region,
            role,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&profile).await?;
        Ok(profile)
    }
}

// ── CompleteProfile ──────────────────────────────────────────────────────────

pub struct CompleteProfileInput {
    pub phone_number: String,
    pub region: String,
}

pub struct CompleteProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> CompleteProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CompleteProfileInput,
    ) -> Result<(), PortalServiceError> {
        if input.phone_number.is_empty() || input.region.is_empty() {
            return Err(PortalServiceError::MissingData);
        }
        let updated = self
            .repo
            .set_contact(user_id, &input.phone_number, &input.region)
            .await?;
        if !updated {
            return Err(PortalServiceError::ProfileNotFound);
        }
        Ok(())
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Profile, PortalServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(PortalServiceError::ProfileNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
}

pub struct UpdateProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<(), PortalServiceError> {
        if input.full_name.is_none() && input.email.is_none() && input.region.is_none() {
            return Err(PortalServiceError::MissingData);
        }
        let updated = self
            .repo
            .update_details(
                user_id,
                input.full_name.as_deref(),
                input.email.as_deref(),
                input.region.as_deref(),
            )
            .await?;
        if !updated {
            return Err(PortalServiceError::ProfileNotFound);
        }
        Ok(())
    }
}
