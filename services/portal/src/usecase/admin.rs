use uuid::Uuid;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{Profile, UserRole};
use crate::error::PortalServiceError;

/// Assert the acting user holds the admin role. The route guard already
/// gates `/admin` paths; this is the API-level check for direct calls.
pub async fn ensure_admin<R: ProfileRepository>(
    repo: &R,
    acting_id: Uuid,
) -> Result<Profile, PortalServiceError> {
    let profile = repo
        .find_by_id(acting_id)
        .await?
        .ok_or(PortalServiceError::Forbidden)?;
    if profile.role != UserRole::Admin {
        return Err(PortalServiceError::Forbidden);
    }
    Ok(profile)
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> ListUsersUseCase<R> {
    pub async fn execute(&self, acting_id: Uuid) -> Result<Vec<Profile>, PortalServiceError> {
        ensure_admin(&self.repo, acting_id).await?;
        self.repo.list().await
    }
}

// ── UpdateRole ───────────────────────────────────────────────────────────────

pub struct UpdateRoleUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> UpdateRoleUseCase<R> {
    pub async fn execute(
        &self,
        acting_id: Uuid,
        target_id: Uuid,
        role: UserRole,
    ) -> Result<(), PortalServiceError> {
        ensure_admin(&self.repo, acting_id).await?;
        let updated = self.repo.update_role(target_id, role).await?;
        if !updated {
            return Err(PortalServiceError::ProfileNotFound);
        }
        Ok(())
    }
}
