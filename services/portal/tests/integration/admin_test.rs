use uuid::Uuid;

use wealth_portal::domain::types::UserRole;
use wealth_portal::error::PortalServiceError;
use wealth_portal::usecase::admin::{ListUsersUseCase, UpdateRoleUseCase, ensure_admin};

use crate::helpers::{MockProfileRepo, test_profile};

#[tokio::test]
async fn should_list_users_for_admin() {
    let admin_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let uc = ListUsersUseCase {
        repo: MockProfileRepo::new(vec![
            test_profile(admin_id, UserRole::Admin, "+111", "np"),
            test_profile(user_id, UserRole::User, "+222", "us"),
        ]),
    };

    let users = uc.execute(admin_id).await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn should_forbid_listing_users_for_non_admin() {
    let user_id = Uuid::new_v4();
    let uc = ListUsersUseCase {
        repo: MockProfileRepo::new(vec![test_profile(user_id, UserRole::User, "+111", "us")]),
    };

    let result = uc.execute(user_id).await;
    assert!(matches!(result, Err(PortalServiceError::Forbidden)));
}

#[tokio::test]
async fn should_forbid_acting_user_without_profile() {
    let repo = MockProfileRepo::empty();
    let result = ensure_admin(&repo, Uuid::new_v4()).await;
    assert!(matches!(result, Err(PortalServiceError::Forbidden)));
}

#[tokio::test]
async fn should_promote_user_to_admin() {
    let admin_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let repo = MockProfileRepo::new(vec![
        test_profile(admin_id, UserRole::Admin, "+111", "np"),
        test_profile(user_id, UserRole::User, "+222", "us"),
    ]);
    let profiles_handle = repo.profiles_handle();
    let uc = UpdateRoleUseCase { repo };

    uc.execute(admin_id, user_id, UserRole::Admin).await.unwrap();

    let profiles = profiles_handle.lock().unwrap();
    let target = profiles.iter().find(|p| p.id == user_id).unwrap();
    assert_eq!(target.role, UserRole::Admin);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_role_target() {
    let admin_id = Uuid::new_v4();
    let uc = UpdateRoleUseCase {
        repo: MockProfileRepo::new(vec![test_profile(admin_id, UserRole::Admin, "+111", "np")]),
    };

    let result = uc.execute(admin_id, Uuid::new_v4(), UserRole::User).await;
    assert!(matches!(result, Err(PortalServiceError::ProfileNotFound)));
}
