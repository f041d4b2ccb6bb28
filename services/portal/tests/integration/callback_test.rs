use wealth_portal::domain::types::UserRole;
use wealth_portal::usecase::callback::{CallbackInput, CallbackOutcome, CallbackUseCase};

use crate::helpers::{
    ADMIN_EMAIL, MockIdentityProvider, MockProfileRepo, REFERRAL_DOMAIN, test_identity,
    test_profile, test_routing_config,
};

fn login_input(code: Option<&str>) -> CallbackInput {
    CallbackInput {
        code: code.map(str::to_owned),
        return_url: None,
        error_code: None,
        email_verification: false,
    }
}

#[tokio::test]
async fn should_reject_provider_reported_error_without_exchange() {
    let identity = test_identity("alice@example.com");
    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::empty(),
        routing: test_routing_config(),
    };

    let outcome = uc
        .execute(CallbackInput {
            code: Some("good-code".to_owned()),
            return_url: None,
            error_code: Some("access_denied".to_owned()),
            email_verification: false,
        })
        .await
        .unwrap();

    let CallbackOutcome::Rejected { location } = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(location, "/auth/login?error=oauth_error");
}

#[tokio::test]
async fn should_reject_callback_without_code() {
    let identity = test_identity("alice@example.com");
    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::empty(),
        routing: test_routing_config(),
    };

    let outcome = uc.execute(login_input(None)).await.unwrap();

    let CallbackOutcome::Rejected { location } = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(location, "/auth/login?error=no_code");
}

#[tokio::test]
async fn should_reject_failed_exchange_with_oauth_error() {
    let identity = test_identity("alice@example.com");
    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::empty(),
        routing: test_routing_config(),
    };

    let outcome = uc.execute(login_input(Some("stale-code"))).await.unwrap();

    let CallbackOutcome::Rejected { location } = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(location, "/auth/login?error=oauth_error");
}

#[tokio::test]
async fn should_report_verification_failure_for_email_verification_callback() {
    let identity = test_identity("alice@example.com");
    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::empty(),
        routing: test_routing_config(),
    };

    let outcome = uc
        .execute(CallbackInput {
            code: Some("stale-code".to_owned()),
            return_url: None,
            error_code: None,
            email_verification: true,
        })
        .await
        .unwrap();

    let CallbackOutcome::Rejected { location } = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(location, "/auth/login?error=verification_failed");
}

#[tokio::test]
async fn should_provision_minimal_profile_on_first_login() {
    let identity = test_identity("alice@example.com");
    let profiles = MockProfileRepo::empty();
    let profiles_handle = profiles.profiles_handle();

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity.clone()),
        profiles,
        routing: test_routing_config(),
    };

    let outcome = uc.execute(login_input(Some("good-code"))).await.unwrap();

    let CallbackOutcome::Authenticated {
        identity: out_identity,
        location,
    } = outcome
    else {
        panic!("expected authentication, got {outcome:?}");
    };
    assert_eq!(out_identity.id, identity.id);
    assert_eq!(location, "/auth/complete-profile");

    let stored = profiles_handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, identity.id);
    assert_eq!(stored[0].role, UserRole::User);
    assert!(!stored[0].is_complete());
}

#[tokio::test]
async fn should_not_double_provision_on_repeated_callback() {
    let identity = test_identity("alice@example.com");
    let profiles = MockProfileRepo::empty();
    let profiles_handle = profiles.profiles_handle();

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles,
        routing: test_routing_config(),
    };

    uc.execute(login_input(Some("good-code"))).await.unwrap();
    uc.execute(login_input(Some("good-code"))).await.unwrap();

    assert_eq!(profiles_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_provision_admin_role_for_configured_admin_email() {
    let identity = test_identity(ADMIN_EMAIL);
    let profiles = MockProfileRepo::empty();
    let profiles_handle = profiles.profiles_handle();

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles,
        routing: test_routing_config(),
    };

    uc.execute(login_input(Some("good-code"))).await.unwrap();

    let stored = profiles_handle.lock().unwrap();
    assert_eq!(stored[0].role, UserRole::Admin);
}

#[tokio::test]
async fn should_land_complete_user_on_dashboard() {
    let identity = test_identity("alice@example.com");
    let profile = test_profile(identity.id, UserRole::User, "+111", "us");

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::new(vec![profile]),
        routing: test_routing_config(),
    };

    let outcome = uc.execute(login_input(Some("good-code"))).await.unwrap();

    let CallbackOutcome::Authenticated { location, .. } = outcome else {
        panic!("expected authentication, got {outcome:?}");
    };
    assert_eq!(location, "/dashboard");
}

#[tokio::test]
async fn should_land_complete_admin_on_admin_dashboard() {
    let identity = test_identity(ADMIN_EMAIL);
    let profile = test_profile(identity.id, UserRole::Admin, "+111", "np");

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::new(vec![profile]),
        routing: test_routing_config(),
    };

    let outcome = uc.execute(login_input(Some("good-code"))).await.unwrap();

    let CallbackOutcome::Authenticated { location, .. } = outcome else {
        panic!("expected authentication, got {outcome:?}");
    };
    assert_eq!(location, "/admin/dashboard");
}

#[tokio::test]
async fn should_set_welcome_flag_for_referral_return_url() {
    let identity = test_identity("alice@example.com");
    let profile = test_profile(identity.id, UserRole::User, "+111", "us");

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::new(vec![profile]),
        routing: test_routing_config(),
    };

    let outcome = uc
        .execute(CallbackInput {
            code: Some("good-code".to_owned()),
            return_url: Some(format!("https://{REFERRAL_DOMAIN}/articles/saving")),
            error_code: None,
            email_verification: false,
        })
        .await
        .unwrap();

    let CallbackOutcome::Authenticated { location, .. } = outcome else {
        panic!("expected authentication, got {outcome:?}");
    };
    assert_eq!(location, "/dashboard?welcome=true");
}

#[tokio::test]
async fn should_redirect_to_retry_when_profile_store_down() {
    let identity = test_identity("alice@example.com");

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles: MockProfileRepo::down(),
        routing: test_routing_config(),
    };

    let outcome = uc.execute(login_input(Some("good-code"))).await.unwrap();

    // No session is established when the store cannot be consulted.
    let CallbackOutcome::Rejected { location } = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(location, "/auth/login?error=retry");
}

#[tokio::test]
async fn should_send_incomplete_existing_profile_to_completion() {
    let identity = test_identity("alice@example.com");
    let profile = test_profile(identity.id, UserRole::User, "", "us");
    let profiles = MockProfileRepo::new(vec![profile]);
    let profiles_handle = profiles.profiles_handle();

    let uc = CallbackUseCase {
        provider: MockIdentityProvider::accepting("good-code", identity),
        profiles,
        routing: test_routing_config(),
    };

    let outcome = uc.execute(login_input(Some("good-code"))).await.unwrap();

    let CallbackOutcome::Authenticated { location, .. } = outcome else {
        panic!("expected authentication, got {outcome:?}");
    };
    assert_eq!(location, "/auth/complete-profile");
    // Existing profile, no second provisioning.
    assert_eq!(profiles_handle.lock().unwrap().len(), 1);
}
