#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Identity, Profile, Quote, Transaction, TransactionKind, UserRole};
use crate::error::PortalServiceError;

/// Port for the external identity provider. Opaque: any round-trip failure
/// surfaces as `ExchangeFailed`.
pub trait IdentityProvider: Send + Sync {
    /// Exchange an authorization code for an authenticated identity.
    async fn exchange_code(&self, code: &str) -> Result<Identity, PortalServiceError>;
}

/// Store for user profiles, keyed by identity id.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, PortalServiceError>;

    async fn create(&self, profile: &Profile) -> Result<(), PortalServiceError>;

    /// Set phone and region (the completion step). Returns `false` if the
    /// profile does not exist.
    async fn set_contact(
        &self,
        id: Uuid,
        phone_number: &str,
        region: &str,
    ) -> Result<bool, PortalServiceError>;

    /// Patch name/email/region. `None` fields are left untouched.
    /// Returns `false` if the profile does not exist.
    async fn update_details(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        email: Option<&str>,
        region: Option<&str>,
    ) -> Result<bool, PortalServiceError>;

    /// Flip the role. Returns `false` if the profile does not exist.
    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<bool, PortalServiceError>;

    async fn list(&self) -> Result<Vec<Profile>, PortalServiceError>;
}

/// Store for motivational quotes.
pub trait QuoteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Quote>, PortalServiceError>;

    async fn list_active(&self) -> Result<Vec<Quote>, PortalServiceError>;

    async fn create(&self, quote: &Quote) -> Result<(), PortalServiceError>;

    /// Patch text/author/active. `None` fields are left untouched.
    /// Returns `false` if the quote does not exist.
    async fn update(
        &self,
        id: Uuid,
        quote: Option<&str>,
        author: Option<&str>,
        active: Option<bool>,
    ) -> Result<bool, PortalServiceError>;

    /// Delete a quote. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, PortalServiceError>;
}

/// Store for money-flow entries.
pub trait TransactionRepository: Send + Sync {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Transaction>, PortalServiceError>;

    async fn create(&self, transaction: &Transaction) -> Result<(), PortalServiceError>;
}
