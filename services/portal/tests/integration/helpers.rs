use std::sync::{Arc, Mutex};

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use wealth_portal::domain::repository::{
    IdentityProvider, ProfileRepository, QuoteRepository, TransactionRepository,
};
use wealth_portal::domain::routing::RoutingConfig;
use wealth_portal::domain::types::{
    AuthProvider, Identity, Profile, Quote, Transaction, TransactionKind, UserRole,
};
use wealth_portal::error::PortalServiceError;

pub const ADMIN_EMAIL: &str = "owner@example.com";
pub const REFERRAL_DOMAIN: &str = "referrals.example.net";

/// Decimal literal from a string, panicking on malformed input.
pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn test_routing_config() -> RoutingConfig {
    RoutingConfig {
        admin_email: ADMIN_EMAIL.to_owned(),
        referral_domain: REFERRAL_DOMAIN.to_owned(),
    }
}

// ── MockIdentityProvider ─────────────────────────────────────────────────────

/// Accepts one known code; every other code fails the exchange.
pub struct MockIdentityProvider {
    pub code: String,
    pub identity: Identity,
}

impl MockIdentityProvider {
    pub fn accepting(code: &str, identity: Identity) -> Self {
        Self {
            code: code.to_owned(),
            identity,
        }
    }
}

impl IdentityProvider for MockIdentityProvider {
    async fn exchange_code(&self, code: &str) -> Result<Identity, PortalServiceError> {
        if code == self.code {
            Ok(self.identity.clone())
        } else {
            Err(PortalServiceError::ExchangeFailed)
        }
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
    /// When set, every call fails as if the store were down.
    pub unavailable: bool,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(profiles)),
            unavailable: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn down() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(vec![])),
            unavailable: true,
        }
    }

    /// Returns a shared handle to the profile list for post-execution inspection.
    pub fn profiles_handle(&self) -> Arc<Mutex<Vec<Profile>>> {
        Arc::clone(&self.profiles)
    }

    fn check_available(&self) -> Result<(), PortalServiceError> {
        if self.unavailable {
            return Err(PortalServiceError::Internal(anyhow::anyhow!(
                "profile store down"
            )));
        }
        Ok(())
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, PortalServiceError> {
        self.check_available()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<(), PortalServiceError> {
        self.check_available()?;
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn set_contact(
        &self,
        id: Uuid,
        phone_number: &str,
        region: &str,
    ) -> Result<bool, PortalServiceError> {
        self.check_available()?;
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.phone_number = phone_number.to_owned();
                p.region = region.to_owned();
                p.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_details(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        email: Option<&str>,
        region: Option<&str>,
    ) -> Result<bool, PortalServiceError> {
        self.check_available()?;
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                if let Some(v) = full_name {
                    p.full_name = v.to_owned();
                }
                if let Some(v) = email {
                    p.email = v.to_owned();
                }
                if let Some(v) = region {
                    p.region = v.to_owned();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<bool, PortalServiceError> {
        self.check_available()?;
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<Profile>, PortalServiceError> {
        self.check_available()?;
        Ok(self.profiles.lock().unwrap().clone())
    }
}

// ── MockQuoteRepo ────────────────────────────────────────────────────────────

pub struct MockQuoteRepo {
    pub quotes: Arc<Mutex<Vec<Quote>>>,
}

impl MockQuoteRepo {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: Arc::new(Mutex::new(quotes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn quotes_handle(&self) -> Arc<Mutex<Vec<Quote>>> {
        Arc::clone(&self.quotes)
    }
}

impl QuoteRepository for MockQuoteRepo {
    async fn list(&self) -> Result<Vec<Quote>, PortalServiceError> {
        Ok(self.quotes.lock().unwrap().clone())
    }

    async fn list_active(&self) -> Result<Vec<Quote>, PortalServiceError> {
        Ok(self
            .quotes
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.active)
            .cloned()
            .collect())
    }

    async fn create(&self, quote: &Quote) -> Result<(), PortalServiceError> {
        self.quotes.lock().unwrap().push(quote.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        quote: Option<&str>,
        author: Option<&str>,
        active: Option<bool>,
    ) -> Result<bool, PortalServiceError> {
        let mut quotes = self.quotes.lock().unwrap();
        match quotes.iter_mut().find(|q| q.id == id) {
            Some(q) => {
                if let Some(v) = quote {
                    q.quote = v.to_owned();
                }
                if let Some(v) = author {
                    q.author = v.to_owned();
                }
                if let Some(v) = active {
                    q.active = v;
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PortalServiceError> {
        let mut quotes = self.quotes.lock().unwrap();
        let before = quotes.len();
        quotes.retain(|q| q.id != id);
        Ok(quotes.len() < before)
    }
}

// ── MockTransactionRepo ──────────────────────────────────────────────────────

pub struct MockTransactionRepo {
    pub transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl MockTransactionRepo {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn transactions_handle(&self) -> Arc<Mutex<Vec<Transaction>>> {
        Arc::clone(&self.transactions)
    }
}

impl TransactionRepository for MockTransactionRepo {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Transaction>, PortalServiceError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && kind.is_none_or(|k| t.kind == k))
            .cloned()
            .collect())
    }

    async fn create(&self, transaction: &Transaction) -> Result<(), PortalServiceError> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_identity(email: &str) -> Identity {
    Identity {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: email.to_owned(),
        display_name: "Test User".to_owned(),
        provider: AuthProvider::Federated,
    }
}

pub fn test_profile(id: Uuid, role: UserRole, phone: &str, region: &str) -> Profile {
    Profile {
        id,
        email: "user@example.com".to_owned(),
        full_name: "Test User".to_owned(),
        phone_number: phone.to_owned(),
        region: region.to_owned(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_quote(text: &str, active: bool) -> Quote {
    Quote {
        id: Uuid::new_v4(),
        quote: text.to_owned(),
        author: "Someone Wise".to_owned(),
        active,
        created_at: Utc::now(),
    }
}

pub fn test_transaction(user_id: Uuid, kind: TransactionKind, amount: Decimal) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        user_id,
        kind,
        amount,
        description: "entry".to_owned(),
        category: "general".to_owned(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        created_at: Utc::now(),
    }
}
