use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authentication provider that vouched for an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    Password,
    Federated,
}

impl AuthProvider {
    /// Parse from wire value. Returns `None` for unknown values.
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "password" => Some(Self::Password),
            "federated" => Some(Self::Federated),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Federated => "federated",
        }
    }
}

/// Authenticated principal as reported by the external identity provider.
/// Never stored locally; travels inside the session token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub provider: AuthProvider,
}

/// User permission level.
///
/// Wire format: string (`"user"` or `"admin"`), matching the stored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Parse from wire value. Returns `None` for unknown values.
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Application-owned profile record keyed by the identity id.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub region: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Completeness invariant: phone and region both non-empty.
    /// Completeness, not existence, gates access to protected areas.
    pub fn is_complete(&self) -> bool {
        !self.phone_number.is_empty() && !self.region.is_empty()
    }
}

/// Motivational quote shown in rotation on the dashboard.
#[derive(Debug, Clone)]
pub struct Quote {
    pub id: Uuid,
    pub quote: String,
    pub author: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Income or expense direction of a money-flow entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse from wire value. Returns `None` for unknown values.
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Single money-flow entry.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: TransactionKind,
    /// Exact decimal; money is never a binary float.
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: chrono::NaiveDate,
    pub created_at: DateTime<Utc>,
}
