use sea_orm::DatabaseConnection;

use crate::domain::routing::RoutingConfig;
use crate::infra::db::{DbProfileRepository, DbQuoteRepository, DbTransactionRepository};
use crate::infra::provider::HttpIdentityProvider;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http: reqwest::Client,
    pub jwt_secret: String,
    pub cookie_domain: String,
    pub provider_url: String,
    pub routing: RoutingConfig,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn quote_repo(&self) -> DbQuoteRepository {
        DbQuoteRepository {
            db: self.db.clone(),
        }
    }

    pub fn transaction_repo(&self) -> DbTransactionRepository {
        DbTransactionRepository {
            db: self.db.clone(),
        }
    }

    pub fn identity_provider(&self) -> HttpIdentityProvider {
        HttpIdentityProvider::new(self.http.clone(), self.provider_url.clone())
    }
}
