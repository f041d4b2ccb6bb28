use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::IdentityProvider;
use crate::domain::types::{AuthProvider, Identity};
use crate::error::PortalServiceError;

/// HTTP client for the hosted identity provider. Exchanges the one-time
/// code from the callback for the authenticated user's identity.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
}

impl HttpIdentityProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Serialize)]
struct ExchangeRequest<'a> {
    code: &'a str,
}

#[derive(Deserialize)]
struct ExchangeResponse {
    id: Uuid,
    email: String,
    display_name: String,
    provider: String,
}

impl IdentityProvider for HttpIdentityProvider {
    async fn exchange_code(&self, code: &str) -> Result<Identity, PortalServiceError> {
        let resp = self
            .client
            .post(format!("{}/token", self.base_url))
            .json(&ExchangeRequest { code })
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "identity provider unreachable");
                PortalServiceError::ExchangeFailed
            })?;

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), "identity provider rejected code");
            return Err(PortalServiceError::ExchangeFailed);
        }

        let body: ExchangeResponse = resp.json().await.map_err(|err| {
            tracing::warn!(error = %err, "malformed identity provider response");
            PortalServiceError::ExchangeFailed
        })?;

        let provider = match body.provider.as_str() {
            "password" => AuthProvider::Password,
            _ => AuthProvider::Federated,
        };
        Ok(Identity {
            id: body.id,
            email: body.email,
            display_name: body.display_name,
            provider,
        })
    }
}
