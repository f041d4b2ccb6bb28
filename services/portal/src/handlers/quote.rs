use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::Quote;
use crate::error::PortalServiceError;
use crate::state::AppState;
use crate::usecase::quote::RandomQuoteUseCase;

#[derive(Serialize)]
pub struct QuoteResponse {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub active: bool,
    #[serde(serialize_with = "crate::timefmt::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id.to_string(),
            quote: quote.quote,
            author: quote.author,
            active: quote.active,
            created_at: quote.created_at,
        }
    }
}

// ── GET /quotes/random ───────────────────────────────────────────────────────

pub async fn random_quote(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, PortalServiceError> {
    let usecase = RandomQuoteUseCase {
        repo: state.quote_repo(),
    };
    let quote = usecase.execute().await?;
    Ok(Json(quote.into()))
}
