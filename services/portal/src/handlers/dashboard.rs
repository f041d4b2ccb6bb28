use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::PortalServiceError;
use crate::handlers::extract::CurrentIdentity;
use crate::handlers::profile::ProfileResponse;
use crate::handlers::quote::QuoteResponse;
use crate::state::AppState;
use crate::usecase::profile::GetProfileUseCase;
use crate::usecase::quote::RandomQuoteUseCase;
use crate::usecase::transaction::MoneyFlowSummaryUseCase;

// ── GET /dashboard ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DashboardResponse {
    pub profile: ProfileResponse,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    /// Absent when no active quotes exist.
    pub quote: Option<QuoteResponse>,
}

pub async fn get_dashboard(
    identity: CurrentIdentity,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, PortalServiceError> {
    let profile = GetProfileUseCase {
        repo: state.profile_repo(),
    }
    .execute(identity.0.id)
    .await?;

    let summary = MoneyFlowSummaryUseCase {
        repo: state.transaction_repo(),
    }
    .execute(identity.0.id)
    .await?;

    let quote = match (RandomQuoteUseCase {
        repo: state.quote_repo(),
    })
    .execute()
    .await
    {
        Ok(quote) => Some(quote.into()),
        Err(PortalServiceError::QuoteNotFound) => None,
        Err(e) => return Err(e),
    };

    Ok(Json(DashboardResponse {
        profile: profile.into(),
        income: summary.income,
        expense: summary.expense,
        net: summary.net,
        quote,
    }))
}
