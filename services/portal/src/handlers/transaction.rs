use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Transaction, TransactionKind};
use crate::error::PortalServiceError;
use crate::handlers::extract::CurrentIdentity;
use crate::state::AppState;
use crate::usecase::profile::ensure_complete;
use crate::usecase::transaction::{
    AddTransactionInput, AddTransactionUseCase, ListTransactionsUseCase, MoneyFlowSummaryUseCase,
};

#[derive(Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub kind: &'static str,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(serialize_with = "crate::timefmt::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id.to_string(),
            kind: t.kind.as_str(),
            amount: t.amount,
            description: t.description,
            category: t.category,
            date: t.date,
            created_at: t.created_at,
        }
    }
}

// ── GET /dashboard/money-flow ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListTransactionsQuery {
    pub kind: Option<String>,
}

pub async fn list_transactions(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<TransactionResponse>>, PortalServiceError> {
    let kind = match query.kind.as_deref() {
        Some(raw) => Some(TransactionKind::parse(raw).ok_or(PortalServiceError::MissingData)?),
        None => None,
    };
    let usecase = ListTransactionsUseCase {
        repo: state.transaction_repo(),
    };
    let transactions = usecase.execute(identity.0.id, kind).await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

// ── POST /dashboard/money-flow ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddTransactionRequest {
    pub kind: String,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

pub async fn add_transaction(
    identity: CurrentIdentity,
    State(state): State<AppState>,
    Json(body): Json<AddTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), PortalServiceError> {
    let kind = TransactionKind::parse(&body.kind).ok_or(PortalServiceError::MissingData)?;
    ensure_complete(&state.profile_repo(), identity.0.id).await?;
    let usecase = AddTransactionUseCase {
        repo: state.transaction_repo(),
    };
    let transaction = usecase
        .execute(
            identity.0.id,
            AddTransactionInput {
                kind,
                amount: body.amount,
                description: body.description,
                category: body.category,
                date: body.date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(transaction.into())))
}

// ── GET /dashboard/money-flow/summary ────────────────────────────────────────

#[derive(Serialize)]
pub struct SummaryResponse {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub async fn money_flow_summary(
    identity: CurrentIdentity,
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, PortalServiceError> {
    let usecase = MoneyFlowSummaryUseCase {
        repo: state.transaction_repo(),
    };
    let summary = usecase.execute(identity.0.id).await?;
    Ok(Json(SummaryResponse {
        income: summary.income,
        expense: summary.expense,
        net: summary.net,
    }))
}
