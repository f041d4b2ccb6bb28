use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::repository::TransactionRepository;
use crate::domain::types::{Transaction, TransactionKind};
use crate::error::PortalServiceError;

// ── AddTransaction ───────────────────────────────────────────────────────────

pub struct AddTransactionInput {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

pub struct AddTransactionUseCase<R: TransactionRepository> {
    pub repo: R,
}

impl<R: TransactionRepository> AddTransactionUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: AddTransactionInput,
    ) -> Result<Transaction, PortalServiceError> {
        if input.amount <= Decimal::ZERO {
            return Err(PortalServiceError::InvalidAmount);
        }
        if input.description.is_empty() || input.category.is_empty() {
            return Err(PortalServiceError::MissingData);
        }
        let transaction = Transaction {
            id: Uuid::new_v4(),
            user_id,
            kind: input.kind,
            amount: input.amount,
            description: input.description,
            category: input.category,
            date: input.date,
            created_at: Utc::now(),
        };
        self.repo.create(&transaction).await?;
        Ok(transaction)
    }
}

// ── ListTransactions ─────────────────────────────────────────────────────────

pub struct ListTransactionsUseCase<R: TransactionRepository> {
    pub repo: R,
}

impl<R: TransactionRepository> ListTransactionsUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Transaction>, PortalServiceError> {
        self.repo.list_by_user(user_id, kind).await
    }
}

// ── MoneyFlowSummary ─────────────────────────────────────────────────────────

/// Aggregated totals for the dashboard summary cards. Decimal arithmetic:
/// fractional amounts must accumulate exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFlowSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub struct MoneyFlowSummaryUseCase<R: TransactionRepository> {
    pub repo: R,
}

impl<R: TransactionRepository> MoneyFlowSummaryUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<MoneyFlowSummary, PortalServiceError> {
        let transactions = self.repo.list_by_user(user_id, None).await?;
        let (income, expense) = transactions
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| match t.kind {
                TransactionKind::Income => (inc + t.amount, exp),
                TransactionKind::Expense => (inc, exp + t.amount),
            });
        Ok(MoneyFlowSummary {
            income,
            expense,
            net: income - expense,
        })
    }
}
