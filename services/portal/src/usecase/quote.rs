use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::QuoteRepository;
use crate::domain::types::Quote;
use crate::error::PortalServiceError;

// ── RandomQuote ──────────────────────────────────────────────────────────────

/// Pick one active quote at random for the dashboard rotation.
pub struct RandomQuoteUseCase<R: QuoteRepository> {
    pub repo: R,
}

impl<R: QuoteRepository> RandomQuoteUseCase<R> {
    pub async fn execute(&self) -> Result<Quote, PortalServiceError> {
        let active = self.repo.list_active().await?;
        if active.is_empty() {
            return Err(PortalServiceError::QuoteNotFound);
        }
        let index = rand::rng().random_range(0..active.len());
        Ok(active[index].clone())
    }
}

// ── ListQuotes ───────────────────────────────────────────────────────────────

pub struct ListQuotesUseCase<R: QuoteRepository> {
    pub repo: R,
}

impl<R: QuoteRepository> ListQuotesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Quote>, PortalServiceError> {
        self.repo.list().await
    }
}

// ── CreateQuote ──────────────────────────────────────────────────────────────

pub struct CreateQuoteInput {
    pub quote: String,
    pub author: String,
}

pub struct CreateQuoteUseCase<R: QuoteRepository> {
    pub repo: R,
}

impl<R: QuoteRepository> CreateQuoteUseCase<R> {
    pub async fn execute(&self, input: CreateQuoteInput) -> Result<Quote, PortalServiceError> {
        if input.quote.is_empty() || input.author.is_empty() {
            return Err(PortalServiceError::MissingData);
        }
        let quote = Quote {
            id: Uuid::new_v4(),
            quote: input.quote,
            author: input.author,
            active: true,
            created_at: Utc::now(),
        };
        self.repo.create(&quote).await?;
        Ok(quote)
    }
}

// ── UpdateQuote ──────────────────────────────────────────────────────────────

pub struct UpdateQuoteInput {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub active: Option<bool>,
}

pub struct UpdateQuoteUseCase<R: QuoteRepository> {
    pub repo: R,
}

impl<R: QuoteRepository> UpdateQuoteUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: UpdateQuoteInput) -> Result<(), PortalServiceError> {
        if input.quote.is_none() && input.author.is_none() && input.active.is_none() {
            return Err(PortalServiceError::MissingData);
        }
        let updated = self
            .repo
            .update(
                id,
                input.quote.as_deref(),
                input.author.as_deref(),
                input.active,
            )
            .await?;
        if !updated {
            return Err(PortalServiceError::QuoteNotFound);
        }
        Ok(())
    }
}

// ── DeleteQuote ──────────────────────────────────────────────────────────────

pub struct DeleteQuoteUseCase<R: QuoteRepository> {
    pub repo: R,
}

impl<R: QuoteRepository> DeleteQuoteUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), PortalServiceError> {
        if !self.repo.delete(id).await? {
            return Err(PortalServiceError::QuoteNotFound);
        }
        Ok(())
    }
}
