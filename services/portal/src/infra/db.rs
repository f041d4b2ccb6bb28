use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use wealth_portal_schema::{profiles, quotes, transactions};

use crate::domain::repository::{ProfileRepository, QuoteRepository, TransactionRepository};
use crate::domain::types::{Profile, Quote, Transaction, TransactionKind, UserRole};
use crate::error::PortalServiceError;

// ── Profile repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, PortalServiceError> {
        let model = profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find profile by id")?;
        model.map(profile_from_model).transpose()
    }

    async fn create(&self, profile: &Profile) -> Result<(), PortalServiceError> {
        profiles::ActiveModel {
            id: Set(profile.id),
            email: Set(profile.email.clone()),
            full_name: Set(profile.full_name.clone()),
            phone_number: Set(profile.phone_number.clone()),
            region: Set(profile.region.clone()),
            role: Set(profile.role.as_str().to_owned()),
            created_at: Set(profile.created_at),
            updated_at: Set(profile.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create profile")?;
        Ok(())
    }

    async fn set_contact(
        &self,
        id: Uuid,
        phone_number: &str,
        region: &str,
    ) -> Result<bool, PortalServiceError> {
        let result = profiles::Entity::update_many()
            .col_expr(profiles::Column::PhoneNumber, Expr::value(phone_number))
            .col_expr(profiles::Column::Region, Expr::value(region))
            .col_expr(profiles::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(profiles::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("set profile contact")?;
        Ok(result.rows_affected > 0)
    }

    async fn update_details(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        email: Option<&str>,
        region: Option<&str>,
    ) -> Result<bool, PortalServiceError> {
        let mut update = profiles::Entity::update_many()
            .col_expr(profiles::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(v) = full_name {
            update = update.col_expr(profiles::Column::FullName, Expr::value(v));
        }
        if let Some(v) = email {
            update = update.col_expr(profiles::Column::Email, Expr::value(v));
        }
        if let Some(v) = region {
            update = update.col_expr(profiles::Column::Region, Expr::value(v));
        }
        let result = update
            .filter(profiles::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update profile details")?;
        Ok(result.rows_affected > 0)
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<bool, PortalServiceError> {
        let result = profiles::Entity::update_many()
            .col_expr(profiles::Column::Role, Expr::value(role.as_str()))
            .col_expr(profiles::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(profiles::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update profile role")?;
        Ok(result.rows_affected > 0)
    }

    async fn list(&self) -> Result<Vec<Profile>, PortalServiceError> {
        let models = profiles::Entity::find()
            .order_by_asc(profiles::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list profiles")?;
        models.into_iter().map(profile_from_model).collect()
    }
}

fn profile_from_model(model: profiles::Model) -> Result<Profile, PortalServiceError> {
    let role = UserRole::parse(&model.role)
        .with_context(|| format!("unknown role value {:?} for profile {}", model.role, model.id))?;
    Ok(Profile {
        id: model.id,
        email: model.email,
        full_name: model.full_name,
        phone_number: model.phone_number,
        region: model.region,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Quote repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbQuoteRepository {
    pub db: DatabaseConnection,
}

impl QuoteRepository for DbQuoteRepository {
    async fn list(&self) -> Result<Vec<Quote>, PortalServiceError> {
        let models = quotes::Entity::find()
            .order_by_desc(quotes::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list quotes")?;
        Ok(models.into_iter().map(quote_from_model).collect())
    }

    async fn list_active(&self) -> Result<Vec<Quote>, PortalServiceError> {
        let models = quotes::Entity::find()
            .filter(quotes::Column::Active.eq(true))
            .all(&self.db)
            .await
            .context("list active quotes")?;
        Ok(models.into_iter().map(quote_from_model).collect())
    }

    async fn create(&self, quote: &Quote) -> Result<(), PortalServiceError> {
        quotes::ActiveModel {
            id: Set(quote.id),
            quote: Set(quote.quote.clone()),
            author: Set(quote.author.clone()),
            active: Set(quote.active),
            created_at: Set(quote.created_at),
        }
        .insert(&self.db)
        .await
        .context("create quote")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        quote: Option<&str>,
        author: Option<&str>,
        active: Option<bool>,
    ) -> Result<bool, PortalServiceError> {
        let mut update = quotes::Entity::update_many();
        if let Some(v) = quote {
            update = update.col_expr(quotes::Column::Quote, Expr::value(v));
        }
        if let Some(v) = author {
            update = update.col_expr(quotes::Column::Author, Expr::value(v));
        }
        if let Some(v) = active {
            update = update.col_expr(quotes::Column::Active, Expr::value(v));
        }
        let result = update
            .filter(quotes::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update quote")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PortalServiceError> {
        let result = quotes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete quote")?;
        Ok(result.rows_affected > 0)
    }
}

fn quote_from_model(model: quotes::Model) -> Quote {
    Quote {
        id: model.id,
        quote: model.quote,
        author: model.author,
        active: model.active,
        created_at: model.created_at,
    }
}

// ── Transaction repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTransactionRepository {
    pub db: DatabaseConnection,
}

impl TransactionRepository for DbTransactionRepository {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Transaction>, PortalServiceError> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .order_by_desc(transactions::Column::Date);
        if let Some(kind) = kind {
            query = query.filter(transactions::Column::Kind.eq(kind.as_str()));
        }
        let models = query
            .all(&self.db)
            .await
            .context("list transactions by user")?;
        models.into_iter().map(transaction_from_model).collect()
    }

    async fn create(&self, transaction: &Transaction) -> Result<(), PortalServiceError> {
        transactions::ActiveModel {
            id: Set(transaction.id),
            user_id: Set(transaction.user_id),
            kind: Set(transaction.kind.as_str().to_owned()),
            amount: Set(transaction.amount),
            description: Set(transaction.description.clone()),
            category: Set(transaction.category.clone()),
            date: Set(transaction.date),
            created_at: Set(transaction.created_at),
        }
        .insert(&self.db)
        .await
        .context("create transaction")?;
        Ok(())
    }
}

fn transaction_from_model(
    model: transactions::Model,
) -> Result<Transaction, PortalServiceError> {
    let kind = TransactionKind::parse(&model.kind).with_context(|| {
        format!(
            "unknown transaction kind {:?} for transaction {}",
            model.kind, model.id
        )
    })?;
    Ok(Transaction {
        id: model.id,
        user_id: model.user_id,
        kind,
        amount: model.amount,
        description: model.description,
        category: model.category,
        date: model.date,
        created_at: model.created_at,
    })
}
