use wealth_portal::error::PortalServiceError;
use wealth_portal::usecase::quote::{
    CreateQuoteInput, CreateQuoteUseCase, DeleteQuoteUseCase, RandomQuoteUseCase,
    UpdateQuoteInput, UpdateQuoteUseCase,
};

use crate::helpers::{MockQuoteRepo, test_quote};

#[tokio::test]
async fn should_pick_random_quote_from_active_only() {
    let active = test_quote("Save first, spend later.", true);
    let inactive = test_quote("Retired wisdom.", false);
    let uc = RandomQuoteUseCase {
        repo: MockQuoteRepo::new(vec![active.clone(), inactive]),
    };

    // Only one active quote, so the pick is deterministic.
    for _ in 0..5 {
        let picked = uc.execute().await.unwrap();
        assert_eq!(picked.id, active.id);
    }
}

#[tokio::test]
async fn should_return_not_found_when_no_active_quotes() {
    let uc = RandomQuoteUseCase {
        repo: MockQuoteRepo::new(vec![test_quote("Retired wisdom.", false)]),
    };
    let result = uc.execute().await;
    assert!(matches!(result, Err(PortalServiceError::QuoteNotFound)));
}

#[tokio::test]
async fn should_create_quote_active_by_default() {
    let repo = MockQuoteRepo::empty();
    let quotes_handle = repo.quotes_handle();
    let uc = CreateQuoteUseCase { repo };

    let quote = uc
        .execute(CreateQuoteInput {
            quote: "Compound interest is patient.".to_owned(),
            author: "Someone Wise".to_owned(),
        })
        .await
        .unwrap();

    assert!(quote.active);
    assert_eq!(quotes_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_quote_with_empty_fields() {
    let uc = CreateQuoteUseCase {
        repo: MockQuoteRepo::empty(),
    };
    let result = uc
        .execute(CreateQuoteInput {
            quote: String::new(),
            author: "Someone Wise".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(PortalServiceError::MissingData)));
}

#[tokio::test]
async fn should_deactivate_quote_via_update() {
    let quote = test_quote("Save first.", true);
    let repo = MockQuoteRepo::new(vec![quote.clone()]);
    let quotes_handle = repo.quotes_handle();
    let uc = UpdateQuoteUseCase { repo };

    uc.execute(
        quote.id,
        UpdateQuoteInput {
            quote: None,
            author: None,
            active: Some(false),
        },
    )
    .await
    .unwrap();

    assert!(!quotes_handle.lock().unwrap()[0].active);
}

#[tokio::test]
async fn should_return_not_found_when_updating_absent_quote() {
    let uc = UpdateQuoteUseCase {
        repo: MockQuoteRepo::empty(),
    };
    let result = uc
        .execute(
            uuid::Uuid::new_v4(),
            UpdateQuoteInput {
                quote: Some("text".to_owned()),
                author: None,
                active: None,
            },
        )
        .await;
    assert!(matches!(result, Err(PortalServiceError::QuoteNotFound)));
}

#[tokio::test]
async fn should_delete_quote() {
    let quote = test_quote("Save first.", true);
    let repo = MockQuoteRepo::new(vec![quote.clone()]);
    let quotes_handle = repo.quotes_handle();
    let uc = DeleteQuoteUseCase { repo };

    uc.execute(quote.id).await.unwrap();
    assert!(quotes_handle.lock().unwrap().is_empty());

    let result = uc.execute(quote.id).await;
    assert!(matches!(result, Err(PortalServiceError::QuoteNotFound)));
}
