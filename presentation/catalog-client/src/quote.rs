use std::path::PathBuf;
use std::sync::Arc;

use business::application::quote::add_product::AddToQuoteUseCaseImpl;
use business::application::quote::get_selection::GetQuoteSelectionUseCaseImpl;
use business::application::quote::remove_product::RemoveFromQuoteUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::quote::errors::QuoteError;
use business::domain::quote::model::{AddOutcome, SELECTED_PRODUCTS_KEY, SelectedProduct};
use business::domain::quote::storage::KeyValueStore;
use business::domain::quote::use_cases::add_product::{AddToQuoteParams, AddToQuoteUseCase};
use business::domain::quote::use_cases::get_selection::GetQuoteSelectionUseCase;
use business::domain::quote::use_cases::remove_product::{
    RemoveFromQuoteParams, RemoveFromQuoteUseCase,
};
use business::domain::shared::value_objects::ProductId;
use logger::TracingLogger;
use persistence::key_value::file::JsonFileKeyValueStore;

/// Products picked for a quote request, persisted between runs.
pub struct QuoteSession {
    store: Arc<dyn KeyValueStore>,
    get_selection: Arc<dyn GetQuoteSelectionUseCase>,
    add_product: Arc<dyn AddToQuoteUseCase>,
    remove_product: Arc<dyn RemoveFromQuoteUseCase>,
}

impl QuoteSession {
    pub fn new(store: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            get_selection: Arc::new(GetQuoteSelectionUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            add_product: Arc::new(AddToQuoteUseCaseImpl {
                store: store.clone(),
                logger: logger.clone(),
            }),
            remove_product: Arc::new(RemoveFromQuoteUseCaseImpl {
                store: store.clone(),
                logger,
            }),
            store,
        }
    }

    /// Session backed by a JSON file, created on first write.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::new(
            Arc::new(JsonFileKeyValueStore::new(path)),
            Arc::new(TracingLogger::new("quote")),
        )
    }

    pub async fn selection(&self) -> Result<Vec<SelectedProduct>, QuoteError> {
        self.get_selection.execute().await
    }

    pub async fn add(&self, product: &Product) -> Result<AddOutcome, QuoteError> {
        let (outcome, _) = self
            .add_product
            .execute(AddToQuoteParams {
                product: SelectedProduct::from(product),
            })
            .await?;
        Ok(outcome)
    }

    pub async fn remove(&self, id: &ProductId) -> Result<Vec<SelectedProduct>, QuoteError> {
        self.remove_product
            .execute(RemoveFromQuoteParams { id: id.clone() })
            .await
    }

    /// Drops the whole selection, e.g. once a quote request went out.
    pub fn clear(&self) -> Result<(), QuoteError> {
        self.store.remove(SELECTED_PRODUCTS_KEY)?;
        Ok(())
    }
}
