use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::quote::errors::QuoteError;
use crate::domain::quote::model::{SELECTED_PRODUCTS_KEY, SelectedProduct};
use crate::domain::quote::storage::KeyValueStore;
use crate::domain::quote::use_cases::get_selection::GetQuoteSelectionUseCase;

pub struct GetQuoteSelectionUseCaseImpl {
    pub store: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetQuoteSelectionUseCase for GetQuoteSelectionUseCaseImpl {
    async fn execute(&self) -> Result<Vec<SelectedProduct>, QuoteError> {
        let selection = read_selection(self.store.as_ref(), self.logger.as_ref())?;
        self.logger
            .info(&format!("Loaded {} products from quote selection", selection.len()));
        Ok(selection)
    }
}

/// Reads the stored selection. A missing key is an empty selection and so is
/// a corrupt value, which is logged and otherwise ignored.
pub(crate) fn read_selection(
    store: &dyn KeyValueStore,
    logger: &dyn Logger,
) -> Result<Vec<SelectedProduct>, QuoteError> {
    let Some(raw) = store.get(SELECTED_PRODUCTS_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<SelectedProduct>>(&raw) {
        Ok(selection) => Ok(selection),
        Err(e) => {
            logger.warn(&format!(
                "Discarding unreadable quote selection: {}",
                e
            ));
            Ok(Vec::new())
        }
    }
}

pub(crate) fn write_selection(
    store: &dyn KeyValueStore,
    selection: &[SelectedProduct],
) -> Result<(), QuoteError> {
    let raw = serde_json::to_string(selection).map_err(|_| QuoteError::Serialization)?;
    store.set(SELECTED_PRODUCTS_KEY, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub Store {}

        impl KeyValueStore for Store {
            fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
            fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
            fn remove(&self, key: &str) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_empty_selection_when_nothing_stored() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .withf(|key| key == SELECTED_PRODUCTS_KEY)
            .returning(|_| Ok(None));

        let use_case = GetQuoteSelectionUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_decode_stored_selection() {
        let mut store = MockStore::new();
        store.expect_get().returning(|_| {
            Ok(Some(
                r#"[{"id":"4","name":"Goodman GSX14 Central Air Conditioner","brand":"Goodman","model":"GSX14","price":"2299.99","category":"Air Conditioning","btu":24000,"energyRating":"14 SEER"}]"#
                    .to_string(),
            ))
        });

        let use_case = GetQuoteSelectionUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let selection = use_case.execute().await.unwrap();

        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].id, ProductId::new("4"));
        assert_eq!(selection[0].energy_rating.as_deref(), Some("14 SEER"));
    }

    #[tokio::test]
    async fn should_reset_to_empty_and_warn_when_selection_corrupt() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some("{not json".to_string())));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.starts_with("Discarding unreadable quote selection"))
            .times(1)
            .returning(|_| ());

        let use_case = GetQuoteSelectionUseCaseImpl {
            store: Arc::new(store),
            logger: Arc::new(logger),
        };

        let selection = use_case.execute().await.unwrap();

        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn should_surface_storage_failure() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = GetQuoteSelectionUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), QuoteError::Storage(_)));
    }
}
