use std::sync::Arc;

use async_trait::async_trait;

use crate::application::quote::get_selection::{read_selection, write_selection};
use crate::domain::logger::Logger;
use crate::domain::quote::errors::QuoteError;
use crate::domain::quote::model::SelectedProduct;
use crate::domain::quote::storage::KeyValueStore;
use crate::domain::quote::use_cases::remove_product::{
    RemoveFromQuoteParams, RemoveFromQuoteUseCase,
};

pub struct RemoveFromQuoteUseCaseImpl {
    pub store: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromQuoteUseCase for RemoveFromQuoteUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveFromQuoteParams,
    ) -> Result<Vec<SelectedProduct>, QuoteError> {
        let mut selection = read_selection(self.store.as_ref(), self.logger.as_ref())?;
        selection.retain(|p| p.id != params.id);
        write_selection(self.store.as_ref(), &selection)?;

        self.logger.info(&format!(
            "Removed product from quote. Remaining products: {}",
            selection.len()
        ));
        Ok(selection)
    }
}
