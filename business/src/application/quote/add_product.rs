use std::sync::Arc;

use async_trait::async_trait;

use crate::application::quote::get_selection::{read_selection, write_selection};
use crate::domain::logger::Logger;
use crate::domain::quote::errors::QuoteError;
use crate::domain::quote::model::{AddOutcome, SelectedProduct};
use crate::domain::quote::storage::KeyValueStore;
use crate::domain::quote::use_cases::add_product::{AddToQuoteParams, AddToQuoteUseCase};

pub struct AddToQuoteUseCaseImpl {
    pub store: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToQuoteUseCase for AddToQuoteUseCaseImpl {
    async fn execute(
        &self,
        params: AddToQuoteParams,
    ) -> Result<(AddOutcome, Vec<SelectedProduct>), QuoteError> {
        let mut selection = read_selection(self.store.as_ref(), self.logger.as_ref())?;

        if selection.iter().any(|p| p.id == params.product.id) {
            self.logger.info(&format!(
                "Product already in quote: {}",
                params.product.id
            ));
            return Ok((AddOutcome::AlreadySelected, selection));
        }

        selection.push(params.product);
        write_selection(self.store.as_ref(), &selection)?;

        self.logger.info(&format!(
            "Added product to quote. Total products: {}",
            selection.len()
        ));
        Ok((AddOutcome::Added, selection))
    }
}
