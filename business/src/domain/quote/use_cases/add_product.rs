use async_trait::async_trait;

use crate::domain::quote::errors::QuoteError;
use crate::domain::quote::model::{AddOutcome, SelectedProduct};

pub struct AddToQuoteParams {
    pub product: SelectedProduct,
}

#[async_trait]
pub trait AddToQuoteUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddToQuoteParams,
    ) -> Result<(AddOutcome, Vec<SelectedProduct>), QuoteError>;
}
