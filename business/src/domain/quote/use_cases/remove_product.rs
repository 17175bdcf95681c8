use async_trait::async_trait;

use crate::domain::quote::errors::QuoteError;
use crate::domain::quote::model::SelectedProduct;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveFromQuoteParams {
    pub id: ProductId,
}

#[async_trait]
pub trait RemoveFromQuoteUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RemoveFromQuoteParams,
    ) -> Result<Vec<SelectedProduct>, QuoteError>;
}
