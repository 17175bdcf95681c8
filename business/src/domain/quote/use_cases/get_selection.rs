use async_trait::async_trait;

use crate::domain::quote::errors::QuoteError;
use crate::domain::quote::model::SelectedProduct;

#[async_trait]
pub trait GetQuoteSelectionUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SelectedProduct>, QuoteError>;
}
