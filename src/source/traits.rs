use crate::model::{ProductRecord, SourceError};

#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    async fn load(&self) -> Result<Vec<ProductRecord>, SourceError>;
}
