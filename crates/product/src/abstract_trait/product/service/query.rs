use crate::domain::response::product::ProductResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<ProductResponse, ServiceError>;
}
