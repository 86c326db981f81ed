use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    /// Lowest-id row whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<ProductModel>, RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}
