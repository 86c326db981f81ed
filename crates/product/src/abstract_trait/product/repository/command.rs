use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// Inserts every row or none.
    async fn create_products(
        &self,
        reqs: &[CreateProductRequest],
    ) -> Result<Vec<ProductModel>, RepositoryError>;
    /// `NotFound` when no row has `req.id`, `Conflict` when the write lost a
    /// race with a concurrent transaction.
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError>;
    /// Returns the number of rows removed.
    async fn delete_products(&self, ids: &[i32]) -> Result<u64, RepositoryError>;
}
