use crate::domain::{
    requests::product::{CreateProductRequest, UpdateProductRequest},
    response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn create_products(
        &self,
        reqs: &[CreateProductRequest],
    ) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<(), ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
    async fn delete_products(&self, ids: &[i32]) -> Result<(), ServiceError>;
}
