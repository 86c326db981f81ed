use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info, warn};
use validator::Validate;

pub const BULK_DELETE_NOT_FOUND: &str = "No products were found with the specified IDs.";

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        query: DynProductQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", registry);

        Self {
            command,
            query,
            metrics,
        }
    }

    fn complete_success(&self, method: Method, start: Instant, message: &str) {
        info!("✅ Operation completed successfully: {message}");
        self.metrics
            .record(method, StatusUtils::Success, start.elapsed().as_secs_f64());
    }

    fn complete_error(&self, method: Method, start: Instant, message: &str) {
        error!("❌ Operation failed: {message}");
        self.metrics
            .record(method, StatusUtils::Error, start.elapsed().as_secs_f64());
    }

    fn complete_rejected(&self, method: Method, start: Instant, message: &str) {
        warn!("⚠️ {message}");
        self.metrics
            .record(method, StatusUtils::Error, start.elapsed().as_secs_f64());
    }

    /// Resolves a conflicting update: the row vanished under us (not found)
    /// or some other writer won (the conflict is surfaced).
    async fn resolve_update_conflict(&self, id: i32, msg: String) -> ServiceError {
        match self.query.exists(id).await {
            Ok(false) => ServiceError::NotFound(format!("Product not found with ID: {id}")),
            Ok(true) => ServiceError::Repo(RepositoryError::Conflict(msg)),
            Err(e) => ServiceError::Repo(e),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let start = Instant::now();

        if let Err(errors) = req.validate() {
            let err = ServiceError::from(errors);
            self.complete_rejected(Method::Post, start, &err.to_string());
            return Err(err);
        }

        match self.command.create_product(req).await {
            Ok(product) => {
                self.complete_success(
                    Method::Post,
                    start,
                    &format!("Product created with ID {}", product.id),
                );
                Ok(ProductResponse::from(product))
            }
            Err(e) => {
                self.complete_error(Method::Post, start, &format!("Failed to create product: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn create_products(
        &self,
        reqs: &[CreateProductRequest],
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🏗️ Creating {} products", reqs.len());

        let start = Instant::now();

        let mut messages = Vec::new();
        for (index, req) in reqs.iter().enumerate() {
            if let Err(errors) = req.validate() {
                if let ServiceError::Validation(item_messages) = ServiceError::from(errors) {
                    messages.extend(item_messages.into_iter().map(|m| format!("[{index}] {m}")));
                }
            }
        }

        if !messages.is_empty() {
            let err = ServiceError::Validation(messages);
            self.complete_rejected(Method::Post, start, &err.to_string());
            return Err(err);
        }

        match self.command.create_products(reqs).await {
            Ok(products) => {
                self.complete_success(
                    Method::Post,
                    start,
                    &format!("Created {} products", products.len()),
                );
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(e) => {
                self.complete_error(
                    Method::Post,
                    start,
                    &format!("Failed to create products: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<(), ServiceError> {
        info!("🔄 Updating product ID: {id}");

        let start = Instant::now();

        if id != req.id {
            let msg = format!(
                "Product ID in path ({id}) does not match ID in body ({})",
                req.id
            );
            self.complete_rejected(Method::Put, start, &msg);
            return Err(ServiceError::BadRequest(msg));
        }

        if let Err(errors) = req.validate() {
            let err = ServiceError::from(errors);
            self.complete_rejected(Method::Put, start, &err.to_string());
            return Err(err);
        }

        let err = match self.command.update_product(req).await {
            Ok(_) => {
                self.complete_success(Method::Put, start, &format!("Product ID {id} updated"));
                return Ok(());
            }
            Err(RepositoryError::NotFound) => {
                ServiceError::NotFound(format!("Product not found with ID: {id}"))
            }
            Err(RepositoryError::Conflict(msg)) => self.resolve_update_conflict(id, msg).await,
            Err(e) => ServiceError::Repo(e),
        };

        match &err {
            ServiceError::NotFound(msg) => self.complete_rejected(Method::Put, start, msg),
            other => self.complete_error(
                Method::Put,
                start,
                &format!("Failed to update product ID {id}: {other}"),
            ),
        }
        Err(err)
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🧨 Deleting product ID: {id}");

        let start = Instant::now();

        match self.command.delete_product(id).await {
            Ok(true) => {
                self.complete_success(Method::Delete, start, &format!("Product ID {id} deleted"));
                Ok(())
            }
            Ok(false) => {
                let msg = format!("Product not found with ID: {id}");
                self.complete_rejected(Method::Delete, start, &msg);
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => {
                self.complete_error(
                    Method::Delete,
                    start,
                    &format!("Failed to delete product ID {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_products(&self, ids: &[i32]) -> Result<(), ServiceError> {
        info!("🧨 Bulk deleting products: {ids:?}");

        let start = Instant::now();

        if ids.is_empty() {
            self.complete_rejected(Method::Delete, start, BULK_DELETE_NOT_FOUND);
            return Err(ServiceError::NotFound(BULK_DELETE_NOT_FOUND.to_string()));
        }

        match self.command.delete_products(ids).await {
            Ok(0) => {
                self.complete_rejected(Method::Delete, start, BULK_DELETE_NOT_FOUND);
                Err(ServiceError::NotFound(BULK_DELETE_NOT_FOUND.to_string()))
            }
            Ok(removed) => {
                self.complete_success(
                    Method::Delete,
                    start,
                    &format!("Bulk delete removed {removed} products"),
                );
                Ok(())
            }
            Err(e) => {
                self.complete_error(
                    Method::Delete,
                    start,
                    &format!("Failed to bulk delete products: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
