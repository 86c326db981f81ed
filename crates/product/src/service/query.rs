use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self { query, metrics }
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

    fn complete_not_found(&self, method: Method, start: Instant, message: &str) {
        warn!("⚠️ {message}");
        self.metrics
            .record(method, StatusUtils::Error, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Listing all products");

        let start = Instant::now();

        match self.query.find_all().await {
            Ok(products) => {
                let data: Vec<ProductResponse> =
                    products.into_iter().map(ProductResponse::from).collect();
                self.complete_success(
                    Method::Get,
                    start,
                    &format!("Listed {} products", data.len()),
                );
                Ok(data)
            }
            Err(e) => {
                self.complete_error(Method::Get, start, &format!("Failed to list products: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let start = Instant::now();

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.complete_success(Method::Get, start, "Product retrieved by ID");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                let msg = format!("Product not found with ID: {id}");
                self.complete_not_found(Method::Get, start, &msg);
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => {
                self.complete_error(
                    Method::Get,
                    start,
                    &format!("Database error while finding product ID {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<ProductResponse, ServiceError> {
        info!("🔎 Finding product by name: {name:?}");

        let start = Instant::now();

        match self.query.find_by_name(name).await {
            Ok(Some(product)) => {
                self.complete_success(Method::Get, start, "Product retrieved by name");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                let msg = format!("Product not found with name: {name}");
                self.complete_not_found(Method::Get, start, &msg);
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => {
                self.complete_error(
                    Method::Get,
                    start,
                    &format!("Database error while finding product {name:?}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
