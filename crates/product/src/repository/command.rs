use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, description, price)
    VALUES ($1, $2, $3)
    RETURNING id, name, description, price
"#;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(INSERT_PRODUCT)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", product.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn create_products(
        &self,
        products: &[CreateProductRequest],
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;
        let mut created = Vec::with_capacity(products.len());

        for product in products {
            let row = sqlx::query_as::<_, ProductModel>(INSERT_PRODUCT)
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .fetch_one(&mut *tx)
                .await
                .map_err(|err| {
                    error!("❌ Failed to insert product {}: {:?}", product.name, err);
                    RepositoryError::from(err)
                })?;
            created.push(row);
        }

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit bulk insert: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created {} products", created.len());
        Ok(created)
    }

    async fn update_product(
        &self,
        product: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4
            WHERE id = $1
            RETURNING id, name, description, price
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", product.id, err);
            RepositoryError::from(err)
        })?;

        match result {
            Some(updated) => {
                info!("🔄 Updated product ID {}", updated.id);
                Ok(updated)
            }
            None => {
                warn!("⚠️ No product with ID {} to update", product.id);
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("🧨 Product ID {} permanently deleted", id);
        }
        Ok(deleted)
    }

    async fn delete_products(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to bulk delete products {:?}: {:?}", ids, e);
                RepositoryError::from(e)
            })?;

        info!(
            "🧨 Bulk delete removed {} of {} requested products",
            result.rows_affected(),
            ids.len()
        );
        Ok(result.rows_affected())
    }
}
