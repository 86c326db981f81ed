use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
}
