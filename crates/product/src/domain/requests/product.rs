use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchProductQuery {
    #[schema(example = "Burger")]
    pub product_name: String,
}

/// Insert payload. An `id` in the body is accepted for compatibility and
/// ignored, the database assigns it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Burger")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Double cheese, no pickles")]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 899)]
    pub price: i64,
}

/// Full replacement of a row. `id` must match the id in the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Burger")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 899)]
    pub price: i64,
}
