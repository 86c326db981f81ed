use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{CreateProductRequest, SearchProductQuery, UpdateProductRequest},
        response::product::ProductResponse,
    },
    middleware::validate::{JsonBody, SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "Product",
    params(SearchProductQuery),
    responses(
        (status = 200, description = "Product with the given name", body = ProductResponse),
        (status = 400, description = "Missing productName"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn search_product(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<SearchProductQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_name(&params.product_name).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/name/{productName}",
    tag = "Product",
    params(("productName" = String, Path, description = "Product name")),
    responses(
        (status = 200, description = "Product with the given name", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product_by_name(
    Extension(service): Extension<DynProductQueryService>,
    Path(product_name): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_name(&product_name).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products/single",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    let location = format!("/api/products/{}", response.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

#[utoipa::path(
    post,
    path = "/api/products/multiple",
    tag = "Product",
    request_body = Vec<CreateProductRequest>,
    responses(
        (status = 200, description = "Products created", body = Vec<ProductResponse>),
        (status = 400, description = "Malformed or invalid item", body = ErrorResponse)
    )
)]
pub async fn create_products(
    Extension(service): Extension<DynProductCommandService>,
    JsonBody(body): JsonBody<Vec<CreateProductRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_products(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "ID mismatch or validation error", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Unresolved concurrency conflict", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_product(id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/products/bulk-delete",
    tag = "Product",
    request_body = Vec<i32>,
    responses(
        (status = 204, description = "Matching products deleted"),
        (status = 400, description = "Body is not an array of integer IDs", body = ErrorResponse),
        (status = 404, description = "None of the IDs matched", body = ErrorResponse)
    )
)]
pub async fn delete_products(
    Extension(service): Extension<DynProductCommandService>,
    JsonBody(ids): JsonBody<Vec<i32>>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_products(&ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/search", get(search_product))
        .route("/api/products/name/{productName}", get(get_product_by_name))
        .route("/api/products/single", post(create_product))
        .route("/api/products/multiple", post(create_products))
        .route("/api/products/bulk-delete", delete(delete_products))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
