use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{
    CreateProductDto, ProductQueryParams, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 200, description = "Product created successfully", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 409, description = "SKU already exists")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// List products with pagination and optional category filter
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQueryParams),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let (products, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(products),
        None,
        Some(Meta { total }),
    )))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found"),
        (status = 409, description = "SKU already exists")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product deleted".to_string()),
        None,
    )))
}
