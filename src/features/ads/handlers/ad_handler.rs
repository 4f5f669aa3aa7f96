use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::ads::dtos::{AdResponseDto, CreateAdDto, UpdateAdDto};
use crate::features::ads::services::AdService;
use crate::shared::types::ApiResponse;

/// Query params for listing ads
#[derive(Debug, Deserialize)]
pub struct ListAdsQuery {
    /// If true, return only active ads. Default: false (all ads)
    #[serde(default)]
    pub active: bool,
}

/// Create a new ad
#[utoipa::path(
    post,
    path = "/api/ads",
    request_body = CreateAdDto,
    responses(
        (status = 200, description = "Ad created successfully", body = ApiResponse<AdResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "ads"
)]
pub async fn create_ad(
    State(service): State<Arc<AdService>>,
    AppJson(dto): AppJson<CreateAdDto>,
) -> Result<Json<ApiResponse<AdResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ad = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(ad), None, None)))
}

/// List ads
#[utoipa::path(
    get,
    path = "/api/ads",
    params(
        ("active" = Option<bool>, Query, description = "Return only active ads if true")
    ),
    responses(
        (status = 200, description = "List of ads", body = ApiResponse<Vec<AdResponseDto>>),
    ),
    tag = "ads"
)]
pub async fn list_ads(
    State(service): State<Arc<AdService>>,
    Query(query): Query<ListAdsQuery>,
) -> Result<Json<ApiResponse<Vec<AdResponseDto>>>> {
    let ads = service.list(query.active).await?;
    Ok(Json(ApiResponse::success(Some(ads), None, None)))
}

/// Get ad by id
#[utoipa::path(
    get,
    path = "/api/ads/{id}",
    params(
        ("id" = Uuid, Path, description = "Ad ID")
    ),
    responses(
        (status = 200, description = "Ad found", body = ApiResponse<AdResponseDto>),
        (status = 404, description = "Ad not found")
    ),
    tag = "ads"
)]
pub async fn get_ad(
    State(service): State<Arc<AdService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdResponseDto>>> {
    let ad = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(ad), None, None)))
}

/// Update an ad
#[utoipa::path(
    put,
    path = "/api/ads/{id}",
    params(
        ("id" = Uuid, Path, description = "Ad ID")
    ),
    request_body = UpdateAdDto,
    responses(
        (status = 200, description = "Ad updated successfully", body = ApiResponse<AdResponseDto>),
        (status = 404, description = "Ad not found")
    ),
    tag = "ads"
)]
pub async fn update_ad(
    State(service): State<Arc<AdService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateAdDto>,
) -> Result<Json<ApiResponse<AdResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ad = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(ad), None, None)))
}

/// Delete an ad
#[utoipa::path(
    delete,
    path = "/api/ads/{id}",
    params(
        ("id" = Uuid, Path, description = "Ad ID")
    ),
    responses(
        (status = 200, description = "Ad deleted successfully"),
        (status = 404, description = "Ad not found")
    ),
    tag = "ads"
)]
pub async fn delete_ad(
    State(service): State<Arc<AdService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Ad deleted".to_string()),
        None,
    )))
}
