use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::occasions::dtos::OccasionResponseDto;
use crate::features::occasions::services::OccasionService;
use crate::shared::types::ApiResponse;

/// List all occasions
#[utoipa::path(
    get,
    path = "/api/occasions",
    responses(
        (status = 200, description = "List of occasions", body = ApiResponse<Vec<OccasionResponseDto>>),
    ),
    tag = "occasions"
)]
pub async fn list_occasions(
    State(service): State<Arc<OccasionService>>,
) -> Result<Json<ApiResponse<Vec<OccasionResponseDto>>>> {
    let occasions = service.list().await?;
    Ok(Json(ApiResponse::success(Some(occasions), None, None)))
}
