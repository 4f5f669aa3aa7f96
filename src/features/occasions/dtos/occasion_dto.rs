use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::occasions::models::Occasion;

/// Response DTO for occasion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OccasionResponseDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Occasion> for OccasionResponseDto {
    fn from(o: Occasion) -> Self {
        Self {
            id: o.id,
            name: o.name,
        }
    }
}
