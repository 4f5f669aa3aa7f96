use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::ads::models::Ad;

/// Request DTO for creating an ad
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdDto {
    /// Whether the ad is active/visible; defaults to true when omitted
    pub status: Option<bool>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,
}

impl CreateAdDto {
    /// Ads are visible unless explicitly created inactive
    pub fn status_or_default(&self) -> bool {
        self.status.unwrap_or(true)
    }
}

/// Request DTO for updating an ad; omitted fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdDto {
    pub status: Option<bool>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: Option<String>,
}

/// Response DTO for ad
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdResponseDto {
    pub id: Uuid,
    pub status: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ad> for AdResponseDto {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            status: ad.status,
            description: ad.description,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_true_when_omitted() {
        let dto = CreateAdDto {
            status: None,
            description: "Mid-season promo".to_string(),
        };
        assert!(dto.status_or_default());
    }

    #[test]
    fn explicit_status_is_kept() {
        let dto = CreateAdDto {
            status: Some(false),
            description: "Draft banner".to_string(),
        };
        assert!(!dto.status_or_default());
    }

    #[test]
    fn empty_description_fails_validation() {
        let dto = CreateAdDto {
            status: None,
            description: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn response_serializes_to_camel_case() {
        let dto = AdResponseDto {
            id: Uuid::new_v4(),
            status: true,
            description: "Mid-season promo".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
