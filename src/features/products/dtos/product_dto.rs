use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::products::models::Product;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::validation::SKU_REGEX;

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query params for listing products
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ProductQueryParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,

    /// Restrict to products in this category
    pub category_id: Option<Uuid>,
}

impl ProductQueryParams {
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut error = ValidationError::new("price_negative");
        error.message = Some("Price must not be negative".into());
        return Err(error);
    }
    Ok(())
}

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Stock keeping unit, e.g. "KID-TEE-001"
    #[validate(
        length(min = 1, max = 64, message = "SKU must be 1-64 characters"),
        regex(
            path = *SKU_REGEX,
            message = "SKU must be uppercase alphanumeric groups separated by hyphens"
        )
    )]
    pub sku: String,

    pub description: Option<String>,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    pub category_id: Uuid,
}

/// Request DTO for updating a product; omitted fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 64, message = "SKU must be 1-64 characters"),
        regex(
            path = *SKU_REGEX,
            message = "SKU must be uppercase alphanumeric groups separated by hyphens"
        )
    )]
    pub sku: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = validate_price))]
    pub price: Option<Decimal>,

    pub category_id: Option<Uuid>,
}

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            sku: p.sku,
            description: p.description,
            price: p.price,
            category_id: p.category_id,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(sku: &str, price: Decimal) -> CreateProductDto {
        CreateProductDto {
            name: "Striped Tee".to_string(),
            sku: sku.to_string(),
            description: None,
            price,
            category_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn valid_product_passes_validation() {
        assert!(create_dto("KID-TEE-001", Decimal::new(1999, 2))
            .validate()
            .is_ok());
    }

    #[test]
    fn lowercase_sku_fails_validation() {
        assert!(create_dto("kid-tee-001", Decimal::new(1999, 2))
            .validate()
            .is_err());
    }

    #[test]
    fn negative_price_fails_validation() {
        assert!(create_dto("KID-TEE-001", Decimal::new(-1, 0))
            .validate()
            .is_err());
    }

    #[test]
    fn offset_is_derived_from_page_and_limit() {
        let params = ProductQueryParams {
            page: 3,
            page_size: 20,
            category_id: None,
        };
        assert_eq!(params.limit(), 20);
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn page_size_is_clamped_to_maximum() {
        let params = ProductQueryParams {
            page: 1,
            page_size: 10_000,
            category_id: None,
        };
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), 0);
    }
}
