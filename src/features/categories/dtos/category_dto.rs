use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::models::Product;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
}

/// Request DTO for renaming a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// Response DTO for a category with its owned products embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryWithProductsDto {
    pub id: Uuid,
    pub name: String,
    pub products: Vec<ProductResponseDto>,
}

impl CategoryWithProductsDto {
    /// Assemble the traversal response from a category and its product rows
    pub fn from_parts(category: Category, products: Vec<Product>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            products: products.into_iter().map(|p| p.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn product(name: &str, category_id: Uuid) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            sku: "KID-TEE-001".to_string(),
            description: None,
            price: Decimal::new(1999, 2),
            category_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn traversal_embeds_owned_products() {
        let cat = category("Kids");
        let cat_id = cat.id;
        let dto = CategoryWithProductsDto::from_parts(
            cat,
            vec![product("Striped Tee", cat_id), product("Denim Shorts", cat_id)],
        );

        assert_eq!(dto.name, "Kids");
        assert_eq!(dto.products.len(), 2);
        assert!(dto.products.iter().all(|p| p.category_id == cat_id));
    }

    #[test]
    fn traversal_with_no_products_is_empty() {
        let dto = CategoryWithProductsDto::from_parts(category("Sale"), Vec::new());
        assert!(dto.products.is_empty());
    }
}
