use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CategoryWithProductsDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::products::models::Product;

/// Convert database errors on category writes to more specific AppErrors
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return AppError::Conflict("A category with this name already exists.".to_string());
        }

        // Foreign key violation (PostgreSQL error code 23503):
        // the category is still referenced by products
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::BadRequest(
                "Category still has products and cannot be deleted.".to_string(),
            );
        }
    }

    AppError::Database(e)
}

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new category; the name must be globally unique
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }

    /// List all categories, name-ordered
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = self.fetch(id).await?;
        Ok(category.into())
    }

    /// Get a category with its owned products under the `products` alias
    pub async fn get_with_products(&self, id: Uuid) -> Result<CategoryWithProductsDto> {
        let category = self.fetch(id).await?;

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, sku, description, price, category_id, created_at, updated_at
            FROM products
            WHERE category_id = $1
            ORDER BY name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products for category {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(CategoryWithProductsDto::from_parts(category, products))
    }

    /// Rename a category; the new name must still be unique
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }

    /// Delete a category; refused while products still reference it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category '{}' not found", id)));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category: {:?}", e);
            AppError::Database(e)
        })?;

        category.ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }
}
