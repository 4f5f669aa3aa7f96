use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    CreateProductDto, ProductQueryParams, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::models::Product;

/// Convert database errors on product writes to more specific AppErrors
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return AppError::Conflict("A product with this SKU already exists.".to_string());
        }

        // Foreign key violation (PostgreSQL error code 23503)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::BadRequest("Referenced category does not exist.".to_string());
        }
    }

    AppError::Database(e)
}

/// Service for product operations
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product in an existing category
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, sku, description, price, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, sku, description, price, category_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.sku)
        .bind(dto.description.as_deref())
        .bind(dto.price)
        .bind(dto.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!("Product created: id={}, sku={}", product.id, product.sku);

        Ok(product.into())
    }

    /// Paginated product list, optionally restricted to one category.
    /// Returns the page plus the total row count for the filter.
    pub async fn list(&self, params: &ProductQueryParams) -> Result<(Vec<ProductResponseDto>, i64)> {
        let (products, total) = match params.category_id {
            Some(category_id) => {
                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM products WHERE category_id = $1",
                )
                .bind(category_id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

                let products = sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, sku, description, price, category_id, created_at, updated_at
                    FROM products
                    WHERE category_id = $1
                    ORDER BY name
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(category_id)
                .bind(params.limit())
                .bind(params.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

                (products, total)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)?;

                let products = sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, sku, description, price, category_id, created_at, updated_at
                    FROM products
                    ORDER BY name
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(params.limit())
                .bind(params.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

                (products, total)
            }
        };

        Ok((products.into_iter().map(|p| p.into()).collect(), total))
    }

    /// Get product by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, sku, description, price, category_id, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product: {:?}", e);
            AppError::Database(e)
        })?;

        product
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))
    }

    /// Update a product; omitted fields keep their current value
    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                sku = COALESCE($3, sku),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                category_id = COALESCE($6, category_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, sku, description, price, category_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.name.as_deref())
        .bind(dto.sku.as_deref())
        .bind(dto.description.as_deref())
        .bind(dto.price)
        .bind(dto.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        product
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))
    }

    /// Delete a product
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product '{}' not found", id)));
        }

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }
}
