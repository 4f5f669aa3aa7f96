use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::occasions::dtos::OccasionResponseDto;
use crate::features::occasions::models::Occasion;

/// Service for occasion lookups
pub struct OccasionService {
    pool: PgPool,
}

impl OccasionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all occasions in seed order
    pub async fn list(&self) -> Result<Vec<OccasionResponseDto>> {
        let occasions = sqlx::query_as::<_, Occasion>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM occasions
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list occasions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(occasions.into_iter().map(|o| o.into()).collect())
    }
}
