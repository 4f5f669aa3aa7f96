use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::ads::dtos::{AdResponseDto, CreateAdDto, UpdateAdDto};
use crate::features::ads::models::Ad;

/// Service for ad operations
pub struct AdService {
    pool: PgPool,
}

impl AdService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new ad; status falls back to visible when omitted
    pub async fn create(&self, dto: CreateAdDto) -> Result<AdResponseDto> {
        let ad = sqlx::query_as::<_, Ad>(
            r#"
            INSERT INTO ads (status, description)
            VALUES ($1, $2)
            RETURNING id, status, description, created_at, updated_at
            "#,
        )
        .bind(dto.status_or_default())
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create ad: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Ad created: id={}, status={}", ad.id, ad.status);

        Ok(ad.into())
    }

    /// List ads, optionally restricted to active ones
    pub async fn list(&self, active_only: bool) -> Result<Vec<AdResponseDto>> {
        let sql = if active_only {
            r#"
            SELECT id, status, description, created_at, updated_at
            FROM ads
            WHERE status = TRUE
            ORDER BY created_at DESC
            "#
        } else {
            r#"
            SELECT id, status, description, created_at, updated_at
            FROM ads
            ORDER BY created_at DESC
            "#
        };

        let ads = sqlx::query_as::<_, Ad>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list ads: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(ads.into_iter().map(|a| a.into()).collect())
    }

    /// Get ad by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<AdResponseDto> {
        let ad = sqlx::query_as::<_, Ad>(
            r#"
            SELECT id, status, description, created_at, updated_at
            FROM ads
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get ad: {:?}", e);
            AppError::Database(e)
        })?;

        ad.map(|a| a.into())
            .ok_or_else(|| AppError::NotFound(format!("Ad '{}' not found", id)))
    }

    /// Update an ad; omitted fields keep their current value
    pub async fn update(&self, id: Uuid, dto: UpdateAdDto) -> Result<AdResponseDto> {
        let ad = sqlx::query_as::<_, Ad>(
            r#"
            UPDATE ads
            SET status = COALESCE($2, status),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, status, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.status)
        .bind(dto.description.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update ad: {:?}", e);
            AppError::Database(e)
        })?;

        ad.map(|a| a.into())
            .ok_or_else(|| AppError::NotFound(format!("Ad '{}' not found", id)))
    }

    /// Delete an ad
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ad: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Ad '{}' not found", id)));
        }

        tracing::info!("Ad deleted: id={}", id);
        Ok(())
    }
}
