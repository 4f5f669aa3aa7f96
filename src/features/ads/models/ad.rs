use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for ad
#[derive(Debug, Clone, FromRow)]
pub struct Ad {
    pub id: Uuid,
    pub status: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
