use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// The fixed set of occasions the storefront filters on.
pub const OCCASION_NAMES: [&str; 4] = ["winter", "summer", "formal", "sports"];

/// Bulk-insert the fixed occasion rows, stamped with the execution time.
///
/// The occasions table carries no uniqueness constraint on `name`, so
/// running this twice without an intervening `down` produces duplicates.
pub async fn up(pool: &PgPool) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    let mut insert: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO occasions (name, created_at, updated_at) ");
    insert.push_values(OCCASION_NAMES, |mut row, name| {
        row.push_bind(name).push_bind(now).push_bind(now);
    });
    insert.build().execute(pool).await?;

    tracing::info!("Seeded {} occasions", OCCASION_NAMES.len());
    Ok(())
}

/// Unconditionally delete every occasion row.
pub async fn down(pool: &PgPool) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM occasions").execute(pool).await?;

    tracing::info!("Removed {} occasion rows", result.rows_affected());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_is_four_distinct_names() {
        assert_eq!(OCCASION_NAMES.len(), 4);
        let mut names = OCCASION_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
        for name in ["winter", "summer", "formal", "sports"] {
            assert!(OCCASION_NAMES.contains(&name));
        }
    }
}
