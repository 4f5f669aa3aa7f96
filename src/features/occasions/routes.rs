use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::occasions::handlers;
use crate::features::occasions::services::OccasionService;

/// Create routes for the occasions feature
pub fn routes(service: Arc<OccasionService>) -> Router {
    Router::new()
        .route("/api/occasions", get(handlers::list_occasions))
        .with_state(service)
}
