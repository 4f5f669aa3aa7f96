use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::ads::handlers;
use crate::features::ads::services::AdService;

/// Create routes for the ads feature
pub fn routes(service: Arc<AdService>) -> Router {
    Router::new()
        .route("/api/ads", post(handlers::create_ad).get(handlers::list_ads))
        .route(
            "/api/ads/{id}",
            get(handlers::get_ad)
                .put(handlers::update_ad)
                .delete(handlers::delete_ad),
        )
        .with_state(service)
}
