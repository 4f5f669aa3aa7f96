use axum::response::Html;

use crate::core::error::{AppError, Result};
use crate::features::pages::templates;

fn to_html(rendered: std::result::Result<String, minijinja::Error>) -> Result<Html<String>> {
    rendered
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Failed to render page: {}", e)))
}

/// Kids' Collection landing page
#[utoipa::path(
    get,
    path = "/pages/kids",
    responses(
        (status = 200, description = "Kids' Collection landing page", content_type = "text/html", body = String),
    ),
    tag = "pages"
)]
pub async fn kids_page() -> Result<Html<String>> {
    to_html(templates::kids_collection())
}

/// New Arrivals landing page
#[utoipa::path(
    get,
    path = "/pages/new-arrivals",
    responses(
        (status = 200, description = "New Arrivals landing page", content_type = "text/html", body = String),
    ),
    tag = "pages"
)]
pub async fn new_arrivals_page() -> Result<Html<String>> {
    to_html(templates::new_arrivals())
}

/// Sale & Discounts landing page
#[utoipa::path(
    get,
    path = "/pages/sale",
    responses(
        (status = 200, description = "Sale & Discounts landing page", content_type = "text/html", body = String),
    ),
    tag = "pages"
)]
pub async fn sale_page() -> Result<Html<String>> {
    to_html(templates::sale())
}
