use axum::{routing::get, Router};

use crate::features::pages::handlers;

/// Create routes for the static landing pages
pub fn routes() -> Router {
    Router::new()
        .route("/pages/kids", get(handlers::kids_page))
        .route("/pages/new-arrivals", get(handlers::new_arrivals_page))
        .route("/pages/sale", get(handlers::sale_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pages_serve_their_fixed_markup() {
        let server = axum_test::TestServer::new(routes()).unwrap();

        let kids = server.get("/pages/kids").await;
        kids.assert_status_ok();
        assert!(kids.text().contains("Kids' Collection"));

        let new_arrivals = server.get("/pages/new-arrivals").await;
        new_arrivals.assert_status_ok();
        assert!(new_arrivals.text().contains("New Arrivals"));

        let sale = server.get("/pages/sale").await;
        sale.assert_status_ok();
        assert!(sale.text().contains("Sale &amp; Discounts"));
    }
}
