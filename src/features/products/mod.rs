//! Products sold on the storefront.
//!
//! Every product belongs to exactly one category through `category_id`.
//! SKUs are globally unique.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/products` | Create a product |
//! | GET | `/api/products` | Paginated product list, filterable by category |
//! | GET | `/api/products/{id}` | Get a product by id |
//! | PUT | `/api/products/{id}` | Update a product |
//! | DELETE | `/api/products/{id}` | Delete a product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
