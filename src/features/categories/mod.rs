//! Product categories.
//!
//! Category names are globally unique; each category owns many products
//! through the `category_id` foreign key, traversed under the `products`
//! alias.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/categories` | Create a category |
//! | GET | `/api/categories` | List categories |
//! | GET | `/api/categories/{id}` | Get a category by id |
//! | GET | `/api/categories/{id}/products` | Get a category with its products |
//! | PUT | `/api/categories/{id}` | Rename a category |
//! | DELETE | `/api/categories/{id}` | Delete a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
