//! Static category landing pages.
//!
//! Each page is a pure rendering function over an embedded template: no
//! props, no state, no data dependency. The routing layer decides when each
//! page is served.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/pages/kids` | Kids' Collection landing page |
//! | GET | `/pages/new-arrivals` | New Arrivals landing page |
//! | GET | `/pages/sale` | Sale & Discounts landing page |

pub mod handlers;
pub mod routes;
pub mod templates;
