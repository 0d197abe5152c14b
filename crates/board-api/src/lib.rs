//! # board-api
//!
//! Development purchase endpoint for the driftboard storefront.
//!
//! Stands in for the real payment provider so the page and the checkout
//! client can be exercised end to end locally.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/checkout/{product_id}` | Create a purchase session |
//! | GET | `/api/finishes` | List the finish catalog |
//! | GET | `/checkout/success` | Success page |
//! | GET | `/checkout/cancel` | Cancel page |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, BoxedSessionSource, SessionSource, StubSessionSource};
