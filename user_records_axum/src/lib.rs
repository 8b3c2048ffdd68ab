//! user_records_axum - HTTP surface for the user_records crate
//!
//! Maps the service functions of `user_records` onto JSON routes, turns
//! service errors into status codes with a `{"code", "detail"}` body, and
//! applies the browser CORS allow-list.

mod config;
mod cors;
mod error;
mod router;
mod user;

pub use config::USER_RECORDS_ALLOWED_ORIGINS;
pub use error::{ErrorResponse, IntoResponseError};
pub use router::{user_records_router, user_records_router_no_trace};

// Re-export the store and its initialization function from user_records
pub use user_records::{UserStore, init};
