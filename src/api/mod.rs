//! HTTP API module for the rollover engine.
//!
//! This module provides the operational trigger endpoint for running the
//! monthly salary ledger rollover on demand.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RolloverRequest;
pub use response::ApiError;
pub use state::AppState;
