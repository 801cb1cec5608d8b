//! HTTP API module for the shift engine.
//!
//! This module provides the REST endpoints for classifying free-text
//! schedules and pricing roles per date and period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_BATCH_ENTRIES, create_router};
pub use request::{BatchPriceRequest, PriceBreakdownRequest, ScheduleRequest};
pub use response::{ApiError, BatchPriceResponse, ScheduleResponse};
pub use state::AppState;
