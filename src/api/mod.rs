//! HTTP API module for the severance engine.
//!
//! This module provides the REST endpoints for estimating the severance
//! cost of a single employee and of a whole company.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CompanySeveranceRequest, EmployeeRequest, EmployeeRow, SeveranceRequest};
pub use response::{ApiError, ApiErrorResponse, CompanySeveranceResponse, SeveranceResponse};
pub use state::AppState;
