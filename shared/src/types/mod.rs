//! Type definitions module
//!
//! - `common` - Sorting primitives shared by list endpoints
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response wrappers and health checks

pub mod common;
pub mod pagination;
pub mod response;

pub use common::SortOrder;
pub use pagination::{PaginatedResponse, Pagination};
pub use response::{ApiResponse, HealthResponse, HealthStatus, ServiceHealth};
