//! Authenticated client for the expense API.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind};
pub use types::{Expense, ExpenseDraft, RegisterRequest, wire_date};

/// Standard User-Agent header for spense API requests.
pub const USER_AGENT: &str = concat!("spense/", env!("CARGO_PKG_VERSION"));
