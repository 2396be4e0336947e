//! Input validation for the rides API.
//!
//! - [`rules`] checks ride creation payloads against a declarative rule set.
//! - [`pagination`] turns `limit`/`page` query parameters into a row window.

pub mod pagination;
pub mod rules;

pub use pagination::{resolve as resolve_pagination, PaginatedResponse, Pagination, PaginationQuery};
pub use rules::{validate_ride, DegreesRule, FieldError, TextRule};
