use serde::{Deserialize, Serialize};

use crate::error::RideError;

/// Raw `limit`/`page` query parameters as received.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// A validated 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
    pub offset: i64,
}

/// Envelope returned for paginated listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub page: i64,
    pub total_page: f64,
    pub data: Vec<T>,
}

impl Pagination {
    /// Total pages as a plain ratio of rows to page size, not rounded.
    pub fn total_pages(&self, total_rows: i64) -> f64 {
        total_rows as f64 / self.limit as f64
    }
}

fn positive(field: &str, raw: &str) -> Result<i64, RideError> {
    match raw.parse::<i64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(RideError::invalid(
            field,
            format!("{} must be a positive number", field),
        )),
    }
}

/// Interprets optional `limit`/`page` parameters.
///
/// Returns `Ok(None)` when no pagination was requested.
pub fn resolve(query: &PaginationQuery) -> Result<Option<Pagination>, RideError> {
    let limit = match query.limit.as_deref() {
        Some(raw) => positive("limit", raw)?,
        None if query.page.is_some() => {
            return Err(RideError::invalid(
                "limit",
                "limit is required when page is given",
            ))
        }
        None => return Ok(None),
    };

    let page = match query.page.as_deref() {
        Some(raw) => positive("page", raw)?,
        None => 1,
    };

    let offset = (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| RideError::invalid("page", "page is too large for the given limit"))?;

    Ok(Some(Pagination {
        limit,
        page,
        offset,
    }))
}
