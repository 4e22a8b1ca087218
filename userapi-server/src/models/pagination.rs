//! Offset/limit pagination for list endpoints

use serde::Deserialize;

use super::ValidationError;

/// Default number of rows skipped
pub const DEFAULT_SKIP: i64 = 0;

/// Default maximum number of rows returned
pub const DEFAULT_LIMIT: i64 = 100;

/// Validated offset/limit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: i64,
    limit: i64,
}

impl Pagination {
    /// Create pagination, rejecting negative values.
    ///
    /// There is no upper bound on `limit`; a zero limit yields an empty page.
    pub fn new(skip: i64, limit: i64) -> Result<Self, ValidationError> {
        if skip < 0 {
            return Err(ValidationError::Negative {
                field: "skip",
                value: skip,
            });
        }
        if limit < 0 {
            return Err(ValidationError::Negative {
                field: "limit",
                value: limit,
            });
        }
        Ok(Self { skip, limit })
    }

    /// SQL OFFSET value.
    pub fn skip(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        Self::new(
            params.skip.unwrap_or(DEFAULT_SKIP),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
