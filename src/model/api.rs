use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default number of items per page for paginated listings
pub const DEFAULT_PAGE_SIZE: u64 = 6;

/// Upper bound on the page size a client may request
pub const MAX_PAGE_SIZE: u64 = 100;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Stable machine-readable error code
    pub code: String,
    /// The error message
    pub error: String,
}

/// A single page of a paginated listing
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// 1-based number of this page
    pub page: u64,
    /// Total number of pages
    pub pages: u64,
    pub results: Vec<T>,
}

/// Page selection shared by paginated endpoints
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number, defaults to the first page
    pub page: Option<u64>,
    /// Items per page
    pub limit: Option<u64>,
}

impl PageParams {
    /// 0-based page index as used by the database paginator
    pub fn page_index(&self) -> u64 {
        self.page.unwrap_or(1).max(1) - 1
    }

    pub fn page_size(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}
