//! Uniform success envelopes.
//!
//! Every successful response is wrapped as `{"data": ...}`; list endpoints
//! additionally carry `"paging"` metadata.

use serde::Serialize;
use shared::pagination::Paging;

/// Success envelope for a single payload.
#[derive(Debug, Clone, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Success envelope for a paged list.
#[derive(Debug, Clone, Serialize)]
pub struct PageBody<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}
