// Common DTOs for the management API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response wrapper for endpoints that return a single record under a
/// `data` field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T> From<T> for DataResponse<T> {
    fn from(data: T) -> Self {
        Self { data }
    }
}
