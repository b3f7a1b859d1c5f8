//! JSON envelope shared by the HTTP API and its clients.

use serde::{Deserialize, Serialize};

/// Failure message for a product id the catalog does not hold. Clients use it
/// to tell a missing product from a missing route, which is also a 404.
pub const PRODUCT_NOT_FOUND: &str = "product not found";

/// `{ "success": true, "data": ... }` or `{ "success": false, "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Unwrap the envelope, turning `success: false` (or a missing payload)
    /// into the server-provided message.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(self
                .error
                .unwrap_or_else(|| "response carried no data".to_string())),
        }
    }
}
