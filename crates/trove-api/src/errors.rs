// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// The API's single error shape; handlers wrap it as `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(message, 400)
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, 404)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, 500)
    }

    #[must_use]
    pub fn item_not_found() -> Self {
        Self::not_found("Item not found")
    }

    #[must_use]
    pub fn route_not_found() -> Self {
        Self::not_found("Route Not Found")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}
