// SPDX-License-Identifier: Apache-2.0

use crate::ApiError;
use serde_json::Value;
use trove_model::{NewItem, ValidationError};

/// Validates a `POST /api/items` body field by field, so a missing or
/// mistyped field reports that field rather than a generic decode error.
pub fn parse_new_item(body: &Value) -> Result<NewItem, ApiError> {
    let name = match body.get("name").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ValidationError::Name.into()),
    };
    let price = match body.get("price").and_then(Value::as_f64) {
        Some(p) if p >= 0.0 => p,
        _ => return Err(ValidationError::Price.into()),
    };
    let category = body
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or_default();
    NewItem::new(name, category, price).map_err(ApiError::from)
}
