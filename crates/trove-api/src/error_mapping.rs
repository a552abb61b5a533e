// SPDX-License-Identifier: Apache-2.0

use crate::ApiError;
use trove_model::ValidationError;
use trove_store::StoreError;

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_store::StoreErrorCode;

    #[test]
    fn store_errors_map_to_500() {
        let api: ApiError = StoreError::new(StoreErrorCode::Parse, "bad json").into();
        assert_eq!(api.status, 500);
        assert!(api.message.contains("bad json"));
    }

    #[test]
    fn validation_errors_map_to_400() {
        let api: ApiError = ValidationError::Price.into();
        assert_eq!(api.status, 400);
        assert!(api.message.contains("price"));
    }
}
