// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 256;

/// A catalog record. Ids are assigned once at creation and never change;
/// items carry no further lifecycle (no update, no delete).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    Name,
    Price,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.write_str("name is required and must be a string"),
            Self::Price => f.write_str("price is required and must be a non-negative number"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated creation draft; the store assigns the id on append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    name: String,
    category: String,
    price: f64,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() || name.len() > NAME_MAX_LEN {
            return Err(ValidationError::Name);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::Price);
        }
        Ok(Self {
            name,
            category: category.into(),
            price,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn into_item(self, id: u64) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        assert_eq!(NewItem::new("", "", 1.0), Err(ValidationError::Name));
    }

    #[test]
    fn rejects_negative_and_non_finite_price() {
        assert_eq!(NewItem::new("Widget", "", -0.01), Err(ValidationError::Price));
        assert_eq!(
            NewItem::new("Widget", "", f64::NAN),
            Err(ValidationError::Price)
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        let draft = NewItem::new("Freebie", "promo", 0.0).expect("valid draft");
        let item = draft.into_item(7);
        assert_eq!(item.id, 7);
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn validation_messages_name_the_offending_field() {
        assert!(ValidationError::Name.to_string().contains("name"));
        assert!(ValidationError::Price.to_string().contains("price"));
    }

    #[test]
    fn item_without_category_deserializes_to_empty_string() {
        let item: Item =
            serde_json::from_str(r#"{"id":1,"name":"Lamp","price":9.5}"#).expect("parse item");
        assert_eq!(item.category, "");
    }
}
