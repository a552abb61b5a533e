// SPDX-License-Identifier: Apache-2.0

use crate::Item;
use serde::{Deserialize, Serialize};

/// Aggregate view over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total: u64,
    pub average_price: f64,
}

impl StatsSnapshot {
    #[must_use]
    pub fn compute(items: &[Item]) -> Self {
        let total = items.len() as u64;
        let average_price = if items.is_empty() {
            0.0
        } else {
            items.iter().map(|i| i.price).sum::<f64>() / items.len() as f64
        };
        Self {
            total,
            average_price,
        }
    }
}
