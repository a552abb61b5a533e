// SPDX-License-Identifier: Apache-2.0

use crate::Item;
use serde::{Deserialize, Serialize};

/// One page of the item listing plus its pagination metadata.
///
/// Invariant: `data.len() == min(limit, max(0, total - (page-1)*limit))`;
/// a page past the end is an empty `data`, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ItemPage {
    pub data: Vec<Item>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}
