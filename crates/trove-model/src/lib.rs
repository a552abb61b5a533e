// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod item;
mod page;
mod stats;

pub use item::{Item, NewItem, ValidationError, NAME_MAX_LEN};
pub use page::ItemPage;
pub use stats::StatsSnapshot;
