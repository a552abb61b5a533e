// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! Pure listing logic: given the full item set and list parameters, produce
//! one page plus its metadata. No error conditions; an out-of-range page is
//! an empty page, not a failure.

mod list;
mod params;

pub use list::list_page;
pub use params::{ListParams, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
