// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod body;
mod error_mapping;
mod errors;
mod params;

pub use body::parse_new_item;
pub use errors::ApiError;
pub use params::parse_list_params;
